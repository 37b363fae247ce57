//! AppMessage enum for async communication within the application.

use crate::error::ErrorCategory;
use crate::export::ExportReport;
use crate::models::{Alert, ConfigStatus, Dashboard, FoldersPayload};

use super::types::{LoadStage, LoadTask};

/// Messages sent from spawned network tasks back to the event loop.
#[derive(Debug)]
pub enum AppMessage {
    /// A fetch started or moved to a new stage
    LoadStage { task: LoadTask, stage: LoadStage },
    /// Backend feature flags received
    ConfigLoaded(ConfigStatus),
    /// Config fetch failed; defaults stay in place
    ConfigFailed { error: String },
    /// Folder list received and decoded
    FoldersLoaded(FoldersPayload),
    /// Dashboard list received and decoded
    DashboardsLoaded(Vec<Dashboard>),
    /// Alert list received and decoded
    AlertsLoaded(Vec<Alert>),
    /// A folders/dashboards/alerts fetch failed
    LoadFailed { task: LoadTask, error: String },
    /// Export round trip finished
    ExportFinished(ExportReport),
    /// Export failed before or after the request
    ExportFailed {
        message: String,
        category: ErrorCategory,
    },
}
