//! Message handling for the App.

use tracing::{debug, error, info, warn};

use crate::export::ExportReport;
use crate::models::{CollectionKind, FoldersPayload};
use crate::notifications::NotificationLevel;

use super::{App, AppMessage, LoadTask};

impl App {
    /// Handle an incoming async message
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::LoadStage { task, stage } => {
                debug!(task = task.noun(), detail = %stage.detail, "{}", stage.message);
                self.loading.start(task, stage);
            }

            AppMessage::ConfigLoaded(config) => {
                self.loading.finish(LoadTask::Config);
                if !config.has_env_file {
                    let detail = config
                        .error_message
                        .clone()
                        .unwrap_or_else(|| "backend configuration file is missing".to_string());
                    warn!("Backend running without configuration file: {}", detail);
                    self.notifications.push(
                        NotificationLevel::Warning,
                        format!("Configuration problem: {}", detail),
                    );
                }
                self.session.apply_config(config);
            }

            AppMessage::ConfigFailed { error } => {
                self.loading.finish(LoadTask::Config);
                // Defaults stay in effect; not worth interrupting the operator
                debug!("Config status unavailable, using defaults: {}", error);
            }

            AppMessage::FoldersLoaded(payload) => {
                self.loading.finish(LoadTask::Folders);
                if let FoldersPayload::Detailed {
                    has_nested_structure,
                    debug,
                    ..
                } = &payload
                {
                    let level = if *has_nested_structure {
                        NotificationLevel::Info
                    } else {
                        NotificationLevel::Warning
                    };
                    self.notifications
                        .push(level, format!("Folder info: {}", debug));
                }
                self.session.replace_folders(payload.into_folders());
            }

            AppMessage::DashboardsLoaded(dashboards) => {
                self.loading.finish(LoadTask::Dashboards);
                self.session.replace_dashboards(dashboards);
            }

            AppMessage::AlertsLoaded(alerts) => {
                self.loading.finish(LoadTask::Alerts);
                self.session.replace_alerts(alerts);
            }

            AppMessage::LoadFailed { task, error } => {
                self.loading.finish(task);
                error!("{}", error);
                self.notifications.push(NotificationLevel::Error, error);
            }

            AppMessage::ExportFinished(report) => {
                self.export_in_flight = false;
                let (level, message) = match &report {
                    ExportReport::Summary(summary) if summary.is_partial() => (
                        NotificationLevel::Warning,
                        format!(
                            "Export completed with {} warning(s)",
                            summary.warnings().len()
                        ),
                    ),
                    ExportReport::Summary(_) => {
                        (NotificationLevel::Success, "Export completed".to_string())
                    }
                    ExportReport::Saved { path, .. } => (
                        NotificationLevel::Success,
                        format!("Archive saved to {}", path.display()),
                    ),
                };
                info!("{}", message);
                self.notifications.push(level, message);
                self.export_report = Some(report);
            }

            AppMessage::ExportFailed { message, category } => {
                self.export_in_flight = false;
                error!(category = %category, "{}", message);
                self.notifications.push(
                    NotificationLevel::for_category(category),
                    format!("{}. {}", message, category.recovery_hint()),
                );
            }
        }
        self.sync_changes();
    }

    /// Number of items loaded for `kind`, for the header.
    pub fn loaded_count(&self, kind: CollectionKind) -> usize {
        self.session.total_len(kind)
    }
}
