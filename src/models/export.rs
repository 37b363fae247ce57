use serde::{Deserialize, Serialize};

/// Body of `POST /api/export`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    #[serde(rename = "dashboardUIDs")]
    pub dashboard_uids: Vec<String>,
    #[serde(rename = "alertUIDs")]
    pub alert_uids: Vec<String>,
    #[serde(rename = "includeAlerts")]
    pub include_alerts: bool,
    #[serde(rename = "exportAsZip")]
    pub export_as_zip: bool,
}

impl ExportRequest {
    pub fn is_empty(&self) -> bool {
        self.dashboard_uids.is_empty() && self.alert_uids.is_empty()
    }
}

/// JSON summary returned by `POST /api/export` when no archive is streamed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    #[serde(default)]
    pub exported_dashboards: u64,
    #[serde(default)]
    pub exported_alerts: u64,
    /// Library panels pulled in by the exported dashboards.
    #[serde(default)]
    pub exported_libraries: u64,
    #[serde(default)]
    pub export_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ExportSummary {
    /// Non-fatal problems reported alongside a successful export.
    pub fn warnings(&self) -> &[String] {
        self.errors.as_deref().unwrap_or(&[])
    }

    pub fn is_partial(&self) -> bool {
        !self.warnings().is_empty()
    }
}
