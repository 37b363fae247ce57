//! Client for the exporter backend API.
//!
//! Every call buffers and decodes the full body before returning, so a caller
//! never observes a half-loaded collection.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;
use crate::models::{
    Alert, AlertsPayload, ConfigStatus, Dashboard, DashboardsPayload, ExportRequest,
    FoldersPayload,
};
use crate::traits::{Headers, HttpClient, Response};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

pub const CONFIG_STATUS_PATH: &str = "/api/config-status";
pub const FOLDERS_PATH: &str = "/api/folders";
pub const DASHBOARDS_PATH: &str = "/api/dashboards";
pub const ALERTS_PATH: &str = "/api/alerts";
pub const EXPORT_PATH: &str = "/api/export";

/// Client for the exporter backend.
///
/// Cheap to clone; spawned tasks each take their own copy.
#[derive(Clone)]
pub struct ExporterClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ExporterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExporterClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ExporterClient {
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self
            .http
            .get(&url, &json_headers())
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: path.to_string(),
                source,
            })?;

        if !response.is_success() {
            return Err(ApiError::status(path, response.status, &response.body));
        }

        response.json().map_err(|e| ApiError::Decode {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
    }

    /// `GET /api/config-status`.
    pub async fn fetch_config(&self) -> Result<ConfigStatus, ApiError> {
        self.get_json(CONFIG_STATUS_PATH).await
    }

    /// `GET /api/folders`, in either the detailed or the legacy shape.
    pub async fn fetch_folders(&self) -> Result<FoldersPayload, ApiError> {
        self.get_json(FOLDERS_PATH).await
    }

    /// `GET /api/dashboards`.
    pub async fn fetch_dashboards(&self) -> Result<Vec<Dashboard>, ApiError> {
        let payload: DashboardsPayload = self.get_json(DASHBOARDS_PATH).await?;
        Ok(payload.dashboards)
    }

    /// `GET /api/alerts`.
    pub async fn fetch_alerts(&self) -> Result<Vec<Alert>, ApiError> {
        let payload: AlertsPayload = self.get_json(ALERTS_PATH).await?;
        Ok(payload.alerts)
    }

    /// `POST /api/export`.
    ///
    /// Returns the raw response on 2xx; interpreting it (summary vs archive)
    /// is left to [`crate::export::negotiate`].
    pub async fn post_export(&self, request: &ExportRequest) -> Result<Response, ApiError> {
        let url = self.url(EXPORT_PATH);
        let body = serde_json::to_string(request).map_err(|e| ApiError::Decode {
            endpoint: EXPORT_PATH.to_string(),
            message: e.to_string(),
        })?;
        debug!(
            dashboards = request.dashboard_uids.len(),
            alerts = request.alert_uids.len(),
            zip = request.export_as_zip,
            "POST {}",
            url
        );

        let response = self
            .http
            .post(&url, &body, &json_headers())
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: EXPORT_PATH.to_string(),
                source,
            })?;

        if !response.is_success() {
            return Err(ApiError::status(EXPORT_PATH, response.status, &response.body));
        }
        Ok(response)
    }
}

fn json_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers
}
