//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let backend = MockBackend::new().with_json("/api/alerts", sample_alerts());
//! let app = TestAppBuilder::new().with_http(backend.build()).build();
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::path::PathBuf;
use std::sync::Arc;

use dashport::api::ExporterClient;
use dashport::app::{App, AppMessage};
use dashport::startup::ClientConfig;

/// Builder for creating test App instances.
#[derive(Default)]
pub struct TestAppBuilder {
    http: Option<MockHttpClient>,
    download_dir: Option<PathBuf>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_http(mut self, http: MockHttpClient) -> Self {
        self.http = Some(http);
        self
    }

    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = Some(dir.into());
        self
    }

    pub fn build(self) -> App {
        let http = self.http.unwrap_or_else(|| MockBackend::new().build());
        let client = ExporterClient::new(BASE_URL, Arc::new(http));
        let mut config = ClientConfig::default().with_base_url(BASE_URL);
        if let Some(dir) = self.download_dir {
            config = config.with_download_dir(dir);
        }
        App::new(client, config)
    }
}

/// Feed channel messages into the app until `results` non-stage messages
/// were handled. Returns the name of every message seen.
pub async fn pump_messages(app: &mut App, results: usize) -> Vec<&'static str> {
    let mut rx = app
        .message_rx
        .take()
        .expect("message receiver already taken");
    let mut seen = Vec::new();
    let mut finished = 0;
    while finished < results {
        let msg = tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for app message")
            .expect("channel closed");
        if !matches!(msg, AppMessage::LoadStage { .. }) {
            finished += 1;
        }
        seen.push(message_name(&msg));
        app.handle_message(msg);
    }
    app.message_rx = Some(rx);
    seen
}

fn message_name(msg: &AppMessage) -> &'static str {
    match msg {
        AppMessage::LoadStage { .. } => "LoadStage",
        AppMessage::ConfigLoaded(_) => "ConfigLoaded",
        AppMessage::ConfigFailed { .. } => "ConfigFailed",
        AppMessage::FoldersLoaded(_) => "FoldersLoaded",
        AppMessage::DashboardsLoaded(_) => "DashboardsLoaded",
        AppMessage::AlertsLoaded(_) => "AlertsLoaded",
        AppMessage::LoadFailed { .. } => "LoadFailed",
        AppMessage::ExportFinished(_) => "ExportFinished",
        AppMessage::ExportFailed { .. } => "ExportFailed",
    }
}
