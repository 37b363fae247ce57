//! Mock backend configurations for integration tests.

pub use dashport::adapters::{MockHttpClient, MockResponse};
pub use dashport::traits::{HttpError, Response};

use serde_json::{json, Value};

pub const BASE_URL: &str = "http://exporter.test";

pub fn url(path: &str) -> String {
    format!("{}{}", BASE_URL, path)
}

/// Builder for a [`MockHttpClient`] that answers like the exporter backend.
pub struct MockBackend {
    client: MockHttpClient,
}

impl MockBackend {
    /// Empty but healthy backend: all four GET endpoints answer 200.
    pub fn new() -> Self {
        let backend = Self {
            client: MockHttpClient::new(),
        };
        backend
            .with_json("/api/config-status", json!({}))
            .with_json(
                "/api/folders",
                json!({ "folders": [], "hasNestedStructure": false, "debug": "" }),
            )
            .with_json("/api/dashboards", json!({ "dashboards": [] }))
            .with_json("/api/alerts", json!({ "alerts": [] }))
    }

    pub fn with_json(self, path: &str, body: Value) -> Self {
        self.client
            .set_response(&url(path), MockResponse::json(200, body));
        self
    }

    pub fn with_status(self, path: &str, status: u16, body: &str) -> Self {
        self.client
            .set_response(&url(path), MockResponse::text(status, body));
        self
    }

    pub fn with_transport_error(self, path: &str) -> Self {
        self.client.set_response(
            &url(path),
            MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string())),
        );
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

pub fn sample_folders() -> Value {
    json!({
        "folders": [
            { "id": 1, "uid": "a", "title": "Infrastructure", "dashboardCount": 2 },
            { "id": 2, "uid": "b", "title": "Databases", "parentUid": "a", "dashboardCount": 1 },
            { "id": 3, "uid": "c", "title": "Lost", "parentUid": "missing" }
        ],
        "hasNestedStructure": true,
        "debug": "3 folders, 1 nested"
    })
}

pub fn sample_dashboards() -> Value {
    json!({
        "dashboards": [
            { "uid": "d1", "title": "Sales", "folderId": 0, "tags": ["prod"] },
            { "uid": "d2", "title": "Node Exporter", "folderId": 1, "folderTitle": "Infrastructure", "tags": ["infra"] },
            { "uid": "d3", "title": "Postgres", "folderId": 2, "folderTitle": "Databases", "tags": [] }
        ]
    })
}

pub fn sample_alerts() -> Value {
    json!({
        "alerts": [
            { "uid": "a1", "title": "CPU high", "folderId": 1, "folderTitle": "Infrastructure" },
            { "uid": "a2", "title": "Replication lag", "folderId": 2, "folderTitle": "Databases" },
            { "uid": "a3", "title": "Heartbeat" }
        ]
    })
}
