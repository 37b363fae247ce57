use serde::{Deserialize, Serialize};

use super::{deserialize_folder_id, deserialize_non_empty, deserialize_nullable_vec, FolderScoped};

/// An alert rule as listed by `GET /api/alerts`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub uid: String,
    pub title: String,
    /// Missing or null folder ids are read as `0` (General).
    #[serde(default, deserialize_with = "deserialize_folder_id")]
    pub folder_id: i64,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub folder_title: Option<String>,
}

impl Alert {
    pub fn new(uid: impl Into<String>, title: impl Into<String>, folder_id: i64) -> Self {
        Self {
            uid: uid.into(),
            title: title.into(),
            folder_id,
            folder_title: None,
        }
    }

    pub fn with_folder_title(mut self, title: impl Into<String>) -> Self {
        self.folder_title = Some(title.into());
        self
    }
}

impl FolderScoped for Alert {
    fn uid(&self) -> &str {
        &self.uid
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn folder_id(&self) -> i64 {
        self.folder_id
    }

    fn folder_title(&self) -> Option<&str> {
        self.folder_title.as_deref()
    }

    fn set_folder_title(&mut self, title: String) {
        self.folder_title = Some(title);
    }
}

/// Response of `GET /api/alerts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertsPayload {
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub alerts: Vec<Alert>,
}
