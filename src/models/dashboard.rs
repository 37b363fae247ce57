use serde::{Deserialize, Serialize};

use super::{deserialize_folder_id, deserialize_non_empty, deserialize_nullable_vec, FolderScoped};

/// A dashboard as listed by `GET /api/dashboards`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub uid: String,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_folder_id")]
    pub folder_id: i64,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub folder_title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub tags: Vec<String>,
}

impl Dashboard {
    pub fn new(uid: impl Into<String>, title: impl Into<String>, folder_id: i64) -> Self {
        Self {
            uid: uid.into(),
            title: title.into(),
            folder_id,
            folder_title: None,
            tags: Vec::new(),
        }
    }

    pub fn with_folder_title(mut self, title: impl Into<String>) -> Self {
        self.folder_title = Some(title.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

impl FolderScoped for Dashboard {
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

/// Response of `GET /api/dashboards`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardsPayload {
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub dashboards: Vec<Dashboard>,
}
