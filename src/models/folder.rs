use serde::{Deserialize, Serialize};

use super::{deserialize_folder_id, deserialize_non_empty};

/// A Grafana folder as listed by `GET /api/folders`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    #[serde(deserialize_with = "deserialize_folder_id")]
    pub id: i64,
    pub uid: String,
    pub title: String,
    /// `uid` of the parent folder; `None` for root folders.
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_uid: Option<String>,
    /// Number of dashboards in this folder, computed by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_count: Option<u32>,
}

impl Folder {
    pub fn new(id: i64, uid: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            uid: uid.into(),
            title: title.into(),
            parent_uid: None,
            dashboard_count: None,
        }
    }

    pub fn with_parent(mut self, parent_uid: impl Into<String>) -> Self {
        self.parent_uid = Some(parent_uid.into());
        self
    }

    pub fn with_dashboard_count(mut self, count: u32) -> Self {
        self.dashboard_count = Some(count);
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_uid.is_none()
    }
}

/// Response of `GET /api/folders`.
///
/// Newer backends wrap the list with nesting diagnostics; older ones return
/// the bare array.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FoldersPayload {
    Detailed {
        folders: Vec<Folder>,
        #[serde(default, rename = "hasNestedStructure")]
        has_nested_structure: bool,
        #[serde(default)]
        debug: String,
    },
    Legacy(Vec<Folder>),
}

impl FoldersPayload {
    pub fn into_folders(self) -> Vec<Folder> {
        match self {
            FoldersPayload::Detailed { folders, .. } => folders,
            FoldersPayload::Legacy(folders) => folders,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            FoldersPayload::Detailed { folders, .. } | FoldersPayload::Legacy(folders) => {
                folders.len()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
