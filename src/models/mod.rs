//! Wire models for the exporter backend.
//!
//! Every type here mirrors a JSON shape returned by (or sent to) the
//! exporter service. Field names follow the backend's camelCase convention.

mod alert;
mod config;
mod dashboard;
mod export;
mod folder;

pub use alert::{Alert, AlertsPayload};
pub use config::ConfigStatus;
pub use dashboard::{Dashboard, DashboardsPayload};
pub use export::{ExportRequest, ExportSummary};
pub use folder::{Folder, FoldersPayload};

use serde::{Deserialize, Deserializer};

/// Title given to items that live outside any folder.
pub const GENERAL_FOLDER_TITLE: &str = "General";

/// The two parallel item collections the operator can browse and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum CollectionKind {
    #[default]
    Dashboards,
    Alerts,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 2] = [CollectionKind::Dashboards, CollectionKind::Alerts];

    /// Plural noun for headings ("Dashboards", "Alerts").
    pub fn label(&self) -> &'static str {
        match self {
            CollectionKind::Dashboards => "Dashboards",
            CollectionKind::Alerts => "Alerts",
        }
    }

    /// Lowercase plural used inside sentences.
    pub fn noun(&self) -> &'static str {
        match self {
            CollectionKind::Dashboards => "dashboards",
            CollectionKind::Alerts => "alerts",
        }
    }

    /// The other collection.
    pub fn other(&self) -> CollectionKind {
        match self {
            CollectionKind::Dashboards => CollectionKind::Alerts,
            CollectionKind::Alerts => CollectionKind::Dashboards,
        }
    }
}

/// Behavior shared by dashboards and alerts once they are loaded.
pub trait FolderScoped {
    fn uid(&self) -> &str;
    fn title(&self) -> &str;
    fn folder_id(&self) -> i64;
    fn folder_title(&self) -> Option<&str>;
    fn set_folder_title(&mut self, title: String);

    /// Fill in the "General" folder title for unfoldered items.
    ///
    /// Applied once when a collection is loaded, never on render.
    fn normalize_general_folder(&mut self) {
        if self.folder_id() == 0 && self.folder_title().is_none() {
            self.set_folder_title(GENERAL_FOLDER_TITLE.to_string());
        }
    }

    /// Folder name for display, "General" when unknown.
    fn folder_display(&self) -> &str {
        self.folder_title().unwrap_or(GENERAL_FOLDER_TITLE)
    }
}

/// Deserialize a folder id given as an integer, a numeric string, or null.
///
/// Null and missing values map to `0`, the General folder.
pub(crate) fn deserialize_folder_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct FolderIdVisitor;

    impl<'de> Visitor<'de> for FolderIdVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer, a numeric string, or null")
        }

        fn visit_i64<E>(self, value: i64) -> Result<i64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<i64, E>
        where
            E: de::Error,
        {
            i64::try_from(value).map_err(|_| E::custom(format!("folder id {} out of range", value)))
        }

        fn visit_str<E>(self, value: &str) -> Result<i64, E>
        where
            E: de::Error,
        {
            value
                .trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("folder id '{}' is not numeric", value)))
        }

        fn visit_unit<E>(self) -> Result<i64, E>
        where
            E: de::Error,
        {
            Ok(0)
        }

        fn visit_none<E>(self) -> Result<i64, E>
        where
            E: de::Error,
        {
            Ok(0)
        }
    }

    deserializer.deserialize_any(FolderIdVisitor)
}

/// Deserialize an optional string, treating `""` the same as absent.
pub(crate) fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.filter(|s| !s.is_empty()))
}

/// Deserialize a list that may be sent as `null`.
pub(crate) fn deserialize_nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_kind_other() {
        assert_eq!(CollectionKind::Dashboards.other(), CollectionKind::Alerts);
        assert_eq!(CollectionKind::Alerts.other(), CollectionKind::Dashboards);
    }

    #[test]
    fn test_folder_id_accepts_string_and_null() {
        let d: Dashboard =
            serde_json::from_str(r#"{"uid":"a","title":"A","folderId":"12"}"#).unwrap();
        assert_eq!(d.folder_id, 12);

        let d: Dashboard =
            serde_json::from_str(r#"{"uid":"a","title":"A","folderId":null}"#).unwrap();
        assert_eq!(d.folder_id, 0);

        let d: Dashboard = serde_json::from_str(r#"{"uid":"a","title":"A"}"#).unwrap();
        assert_eq!(d.folder_id, 0);
    }

    #[test]
    fn test_folder_id_rejects_garbage() {
        let result = serde_json::from_str::<Dashboard>(r#"{"uid":"a","title":"A","folderId":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_normalize_general_folder_only_for_folder_zero() {
        let mut general: Dashboard =
            serde_json::from_str(r#"{"uid":"a","title":"A","folderId":0}"#).unwrap();
        general.normalize_general_folder();
        assert_eq!(general.folder_title.as_deref(), Some("General"));

        let mut foldered: Dashboard =
            serde_json::from_str(r#"{"uid":"b","title":"B","folderId":4}"#).unwrap();
        foldered.normalize_general_folder();
        assert_eq!(foldered.folder_title, None);
        assert_eq!(foldered.folder_display(), "General");
    }

    #[test]
    fn test_normalize_keeps_existing_title() {
        let mut d: Dashboard =
            serde_json::from_str(r#"{"uid":"a","title":"A","folderId":0,"folderTitle":"Root"}"#)
                .unwrap();
        d.normalize_general_folder();
        assert_eq!(d.folder_title.as_deref(), Some("Root"));
    }
}
