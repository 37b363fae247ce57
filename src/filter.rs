//! Filter pipeline for the dashboard and alert collections.
//!
//! `filter_items` is pure and order-preserving: the folder stage runs first,
//! then the search stage. Applying it twice with the same state yields the
//! same result as applying it once.

use std::fmt;

use crate::models::{Alert, Dashboard, FolderScoped};

/// Selector string for the "All Folders" pseudo node.
pub const ALL_SELECTOR: &str = "all";
/// Selector string for the "General" pseudo node (folder id 0).
pub const GENERAL_SELECTOR: &str = "0";

/// Which folder a collection is narrowed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FolderSelector {
    #[default]
    All,
    /// A folder id in string form. `"0"` is General.
    Folder(String),
}

impl FolderSelector {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_SELECTOR {
            FolderSelector::All
        } else {
            FolderSelector::Folder(raw.to_string())
        }
    }

    pub fn general() -> Self {
        FolderSelector::Folder(GENERAL_SELECTOR.to_string())
    }

    pub fn folder_id(id: i64) -> Self {
        FolderSelector::Folder(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            FolderSelector::All => ALL_SELECTOR,
            FolderSelector::Folder(raw) => raw,
        }
    }

    /// Folder stage predicate. Selectors that do not parse as an integer
    /// match nothing.
    pub fn matches(&self, folder_id: i64) -> bool {
        match self {
            FolderSelector::All => true,
            FolderSelector::Folder(raw) => raw
                .trim()
                .parse::<i64>()
                .map(|id| id == folder_id)
                .unwrap_or(false),
        }
    }
}

impl fmt::Display for FolderSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-collection filter inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub selected_folder: FolderSelector,
    pub search_query: String,
}

impl FilterState {
    pub fn new(selected_folder: FolderSelector, search_query: impl Into<String>) -> Self {
        Self {
            selected_folder,
            search_query: search_query.into(),
        }
    }

    /// Lowercased, trimmed query, or `None` when the search stage is skipped.
    pub fn needle(&self) -> Option<String> {
        let trimmed = self.search_query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}

/// Items that take part in the search stage.
pub trait Searchable: FolderScoped {
    /// `needle` is already lowercased and non-empty.
    fn matches_search(&self, needle: &str) -> bool;
}

impl Searchable for Dashboard {
    fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

impl Searchable for Alert {
    fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .folder_title
                .as_deref()
                .is_some_and(|folder| folder.to_lowercase().contains(needle))
    }
}

/// Apply the folder stage then the search stage.
pub fn filter_items<T>(items: &[T], state: &FilterState) -> Vec<T>
where
    T: Searchable + Clone,
{
    let needle = state.needle();
    items
        .iter()
        .filter(|item| state.selected_folder.matches(item.folder_id()))
        .filter(|item| match &needle {
            Some(needle) => item.matches_search(needle),
            None => true,
        })
        .cloned()
        .collect()
}
