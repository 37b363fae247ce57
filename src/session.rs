//! Session state: the loaded collections, their filters and selections.
//!
//! All mutation goes through methods on [`Session`]. Each mutation records a
//! [`SessionChange`] that the app drains with [`Session::take_changes`] to
//! decide when to redraw.

use tracing::debug;

use crate::error::ExportError;
use crate::filter::{filter_items, FilterState, FolderSelector};
use crate::folder_tree::{build_folder_tree, dashboard_count, tally_by_folder, FolderNode};
use crate::models::{
    Alert, CollectionKind, ConfigStatus, Dashboard, ExportRequest, Folder, FolderScoped,
};
use crate::selection::{ExportAffordance, SelectionState};

/// A record of what a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChange {
    ConfigApplied,
    FoldersReplaced,
    ItemsReplaced(CollectionKind),
    FilterChanged(CollectionKind),
    SelectionChanged(CollectionKind),
    FlagsChanged,
}

/// A display-ready row of an item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub uid: String,
    pub title: String,
    pub folder: String,
    pub tags: Vec<String>,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: ConfigStatus,
    folders: Vec<Folder>,
    dashboards: Vec<Dashboard>,
    alerts: Vec<Alert>,
    dashboard_filter: FilterState,
    alert_filter: FilterState,
    filtered_dashboards: Vec<Dashboard>,
    filtered_alerts: Vec<Alert>,
    selection: SelectionState,
    include_alerts: bool,
    export_as_zip: bool,
    changes: Vec<SessionChange>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            config: ConfigStatus::default(),
            folders: Vec::new(),
            dashboards: Vec::new(),
            alerts: Vec::new(),
            dashboard_filter: FilterState::default(),
            alert_filter: FilterState::default(),
            filtered_dashboards: Vec::new(),
            filtered_alerts: Vec::new(),
            selection: SelectionState::new(),
            include_alerts: true,
            export_as_zip: false,
            changes: Vec::new(),
        }
    }

    fn record(&mut self, change: SessionChange) {
        self.changes.push(change);
    }

    /// Drain the changes recorded since the last call.
    pub fn take_changes(&mut self) -> Vec<SessionChange> {
        std::mem::take(&mut self.changes)
    }

    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    // ---- configuration -------------------------------------------------

    pub fn apply_config(&mut self, config: ConfigStatus) {
        debug!(
            force_zip = config.force_enable_zip_export,
            has_env_file = config.has_env_file,
            "Applying backend config"
        );
        self.config = config;
        self.record(SessionChange::ConfigApplied);
    }

    pub fn config(&self) -> &ConfigStatus {
        &self.config
    }

    // ---- collections ---------------------------------------------------

    pub fn replace_folders(&mut self, folders: Vec<Folder>) {
        let nested = folders.iter().filter(|f| !f.is_root()).count();
        debug!(total = folders.len(), nested, "Replacing folders");
        self.folders = folders;
        self.record(SessionChange::FoldersReplaced);
    }

    pub fn replace_dashboards(&mut self, mut dashboards: Vec<Dashboard>) {
        dashboards
            .iter_mut()
            .for_each(|d| d.normalize_general_folder());
        if let Some(sample) = dashboards.first() {
            debug!(count = dashboards.len(), sample = ?sample, "Replacing dashboards");
        }
        self.dashboards = dashboards;
        self.refilter(CollectionKind::Dashboards);
        self.record(SessionChange::ItemsReplaced(CollectionKind::Dashboards));
    }

    pub fn replace_alerts(&mut self, mut alerts: Vec<Alert>) {
        alerts
            .iter_mut()
            .for_each(|a| a.normalize_general_folder());
        if let Some(sample) = alerts.first() {
            debug!(count = alerts.len(), sample = ?sample, "Replacing alerts");
        }
        self.alerts = alerts;
        self.refilter(CollectionKind::Alerts);
        self.record(SessionChange::ItemsReplaced(CollectionKind::Alerts));
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn dashboards(&self) -> &[Dashboard] {
        &self.dashboards
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn filtered_dashboards(&self) -> &[Dashboard] {
        &self.filtered_dashboards
    }

    pub fn filtered_alerts(&self) -> &[Alert] {
        &self.filtered_alerts
    }

    pub fn total_len(&self, kind: CollectionKind) -> usize {
        match kind {
            CollectionKind::Dashboards => self.dashboards.len(),
            CollectionKind::Alerts => self.alerts.len(),
        }
    }

    pub fn filtered_len(&self, kind: CollectionKind) -> usize {
        match kind {
            CollectionKind::Dashboards => self.filtered_dashboards.len(),
            CollectionKind::Alerts => self.filtered_alerts.len(),
        }
    }

    pub fn filtered_uids(&self, kind: CollectionKind) -> Vec<String> {
        match kind {
            CollectionKind::Dashboards => uids_of(&self.filtered_dashboards),
            CollectionKind::Alerts => uids_of(&self.filtered_alerts),
        }
    }

    /// Rows of the filtered view, with selection derived from the sets.
    pub fn item_rows(&self, kind: CollectionKind) -> Vec<ItemRow> {
        match kind {
            CollectionKind::Dashboards => self
                .filtered_dashboards
                .iter()
                .map(|d| ItemRow {
                    uid: d.uid.clone(),
                    title: d.title.clone(),
                    folder: d.folder_display().to_string(),
                    tags: d.tags.clone(),
                    selected: self.selection.contains(kind, &d.uid),
                })
                .collect(),
            CollectionKind::Alerts => self
                .filtered_alerts
                .iter()
                .map(|a| ItemRow {
                    uid: a.uid.clone(),
                    title: a.title.clone(),
                    folder: a.folder_display().to_string(),
                    tags: Vec::new(),
                    selected: self.selection.contains(kind, &a.uid),
                })
                .collect(),
        }
    }

    // ---- filtering -----------------------------------------------------

    fn filter_state_mut(&mut self, kind: CollectionKind) -> &mut FilterState {
        match kind {
            CollectionKind::Dashboards => &mut self.dashboard_filter,
            CollectionKind::Alerts => &mut self.alert_filter,
        }
    }

    pub fn filter_state(&self, kind: CollectionKind) -> &FilterState {
        match kind {
            CollectionKind::Dashboards => &self.dashboard_filter,
            CollectionKind::Alerts => &self.alert_filter,
        }
    }

    fn refilter(&mut self, kind: CollectionKind) {
        match kind {
            CollectionKind::Dashboards => {
                self.filtered_dashboards = filter_items(&self.dashboards, &self.dashboard_filter);
            }
            CollectionKind::Alerts => {
                self.filtered_alerts = filter_items(&self.alerts, &self.alert_filter);
            }
        }
    }

    /// Activate a folder node: narrow `kind` to that folder and refilter.
    pub fn select_folder(&mut self, kind: CollectionKind, selector: FolderSelector) {
        debug!(collection = kind.noun(), folder = %selector, "Selecting folder");
        self.filter_state_mut(kind).selected_folder = selector;
        self.refilter(kind);
        self.record(SessionChange::FilterChanged(kind));
    }

    pub fn set_search_query(&mut self, kind: CollectionKind, query: impl Into<String>) {
        self.filter_state_mut(kind).search_query = query.into();
        self.refilter(kind);
        self.record(SessionChange::FilterChanged(kind));
    }

    pub fn folder_tree(&self, kind: CollectionKind) -> Vec<FolderNode> {
        let selected = &self.filter_state(kind).selected_folder;
        match kind {
            CollectionKind::Dashboards => build_folder_tree(&self.folders, dashboard_count, selected),
            CollectionKind::Alerts => {
                let tally = tally_by_folder(self.alerts.iter().map(|a| a.folder_id));
                build_folder_tree(
                    &self.folders,
                    |folder| tally.get(&folder.id).copied().unwrap_or(0),
                    selected,
                )
            }
        }
    }

    // ---- selection -----------------------------------------------------

    /// Set the selection state of one item. The item does not need to be in
    /// the filtered view.
    pub fn toggle(&mut self, kind: CollectionKind, uid: &str, selected: bool) {
        if self.selection.toggle(kind, uid, selected) {
            self.record(SessionChange::SelectionChanged(kind));
        }
    }

    /// Flip the selection state of one item.
    pub fn toggle_item(&mut self, kind: CollectionKind, uid: &str) {
        let selected = !self.selection.contains(kind, uid);
        self.toggle(kind, uid, selected);
    }

    /// Add every item of the current filtered view.
    pub fn select_all(&mut self, kind: CollectionKind) {
        let uids = self.filtered_uids(kind);
        let added = self.selection.select_all(kind, uids);
        debug!(collection = kind.noun(), added, "Select all");
        self.record(SessionChange::SelectionChanged(kind));
    }

    pub fn clear(&mut self, kind: CollectionKind) {
        self.selection.clear(kind);
        self.record(SessionChange::SelectionChanged(kind));
    }

    pub fn is_selected(&self, kind: CollectionKind, uid: &str) -> bool {
        self.selection.contains(kind, uid)
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn export_affordance(&self) -> ExportAffordance {
        self.selection
            .affordance(self.config.force_enable_zip_export)
    }

    // ---- export flags --------------------------------------------------

    pub fn include_alerts(&self) -> bool {
        self.include_alerts
    }

    pub fn set_include_alerts(&mut self, include: bool) {
        self.include_alerts = include;
        self.record(SessionChange::FlagsChanged);
    }

    /// The ZIP flag as sent: forced on by the backend config.
    pub fn export_as_zip(&self) -> bool {
        self.config.force_enable_zip_export || self.export_as_zip
    }

    pub fn zip_locked(&self) -> bool {
        self.config.force_enable_zip_export
    }

    /// Returns `false` when the flag is locked by config.
    pub fn set_export_as_zip(&mut self, zip: bool) -> bool {
        if self.zip_locked() {
            return false;
        }
        self.export_as_zip = zip;
        self.record(SessionChange::FlagsChanged);
        true
    }

    /// Build the export payload from the current selection and flags.
    ///
    /// Fails with [`ExportError::NothingSelected`] when both sets are empty,
    /// even if the export action is force-enabled.
    pub fn export_request(&self) -> Result<ExportRequest, ExportError> {
        if self.selection.combined() == 0 {
            return Err(ExportError::NothingSelected);
        }
        Ok(ExportRequest {
            dashboard_uids: self.selection.uids(CollectionKind::Dashboards),
            alert_uids: self.selection.uids(CollectionKind::Alerts),
            include_alerts: self.include_alerts,
            export_as_zip: self.export_as_zip(),
        })
    }
}

fn uids_of<T: FolderScoped>(items: &[T]) -> Vec<String> {
    items.iter().map(|item| item.uid().to_string()).collect()
}
