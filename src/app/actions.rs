//! User actions for the App.
//!
//! This module provides the operations bound to keys:
//! - Folder activation (debounced)
//! - Item selection and bulk selection
//! - Export flags and the export round trip

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::export::{run_export, ExportReport};
use crate::notifications::NotificationLevel;

use super::{App, AppMessage};

impl App {
    // ========================================================================
    // Folder panel
    // ========================================================================

    /// Activate the folder under the cursor in the active collection.
    pub fn activate_folder(&mut self) {
        self.activate_folder_at(Instant::now());
    }

    /// Clicks closer than the debounce window to the last accepted one are
    /// dropped.
    pub fn activate_folder_at(&mut self, now: Instant) -> bool {
        let kind = self.active;
        let index = self.cursor(kind).folder;
        let Some(node) = self.session.folder_tree(kind).into_iter().nth(index) else {
            return false;
        };
        if !self.folder_clicks.accept_at(now) {
            debug!("Folder click dropped by debounce");
            return false;
        }
        self.session.select_folder(kind, node.selector);
        self.cursor_mut(kind).item = 0;
        self.sync_changes();
        true
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn toggle_current_item(&mut self) {
        if let Some(uid) = self.current_item_uid() {
            self.session.toggle_item(self.active, &uid);
            self.sync_changes();
        }
    }

    pub fn select_all_visible(&mut self) {
        self.session.select_all(self.active);
        self.sync_changes();
    }

    pub fn clear_selection(&mut self) {
        self.session.clear(self.active);
        self.sync_changes();
    }

    // ========================================================================
    // Export flags
    // ========================================================================

    pub fn toggle_include_alerts(&mut self) {
        let include = !self.session.include_alerts();
        self.session.set_include_alerts(include);
        self.sync_changes();
    }

    pub fn toggle_export_as_zip(&mut self) {
        let zip = !self.session.export_as_zip();
        if !self.session.set_export_as_zip(zip) {
            self.notifications.push(
                NotificationLevel::Info,
                "ZIP export is enforced by the backend configuration",
            );
            self.mark_dirty();
            return;
        }
        self.sync_changes();
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Validate the selection and spawn the export request.
    ///
    /// An empty selection is rejected here, before any request is built,
    /// even when the export control is force-enabled.
    pub fn start_export(&mut self) {
        if self.export_in_flight {
            debug!("Export already running");
            return;
        }

        let request = match self.session.export_request() {
            Ok(request) => request,
            Err(err) => {
                warn!("Export rejected: {}", err);
                self.notifications
                    .push(NotificationLevel::for_category(err.category()), err.user_message());
                self.mark_dirty();
                return;
            }
        };

        info!(
            dashboards = request.dashboard_uids.len(),
            alerts = request.alert_uids.len(),
            include_alerts = request.include_alerts,
            zip = request.export_as_zip,
            "Starting export"
        );
        self.export_in_flight = true;
        self.export_report = None;
        self.mark_dirty();

        let client = self.client.clone();
        let download_dir = self.config.download_dir.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match run_export(&client, &request, &download_dir).await {
                Ok(report) => AppMessage::ExportFinished(report),
                Err(err) => AppMessage::ExportFailed {
                    message: err.user_message(),
                    category: err.category(),
                },
            };
            if tx.send(message).is_err() {
                debug!("Dropping export result: app closed");
            }
        });
    }

    /// Open the saved archive with the OS default handler.
    pub fn open_export(&mut self) {
        let Some(ExportReport::Saved { path, .. }) = &self.export_report else {
            return;
        };
        info!("Opening {}", path.display());
        if let Err(err) = open::that_detached(path) {
            warn!("Failed to open {}: {}", path.display(), err);
            self.notifications.push(
                NotificationLevel::Error,
                format!("Could not open {}: {}", path.display(), err),
            );
        }
        self.mark_dirty();
    }

    pub fn close_export_report(&mut self) {
        if self.export_report.take().is_some() {
            self.mark_dirty();
        }
    }

    pub fn dismiss_notification(&mut self) {
        if self.notifications.dismiss_latest() {
            self.mark_dirty();
        }
    }
}
