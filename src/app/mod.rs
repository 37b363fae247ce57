//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Focus`] - Which panel receives navigation keys
//! - [`LoadTask`] / [`LoadingState`] - Startup fetches in flight
//! - [`AppMessage`] - Messages for async communication

mod actions;
mod handlers;
mod loader;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{Focus, LoadStage, LoadTask, LoadingState, ViewCursor};

use std::time::Instant;

use tokio::sync::mpsc;

use crate::api::ExporterClient;
use crate::debounce::ClickDebouncer;
use crate::export::ExportReport;
use crate::models::CollectionKind;
use crate::notifications::Notifications;
use crate::session::{Session, SessionChange};
use crate::startup::ClientConfig;

/// Main application state
pub struct App {
    /// Loaded collections, filters, selection and export flags
    pub session: Session,
    /// Backend client; cloned into every spawned request
    pub client: ExporterClient,
    pub config: ClientConfig,
    /// Collection shown in the main view
    pub active: CollectionKind,
    pub focus: Focus,
    dashboard_cursor: ViewCursor,
    alert_cursor: ViewCursor,
    /// Folder activation debouncer, shared by both collections
    pub folder_clicks: ClickDebouncer,
    pub notifications: Notifications,
    pub loading: LoadingState,
    /// True while a POST /api/export is outstanding
    pub export_in_flight: bool,
    /// Result overlay of the last finished export
    pub export_report: Option<ExportReport>,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender handed to spawned tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Dirty flag: redraw on the next loop iteration
    pub needs_redraw: bool,
    pub should_quit: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
}

impl App {
    pub fn new(client: ExporterClient, config: ClientConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            session: Session::new(),
            client,
            config,
            active: CollectionKind::Dashboards,
            focus: Focus::default(),
            dashboard_cursor: ViewCursor::default(),
            alert_cursor: ViewCursor::default(),
            folder_clicks: ClickDebouncer::default(),
            notifications: Notifications::new(),
            loading: LoadingState::default(),
            export_in_flight: false,
            export_report: None,
            message_rx: Some(message_rx),
            message_tx,
            needs_redraw: true,
            should_quit: false,
            tick_count: 0,
        }
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance animations and expire notifications.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.notifications.expire(Instant::now()) {
            self.mark_dirty();
        }
        // spinner frames change every few ticks
        if (self.loading.is_loading() || self.export_in_flight) && self.tick_count % 6 == 0 {
            self.mark_dirty();
        }
    }

    pub fn cursor(&self, kind: CollectionKind) -> ViewCursor {
        match kind {
            CollectionKind::Dashboards => self.dashboard_cursor,
            CollectionKind::Alerts => self.alert_cursor,
        }
    }

    pub(crate) fn cursor_mut(&mut self, kind: CollectionKind) -> &mut ViewCursor {
        match kind {
            CollectionKind::Dashboards => &mut self.dashboard_cursor,
            CollectionKind::Alerts => &mut self.alert_cursor,
        }
    }

    /// Drain session changes, clamp cursors of touched collections and mark
    /// the view dirty.
    pub fn sync_changes(&mut self) {
        let changes = self.session.take_changes();
        if changes.is_empty() {
            return;
        }
        for change in changes {
            match change {
                SessionChange::FoldersReplaced => {
                    for kind in CollectionKind::ALL {
                        self.clamp_cursor(kind);
                    }
                }
                SessionChange::ItemsReplaced(kind) | SessionChange::FilterChanged(kind) => {
                    self.clamp_cursor(kind);
                }
                SessionChange::ConfigApplied
                | SessionChange::SelectionChanged(_)
                | SessionChange::FlagsChanged => {}
            }
        }
        self.mark_dirty();
    }

    fn clamp_cursor(&mut self, kind: CollectionKind) {
        let folder_rows = self.session.folder_tree(kind).len();
        let item_rows = self.session.filtered_len(kind);
        let cursor = self.cursor_mut(kind);
        cursor.folder = cursor.folder.min(folder_rows.saturating_sub(1));
        cursor.item = cursor.item.min(item_rows.saturating_sub(1));
    }

    /// Uid of the item under the cursor in the active collection.
    pub fn current_item_uid(&self) -> Option<String> {
        let index = self.cursor(self.active).item;
        self.session
            .filtered_uids(self.active)
            .into_iter()
            .nth(index)
    }
}
