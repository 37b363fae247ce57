//! Command handlers for executing commands.
//!
//! Handler functions are organized by category and return `true` when they
//! consumed the command.

use crate::app::{App, Focus};
use crate::input::Command;

/// Handles focus movement, cursor movement and collection switching.
pub fn handle_navigation_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::SwitchCollection => {
            app.active = app.active.other();
            if app.focus == Focus::Search {
                app.focus = Focus::Items;
            }
            true
        }
        Command::MoveUp => {
            move_cursor(app, -1);
            true
        }
        Command::MoveDown => {
            move_cursor(app, 1);
            true
        }
        Command::FocusFolders => {
            app.focus = Focus::Folders;
            true
        }
        Command::FocusItems => {
            app.focus = Focus::Items;
            true
        }
        Command::Activate => {
            match app.focus {
                Focus::Folders => app.activate_folder(),
                Focus::Items => app.toggle_current_item(),
                Focus::Search => app.focus = Focus::Items,
            }
            true
        }
        _ => false,
    }
}

/// Handles selection and export commands.
pub fn handle_selection_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::ToggleItem => app.toggle_current_item(),
        Command::SelectAll => app.select_all_visible(),
        Command::ClearSelection => app.clear_selection(),
        Command::ToggleIncludeAlerts => app.toggle_include_alerts(),
        Command::ToggleZip => app.toggle_export_as_zip(),
        Command::Export => app.start_export(),
        Command::OpenExport => app.open_export(),
        Command::CloseOverlay => app.close_export_report(),
        Command::DismissNotification => app.dismiss_notification(),
        Command::Reload => app.reload(),
        _ => return false,
    }
    true
}

/// Handles live editing of the active collection's search query.
pub fn handle_search_command(app: &mut App, cmd: &Command) -> bool {
    let kind = app.active;
    let mut query = app.session.filter_state(kind).search_query.clone();
    match cmd {
        Command::StartSearch => {
            app.focus = Focus::Search;
            return true;
        }
        Command::EndSearch => {
            app.focus = Focus::Items;
            return true;
        }
        Command::SearchChar(c) => query.push(*c),
        Command::SearchBackspace => {
            if query.pop().is_none() {
                return true;
            }
        }
        Command::ClearSearch => query.clear(),
        _ => return false,
    }
    app.session.set_search_query(kind, query);
    app.cursor_mut(kind).item = 0;
    app.sync_changes();
    true
}

fn move_cursor(app: &mut App, delta: isize) {
    let kind = app.active;
    let (len, focus) = match app.focus {
        Focus::Folders => (app.session.folder_tree(kind).len(), Focus::Folders),
        Focus::Items | Focus::Search => (app.session.filtered_len(kind), Focus::Items),
    };
    if len == 0 {
        return;
    }
    let cursor = app.cursor_mut(kind);
    let position = match focus {
        Focus::Folders => &mut cursor.folder,
        _ => &mut cursor.item,
    };
    *position = position.saturating_add_signed(delta).min(len - 1);
}
