//! Command definitions for keyboard input handling.
//!
//! This module defines all commands that can be triggered by keyboard input.
//! The [`Command`] enum provides a unified way to represent user actions,
//! decoupling key bindings from their effects.

/// Represents all possible commands that can be triggered by keyboard input.
///
/// Commands are organized into categories:
/// - Global commands (quit, reload, switch collection)
/// - Navigation commands (move, focus)
/// - Selection commands (toggle, select all, clear)
/// - Export commands (flags, export, result overlay)
/// - Search commands (live query editing)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (Ctrl+C, q)
    Quit,
    /// Switch between dashboards and alerts (Tab)
    SwitchCollection,
    /// Re-fetch folders, dashboards and alerts (r)
    Reload,
    /// Dismiss the newest notification (x)
    DismissNotification,

    // =========================================================================
    // Navigation
    // =========================================================================
    MoveUp,
    MoveDown,
    /// Focus the folder panel (Left, h)
    FocusFolders,
    /// Focus the item list (Right, l)
    FocusItems,
    /// Enter: activate folder or toggle item, depending on focus
    Activate,

    // =========================================================================
    // Selection
    // =========================================================================
    /// Space on the item list
    ToggleItem,
    /// Select every item of the filtered view (a)
    SelectAll,
    /// Clear the active collection's selection (c)
    ClearSelection,

    // =========================================================================
    // Export
    // =========================================================================
    /// Flip the include-alerts flag (i)
    ToggleIncludeAlerts,
    /// Flip the export-as-zip flag (z)
    ToggleZip,
    /// Run the export (e)
    Export,
    /// Open the saved archive (o)
    OpenExport,
    /// Close the export result overlay (Esc)
    CloseOverlay,

    // =========================================================================
    // Search
    // =========================================================================
    /// Start editing the search query (/)
    StartSearch,
    /// Append a character to the query
    SearchChar(char),
    /// Delete the last character of the query
    SearchBackspace,
    /// Stop editing, keep the query (Enter, Esc)
    EndSearch,
    /// Empty the query (Ctrl+U)
    ClearSearch,

    /// Key consumed with no effect
    Noop,
}

impl Command {
    /// Whether executing this command can change what is on screen.
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop | Command::Quit)
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::SwitchCollection => "switch_collection",
            Command::Reload => "reload",
            Command::DismissNotification => "dismiss_notification",
            Command::MoveUp => "move_up",
            Command::MoveDown => "move_down",
            Command::FocusFolders => "focus_folders",
            Command::FocusItems => "focus_items",
            Command::Activate => "activate",
            Command::ToggleItem => "toggle_item",
            Command::SelectAll => "select_all",
            Command::ClearSelection => "clear_selection",
            Command::ToggleIncludeAlerts => "toggle_include_alerts",
            Command::ToggleZip => "toggle_zip",
            Command::Export => "export",
            Command::OpenExport => "open_export",
            Command::CloseOverlay => "close_overlay",
            Command::StartSearch => "start_search",
            Command::SearchChar(_) => "search_char",
            Command::SearchBackspace => "search_backspace",
            Command::EndSearch => "end_search",
            Command::ClearSearch => "clear_search",
            Command::Noop => "noop",
        }
    }
}
