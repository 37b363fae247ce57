//! UI rendering for dashport
//!
//! Layout:
//! - Header: collection tabs, search box, load status
//! - Left panel: folder tree of the active collection
//! - Right panel: filtered item list with checkboxes
//! - Footer: export control, export flags, keybind hints
//! - Overlays: notifications (top right), export result (centered)
//!
//! Rendering only reads from the [`App`]; every frame is rebuilt from the
//! session.

mod chrome;
mod helpers;
mod overlays;
mod panels;
mod theme;

pub use theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub use chrome::{build_keybinds, export_line};
pub use helpers::truncate_string;
pub use overlays::export_report_lines;
pub use panels::{empty_message, folder_line, item_lines};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;

/// Width of the folder panel as a share of the terminal width
const FOLDER_PANEL_PERCENT: u16 = 32;

// ============================================================================
// Main UI Rendering
// ============================================================================

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(4),    // Panels
            Constraint::Length(2), // Footer
        ])
        .split(area);

    chrome::render_header(frame, rows[0], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(FOLDER_PANEL_PERCENT),
            Constraint::Percentage(100 - FOLDER_PANEL_PERCENT),
        ])
        .split(rows[1]);
    panels::render_folder_panel(frame, columns[0], app);
    panels::render_item_panel(frame, columns[1], app);

    chrome::render_footer(frame, rows[2], app);

    if let Some(report) = &app.export_report {
        overlays::render_export_report(frame, area, report);
    }
    overlays::render_notifications(frame, area, app);
}
