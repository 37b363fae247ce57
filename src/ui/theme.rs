//! Color theme constants for the dashport UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused panel
pub const COLOR_BORDER_FOCUSED: Color = Color::Gray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Selected folder / checked items - bright green
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Row under the cursor
pub const COLOR_CURSOR_BG: Color = Color::Rgb(30, 35, 55);

/// Tag chips on dashboard rows
pub const COLOR_TAG: Color = Color::Rgb(0, 122, 204); // blue #007ACC

// ============================================================================
// Notification Colors
// ============================================================================

pub const COLOR_INFO: Color = Color::Cyan;

pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

pub const COLOR_WARNING: Color = Color::Yellow;

pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for the export result dialog
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
