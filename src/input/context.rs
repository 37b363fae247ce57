//! Input context for determining which commands are available.
//!
//! The [`InputContext`] captures the current application state relevant to
//! input handling, allowing the command registry to dispatch appropriate
//! commands based on the current overlay and focus.

use crate::app::Focus;

/// The overlay currently capturing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    #[default]
    None,
    /// Export result is shown
    ExportReport,
}

/// Context information for input handling.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    pub focus: Focus,
    pub modal: ModalType,
    /// Whether the result overlay points at a saved archive
    pub has_saved_archive: bool,
}

impl InputContext {
    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }

    pub fn is_search_focused(&self) -> bool {
        self.focus == Focus::Search
    }
}
