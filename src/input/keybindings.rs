//! Default keybindings for the application.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::ModalType;
use crate::app::Focus;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active outside search and overlays
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per overlay
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
    /// Keybindings per focus state
    pub focus: HashMap<Focus, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
            focus: HashMap::new(),
        };
        config.add_global_bindings();
        config.add_modal_bindings();
        config.add_focus_bindings();
        config
    }

    fn add_global_bindings(&mut self) {
        let bindings = [
            (KeyCode::Char('q'), Command::Quit),
            (KeyCode::Tab, Command::SwitchCollection),
            (KeyCode::Char('r'), Command::Reload),
            (KeyCode::Char('x'), Command::DismissNotification),
            (KeyCode::Up, Command::MoveUp),
            (KeyCode::Char('k'), Command::MoveUp),
            (KeyCode::Down, Command::MoveDown),
            (KeyCode::Char('j'), Command::MoveDown),
            (KeyCode::Left, Command::FocusFolders),
            (KeyCode::Char('h'), Command::FocusFolders),
            (KeyCode::Right, Command::FocusItems),
            (KeyCode::Char('l'), Command::FocusItems),
            (KeyCode::Enter, Command::Activate),
            (KeyCode::Char('/'), Command::StartSearch),
            (KeyCode::Char('a'), Command::SelectAll),
            (KeyCode::Char('c'), Command::ClearSelection),
            (KeyCode::Char('i'), Command::ToggleIncludeAlerts),
            (KeyCode::Char('z'), Command::ToggleZip),
            (KeyCode::Char('e'), Command::Export),
        ];
        for (code, cmd) in bindings {
            self.global.insert(KeyCombo::plain(code), cmd);
        }
    }

    fn add_modal_bindings(&mut self) {
        let mut report = HashMap::new();
        report.insert(KeyCombo::plain(KeyCode::Esc), Command::CloseOverlay);
        report.insert(KeyCombo::plain(KeyCode::Enter), Command::CloseOverlay);
        report.insert(KeyCombo::plain(KeyCode::Char('o')), Command::OpenExport);
        report.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        report.insert(KeyCombo::plain(KeyCode::Char('x')), Command::DismissNotification);
        self.modal.insert(ModalType::ExportReport, report);
    }

    fn add_focus_bindings(&mut self) {
        let mut items = HashMap::new();
        items.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::ToggleItem);
        self.focus.insert(Focus::Items, items);

        let mut search = HashMap::new();
        search.insert(KeyCombo::plain(KeyCode::Esc), Command::EndSearch);
        search.insert(KeyCombo::plain(KeyCode::Enter), Command::EndSearch);
        search.insert(KeyCombo::plain(KeyCode::Backspace), Command::SearchBackspace);
        search.insert(KeyCombo::ctrl(KeyCode::Char('u')), Command::ClearSearch);
        self.focus.insert(Focus::Search, search);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal).and_then(|m| m.get(combo))
    }

    pub fn get_focus(&self, focus: Focus, combo: &KeyCombo) -> Option<&Command> {
        self.focus.get(&focus).and_then(|m| m.get(combo))
    }
}
