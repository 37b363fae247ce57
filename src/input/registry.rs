//! Command registry for dispatching keyboard input to commands.
//!
//! The [`CommandRegistry`] maps key events to commands based on the current
//! application context:
//! 1. Ctrl+C always quits
//! 2. An open overlay takes every key
//! 3. Search focus takes every printable key
//! 4. Focus bindings, then global bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};

#[derive(Debug, Clone)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates a new command registry with default keybindings.
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Dispatches a key event to a command based on the current context.
    ///
    /// Returns `None` if the key should be ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        let combo = KeyCombo::new(key.code, key.modifiers);

        if context.is_modal_active() {
            return Some(
                self.config
                    .get_modal(context.modal, &combo)
                    .cloned()
                    .unwrap_or(Command::Noop),
            );
        }

        if let Some(cmd) = self.config.get_focus(context.focus, &combo) {
            return Some(cmd.clone());
        }

        if context.is_search_focused() {
            return match key.code {
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    Some(Command::SearchChar(c))
                }
                _ => None,
            };
        }

        // Shifted letters arrive with SHIFT set; bindings are registered plain
        let combo = if key.modifiers == KeyModifiers::SHIFT {
            KeyCombo::plain(key.code)
        } else {
            combo
        };
        self.config.get_global(&combo).cloned()
    }
}
