//! Input handling module for keyboard and command processing.
//!
//! All input is:
//!
//! 1. Translated to a [`Command`] by the [`CommandRegistry`]
//! 2. Dispatched to appropriate handlers in the [`handlers`] module
//!
//! # Architecture
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> Handler -> App mutation
//! ```
//!
//! # Modules
//!
//! - [`command`] - The [`Command`] enum with all possible user actions
//! - [`context`] - [`InputContext`] for tracking current UI state
//! - [`registry`] - [`CommandRegistry`] for mapping keys to commands
//! - [`keybindings`] - Default key binding configuration
//! - [`handlers`] - Command execution handlers

pub mod command;
pub mod context;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crossterm::event::KeyEvent;
use tracing::debug;

use crate::app::App;
use crate::export::ExportReport;

impl App {
    /// Builds an InputContext from the current application state.
    pub fn build_input_context(&self) -> InputContext {
        let modal = if self.export_report.is_some() {
            ModalType::ExportReport
        } else {
            ModalType::None
        };
        InputContext {
            focus: self.focus,
            modal,
            has_saved_archive: matches!(self.export_report, Some(ExportReport::Saved { .. })),
        }
    }

    /// Executes a command, delegating to the appropriate handler.
    ///
    /// Returns `true` if the command was handled.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        debug!("execute_command: {:?}", cmd);

        if cmd.marks_dirty() {
            self.mark_dirty();
        }

        match cmd {
            Command::Quit => {
                self.quit();
                true
            }
            Command::Noop => true,
            ref other => {
                handlers::handle_search_command(self, other)
                    || handlers::handle_navigation_command(self, other)
                    || handlers::handle_selection_command(self, other)
            }
        }
    }

    /// Dispatch one key press through `registry` and execute the result.
    pub fn handle_key(&mut self, registry: &CommandRegistry, key: KeyEvent) -> bool {
        let context = self.build_input_context();
        match registry.dispatch(key, &context) {
            Some(cmd) => self.execute_command(cmd),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::adapters::MockHttpClient;
    use crate::api::ExporterClient;
    use crate::app::Focus;
    use crate::models::{CollectionKind, Dashboard};
    use crate::startup::ClientConfig;

    fn create_test_app() -> App {
        let client = ExporterClient::new("http://exporter.test", Arc::new(MockHttpClient::new()));
        let mut app = App::new(client, ClientConfig::default());
        app.session.replace_dashboards(vec![
            Dashboard::new("d1", "Sales", 0).with_tags(["prod"]),
            Dashboard::new("d2", "Latency", 0),
            Dashboard::new("d3", "Billing", 0),
        ]);
        app.sync_changes();
        app
    }

    fn press(app: &mut App, registry: &CommandRegistry, code: KeyCode) {
        app.handle_key(registry, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_execute_command_quit() {
        let mut app = create_test_app();
        assert!(app.execute_command(Command::Quit));
        assert!(app.should_quit);
    }

    #[test]
    fn test_navigate_and_toggle() {
        let registry = CommandRegistry::new();
        let mut app = create_test_app();

        press(&mut app, &registry, KeyCode::Right);
        assert_eq!(app.focus, Focus::Items);
        press(&mut app, &registry, KeyCode::Down);
        press(&mut app, &registry, KeyCode::Char(' '));
        assert!(app.session.is_selected(CollectionKind::Dashboards, "d2"));

        // cursor stops at the last row
        for _ in 0..5 {
            press(&mut app, &registry, KeyCode::Char('j'));
        }
        assert_eq!(app.cursor(CollectionKind::Dashboards).item, 2);
    }

    #[test]
    fn test_live_search() {
        let registry = CommandRegistry::new();
        let mut app = create_test_app();

        press(&mut app, &registry, KeyCode::Char('/'));
        for c in "prod".chars() {
            press(&mut app, &registry, KeyCode::Char(c));
        }
        assert_eq!(app.session.filtered_uids(CollectionKind::Dashboards), vec!["d1"]);

        press(&mut app, &registry, KeyCode::Backspace);
        assert_eq!(
            app.session.filter_state(CollectionKind::Dashboards).search_query,
            "pro"
        );

        press(&mut app, &registry, KeyCode::Esc);
        assert_eq!(app.focus, Focus::Items);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_tab_switches_collection() {
        let registry = CommandRegistry::new();
        let mut app = create_test_app();
        press(&mut app, &registry, KeyCode::Tab);
        assert_eq!(app.active, CollectionKind::Alerts);
        press(&mut app, &registry, KeyCode::Tab);
        assert_eq!(app.active, CollectionKind::Dashboards);
    }

    #[test]
    fn test_select_all_then_clear() {
        let registry = CommandRegistry::new();
        let mut app = create_test_app();
        press(&mut app, &registry, KeyCode::Char('a'));
        assert_eq!(app.session.export_affordance().label, "Export 3 Dashboards");
        press(&mut app, &registry, KeyCode::Char('c'));
        assert_eq!(app.session.export_affordance().combined, 0);
    }
}
