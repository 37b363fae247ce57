//! Drop-style debouncing for folder clicks.

use std::time::{Duration, Instant};

/// Minimum spacing between two accepted folder clicks.
pub const FOLDER_CLICK_WINDOW: Duration = Duration::from_millis(300);

/// Accepts an event only if the previous *accepted* event is at least
/// `window` old. Rejected events are dropped, never queued, and do not
/// extend the window.
#[derive(Debug, Clone)]
pub struct ClickDebouncer {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl Default for ClickDebouncer {
    fn default() -> Self {
        Self::new(FOLDER_CLICK_WINDOW)
    }
}

impl ClickDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    /// Returns `true` if the event at `now` should be processed.
    pub fn accept_at(&mut self, now: Instant) -> bool {
        match self.last_accepted {
            Some(last) if now.saturating_duration_since(last) < self.window => false,
            _ => {
                self.last_accepted = Some(now);
                true
            }
        }
    }
}
