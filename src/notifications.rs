//! Transient in-app notifications.
//!
//! Each notification expires on its own after [`NOTIFICATION_TTL`] and can be
//! dismissed earlier. Expiry is driven by the app tick, not by timers.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::error::ErrorCategory;

pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Oldest notifications are dropped past this many.
const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "info",
            NotificationLevel::Success => "success",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Error => "error",
        }
    }

    pub fn for_category(category: ErrorCategory) -> Self {
        match category {
            ErrorCategory::User => NotificationLevel::Warning,
            _ => NotificationLevel::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Local>,
    expires_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Default)]
pub struct Notifications {
    items: VecDeque<Notification>,
    next_id: u64,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>) -> u64 {
        self.push_at(level, message, Instant::now())
    }

    pub fn push_at(
        &mut self,
        level: NotificationLevel,
        message: impl Into<String>,
        now: Instant,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        tracing::debug!("Notification [{}]: {}", level.label(), message);
        self.items.push_back(Notification {
            id,
            level,
            message,
            created_at: Local::now(),
            expires_at: now + NOTIFICATION_TTL,
        });
        while self.items.len() > MAX_VISIBLE {
            self.items.pop_front();
        }
        id
    }

    /// Remove expired notifications. Returns whether anything was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        self.items.retain(|n| !n.is_expired(now));
        self.items.len() != before
    }

    /// Dismiss the newest notification.
    pub fn dismiss_latest(&mut self) -> bool {
        self.items.pop_back().is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
