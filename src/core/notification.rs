//! Toast notification model

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Maximum number of notifications shown at once; the oldest is dropped first
pub const MAX_NOTIFICATIONS: usize = 5;

/// Default auto-dismiss delay
pub const DEFAULT_NOTIFICATION_MS: u32 = 5_000;

/// Slide-out animation length before a toast is detached
pub const NOTIFICATION_EXIT_MS: u32 = 300;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[display("success")]
    Success,
    #[display("error")]
    Error,
    #[display("warning")]
    Warning,
    #[default]
    #[display("info")]
    Info,
}

impl NotificationKind {
    /// Accent color used for the toast's left border
    pub fn border_color(&self) -> &'static str {
        match self {
            NotificationKind::Success => "var(--color-success)",
            NotificationKind::Error => "var(--color-error)",
            NotificationKind::Warning => "var(--color-warning)",
            NotificationKind::Info => "var(--color-primary)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    /// Auto-dismiss delay; `0` keeps the toast until closed
    pub duration_ms: u32,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            duration_ms: DEFAULT_NOTIFICATION_MS,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn auto_dismiss_ms(&self) -> Option<u32> {
        (self.duration_ms > 0).then_some(self.duration_ms)
    }
}

/// A queued notification with its id
#[derive(Debug, Clone, PartialEq)]
pub struct QueuedNotification {
    pub id: u64,
    pub notification: Notification,
    /// Set when the exit animation has started
    pub leaving: bool,
}

/// Bounded FIFO of visible notifications
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    items: VecDeque<QueuedNotification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push_back(QueuedNotification {
            id,
            notification,
            leaving: false,
        });
        while self.items.len() > MAX_NOTIFICATIONS {
            self.items.pop_front();
        }
        id
    }

    /// Start the exit animation. Returns `false` if the toast is gone or already leaving.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(item) if !item.leaving => {
                item.leaving = true;
                true
            }
            _ => false,
        }
    }

    /// Remove the toast. Returns `false` if it was already removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueuedNotification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
