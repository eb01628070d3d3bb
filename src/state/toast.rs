//! Transient toast notifications

use std::time::{Duration, Instant};
use uuid::Uuid;

/// Only the newest toast is kept on screen
const TOAST_LIMIT: usize = 1;

/// How long a toast stays visible unless configured otherwise
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(5);

/// Visual treatment of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A message for the user, not yet placed on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }
}

/// A notification on screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub notification: Notification,
    expires_at: Instant,
}

/// Holds the visible toasts and expires them
#[derive(Debug)]
pub struct Toaster {
    toasts: Vec<Toast>,
    duration: Duration,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl Toaster {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            duration,
        }
    }

    /// Show a notification, evicting the oldest beyond the limit
    pub fn push(&mut self, notification: Notification) -> Uuid {
        self.push_at(notification, Instant::now())
    }

    fn push_at(&mut self, notification: Notification, now: Instant) -> Uuid {
        let id = Uuid::new_v4();
        tracing::debug!(%id, title = %notification.title, "toast shown");
        self.toasts.insert(
            0,
            Toast {
                id,
                notification,
                expires_at: now + self.duration,
            },
        );
        self.toasts.truncate(TOAST_LIMIT);
        id
    }

    /// The toast to render, newest first
    pub fn current(&self) -> Option<&Toast> {
        self.toasts.first()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop toasts whose display time has passed
    pub fn prune_expired(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }
}
