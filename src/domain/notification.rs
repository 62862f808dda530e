//! Toast notifications.

use std::time::{Duration, Instant};

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Completed action.
    Success,
    /// Rejected form input.
    Warn,
}

/// A short-lived message shown on top of the current screen.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Popup title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Time the toast was queued.
    pub created_at: Instant,
    /// Time the toast first became visible.
    pub displayed_at: Option<Instant>,
    /// Visible lifetime.
    pub duration: Duration,
}

impl Notification {
    /// Creates a toast with the default lifetime.
    #[must_use]
    pub fn new(
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            created_at: Instant::now(),
            displayed_at: None,
            duration: Duration::from_secs(2),
        }
    }

    /// Overrides the visible lifetime.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Returns whether the toast has been visible longer than its lifetime.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.displayed_at
            .is_some_and(|start| start.elapsed() > self.duration)
    }

    /// Starts the lifetime clock on first display.
    pub fn mark_displayed(&mut self) {
        if self.displayed_at.is_none() {
            self.displayed_at = Some(Instant::now());
        }
    }
}
