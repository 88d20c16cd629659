//! Transient toast notifications.

use std::collections::VecDeque;
use std::time::Duration;
use std::time::Instant;

/// Default duration for toast notifications.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(4);

/// Severity of a toast, mapped to a theme color by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

/// A toast notification.
///
/// Toasts display temporary messages to the user. Use the convenience
/// constructors for common cases.
#[derive(Debug, Clone)]
pub struct Toast {
    /// The message to display.
    pub message: String,
    /// Severity.
    pub level: ToastLevel,
    /// How long to show the toast.
    pub duration: Duration,
}

impl Toast {
    /// Create an info toast with neutral styling.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Info,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Create a success toast with green accent.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Success,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Create an error toast with red accent.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Error,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Set a custom duration for this toast.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Active toasts with their expiry deadlines.
#[derive(Debug, Default)]
pub struct ToastStack {
    entries: VecDeque<(Toast, Instant)>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast.
    pub fn push(&mut self, toast: Toast) {
        let deadline = Instant::now() + toast.duration;
        self.entries.push_back((toast, deadline));
    }

    /// Drop expired toasts.
    pub fn expire(&mut self) {
        let now = Instant::now();
        self.entries.retain(|(_, deadline)| *deadline > now);
    }

    /// Currently visible toasts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter().map(|(toast, _)| toast)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
