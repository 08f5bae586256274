//! Toast value types.

use std::time::Duration;

/// Display time used when a toast does not specify one.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 4000;

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    /// Neutral informational toast
    #[default]
    Default,
    /// Positive confirmation
    Success,
}

/// Screen anchor for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPosition {
    TopCenter,
    #[default]
    BottomRight,
}

/// A transient on-screen message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Headline text
    pub message: String,
    /// Optional second line
    pub description: Option<String>,
    /// Display time in milliseconds
    pub duration_ms: Option<u64>,
    /// Screen anchor
    pub position: Option<ToastPosition>,
    /// Visual style
    pub kind: ToastKind,
}

impl Toast {
    /// Create a neutral toast.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            description: None,
            duration_ms: None,
            position: None,
            kind: ToastKind::Default,
        }
    }

    /// Create a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            ..Self::new(message)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Effective display time.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS))
    }

    /// Effective screen anchor.
    pub fn anchor(&self) -> ToastPosition {
        self.position.unwrap_or_default()
    }
}
