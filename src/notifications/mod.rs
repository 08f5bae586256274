//! Toast notifications.
//!
//! The store and scheduler emit [`Toast`]s through a [`Notifier`]; the UI
//! drains them into a [`ToastQueue`] and draws the active ones.

pub mod notifier;
pub mod queue;
pub mod types;

pub use notifier::{toast_channel, ChannelNotifier, Notifier};
pub use queue::{ActiveToast, ToastQueue};
pub use types::{Toast, ToastKind, ToastPosition, DEFAULT_TOAST_DURATION_MS};
