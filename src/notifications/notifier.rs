//! Notification sink used by the store and the scheduler.
//!
//! Producers hold a [`Notifier`]; the UI owns the receiving [`ToastQueue`]
//! and drains it once per frame.
//!
//! [`ToastQueue`]: super::queue::ToastQueue

use crossbeam::channel::{Receiver, Sender};

use super::types::Toast;

/// Fire-and-forget notification sink.
pub trait Notifier {
    /// Present a toast. Delivery failures are ignored.
    fn notify(&self, toast: Toast);
}

/// Notifier backed by a crossbeam channel.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: Sender<Toast>,
}

impl ChannelNotifier {
    /// Wrap an existing sender.
    pub fn new(tx: Sender<Toast>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, toast: Toast) {
        tracing::debug!("Toast: {}", toast.message);
        let _ = self.tx.send(toast);
    }
}

/// Create a connected notifier / receiver pair.
pub fn toast_channel() -> (ChannelNotifier, Receiver<Toast>) {
    let (tx, rx) = crossbeam::channel::unbounded();
    (ChannelNotifier::new(tx), rx)
}
