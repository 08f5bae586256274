//! Active toast list with expiry.

use std::time::Instant;

use crossbeam::channel::Receiver;

use super::types::Toast;

/// A toast currently on screen.
#[derive(Debug, Clone)]
pub struct ActiveToast {
    /// The toast being shown
    pub toast: Toast,
    /// When it stops being shown
    pub expires_at: Instant,
}

/// Receives toasts from the channel and keeps them until they expire.
pub struct ToastQueue {
    rx: Receiver<Toast>,
    active: Vec<ActiveToast>,
}

impl ToastQueue {
    /// Create a queue reading from `rx`.
    pub fn new(rx: Receiver<Toast>) -> Self {
        Self {
            rx,
            active: Vec::new(),
        }
    }

    /// Pull new toasts and drop expired ones.
    pub fn update(&mut self, now: Instant) {
        while let Ok(toast) = self.rx.try_recv() {
            let expires_at = now + toast.duration();
            self.active.push(ActiveToast { toast, expires_at });
        }

        self.active.retain(|t| t.expires_at > now);
    }

    /// Toasts currently on screen, oldest first.
    pub fn active(&self) -> &[ActiveToast] {
        &self.active
    }

    /// Dismiss the toast at `index`.
    pub fn dismiss(&mut self, index: usize) {
        if index < self.active.len() {
            self.active.remove(index);
        }
    }

    /// Earliest expiry among active toasts.
    pub fn next_expiry(&self) -> Option<Instant> {
        self.active.iter().map(|t| t.expires_at).min()
    }
}
