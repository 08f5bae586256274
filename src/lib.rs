//! FitTrack - Strength Training Dashboard
//!
//! A single-window dashboard for a strength training plan: today's workout,
//! history, progress charts, body measurements and reminder preferences.
//! All session state lives in memory in [`state::DashboardState`].

pub mod domain;
pub mod notifications;
pub mod scheduler;
pub mod state;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use notifications::{Notifier, Toast, ToastQueue};
pub use scheduler::{Clock, Scheduler, SystemClock};
pub use state::{DashboardState, DashboardSummary, Tab};
pub use storage::config::AppConfig;
