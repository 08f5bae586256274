//! UI widgets for reusable components.

pub mod progress_chart;
pub mod stat_card;
pub mod toast_overlay;

pub use progress_chart::{ChartKind, ProgressChart};
pub use stat_card::StatCard;
pub use toast_overlay::ToastOverlay;
