//! Dashboard state: the store, derived values and the tab selector.

pub mod store;
pub mod tab;
pub mod view_model;

pub use store::{parse_integer_input, parse_numeric_input, DashboardState, StateError};
pub use tab::Tab;
pub use view_model::{
    pick_motivational_quote, total_completed_workouts, weekly_progress_percent,
    DashboardSummary,
};
