//! Domain model for the training dashboard.
//!
//! Plain records plus the static fixtures the dashboard displays.

pub mod fixtures;
pub mod types;

pub use types::{
    parse_hh_mm, AthleteField, AthleteParameters, ChartPoint, Exercise, Gender,
    NotificationField, NotificationSettings, ParamValue, WorkoutHistoryEntry,
};
