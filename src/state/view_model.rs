//! Values derived from the store on demand.
//!
//! Nothing here is cached: every call recomputes from its inputs.

use rand::Rng;

use crate::domain::fixtures::{MOTIVATIONAL_QUOTES, WEEKLY_GOAL};
use crate::domain::{AthleteParameters, WorkoutHistoryEntry};

use super::store::DashboardState;

/// Number of completed workouts in `history`.
pub fn total_completed_workouts(history: &[WorkoutHistoryEntry]) -> usize {
    history.iter().filter(|w| w.completed).count()
}

/// Completed workouts as a percentage of `weekly_goal`.
///
/// Not clamped: more workouts than the goal gives a value above 100.
pub fn weekly_progress_percent(history: &[WorkoutHistoryEntry], weekly_goal: u32) -> f64 {
    total_completed_workouts(history) as f64 / weekly_goal as f64 * 100.0
}

/// Pick a quote uniformly at random from [`MOTIVATIONAL_QUOTES`].
pub fn pick_motivational_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick_from(&MOTIVATIONAL_QUOTES, rng)
}

/// Uniform pick from a non-empty list. Returns "" for an empty list.
pub fn pick_from<'a, R: Rng + ?Sized>(quotes: &[&'a str], rng: &mut R) -> &'a str {
    if quotes.is_empty() {
        return "";
    }
    quotes[rng.gen_range(0..quotes.len())]
}

/// One-line athlete summary, e.g. "28 лет • 180 см • 78 кг".
pub fn athlete_summary(athlete: &AthleteParameters) -> String {
    format!(
        "{} лет • {} см • {} кг",
        format_measure(athlete.age),
        format_measure(athlete.height),
        format_measure(athlete.weight)
    )
}

/// Format a measurement without a trailing ".0"; non-finite values show "—".
pub fn format_measure(value: f64) -> String {
    if !value.is_finite() {
        "—".to_string()
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Snapshot of every derived value the views display.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// Completed workouts in history
    pub total_completed: usize,
    /// Weekly goal
    pub weekly_goal: u32,
    /// Unclamped percentage of the weekly goal
    pub weekly_percent: f64,
    /// Athlete summary line
    pub athlete_line: String,
}

impl DashboardSummary {
    /// Derive the summary from the current store contents.
    pub fn from_state(state: &DashboardState) -> Self {
        Self {
            total_completed: total_completed_workouts(state.history()),
            weekly_goal: WEEKLY_GOAL,
            weekly_percent: weekly_progress_percent(state.history(), WEEKLY_GOAL),
            athlete_line: athlete_summary(state.athlete()),
        }
    }

    /// Fill fraction for a progress bar, clamped to `0.0..=1.0`.
    pub fn progress_fraction(&self) -> f32 {
        if self.weekly_percent.is_finite() {
            (self.weekly_percent / 100.0).clamp(0.0, 1.0) as f32
        } else {
            0.0
        }
    }
}
