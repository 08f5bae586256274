//! Unit tests for derived dashboard values.
//!
//! T064: Completed count and weekly percentage over arbitrary histories

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use fittrack::domain::fixtures::{MOTIVATIONAL_QUOTES, WEEKLY_GOAL};
use fittrack::domain::{Exercise, WorkoutHistoryEntry};
use fittrack::state::{
    pick_motivational_quote, total_completed_workouts, weekly_progress_percent, DashboardState,
    DashboardSummary,
};

fn history(total: usize, completed: usize) -> Vec<WorkoutHistoryEntry> {
    let first = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    (0..total)
        .map(|i| WorkoutHistoryEntry {
            id: i as u32 + 1,
            date: first + chrono::Duration::days(i as i64),
            exercises: vec![Exercise::new(1, "Жим штанги лежа", 80.0, 4, 10)],
            completed: i < completed,
        })
        .collect()
}

#[test]
fn test_completed_count_and_percent() {
    for total in 0..=8 {
        for completed in 0..=total {
            let h = history(total, completed);
            assert_eq!(total_completed_workouts(&h), completed);
            assert_eq!(
                weekly_progress_percent(&h, WEEKLY_GOAL),
                completed as f64 / 4.0 * 100.0
            );
        }
    }
}

#[test]
fn test_two_of_four_is_fifty() {
    assert_eq!(weekly_progress_percent(&history(3, 2), 4), 50.0);
}

#[test]
fn test_overflow_renders_raw_percent() {
    let state = DashboardState::new(Vec::new(), history(5, 5));
    let summary = DashboardSummary::from_state(&state);

    assert_eq!(summary.weekly_percent, 125.0);
    assert_eq!(summary.progress_fraction(), 1.0);
}

#[test]
fn test_empty_history() {
    let state = DashboardState::new(Vec::new(), Vec::new());
    let summary = DashboardSummary::from_state(&state);

    assert_eq!(summary.total_completed, 0);
    assert_eq!(summary.weekly_percent, 0.0);
    assert_eq!(summary.progress_fraction(), 0.0);
}

#[test]
fn test_quotes_cover_list() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut seen = std::collections::HashSet::new();

    for _ in 0..500 {
        seen.insert(pick_motivational_quote(&mut rng));
    }

    assert_eq!(seen.len(), MOTIVATIONAL_QUOTES.len());
}
