//! Integration tests for user-driven dashboard flows.
//!
//! T062: Completing today's workout through the UI path
//! T063: Tab switching and toasts reaching the on-screen queue

use std::time::{Duration, Instant};

use fittrack::domain::fixtures;
use fittrack::domain::{AthleteField, Gender, NotificationField};
use fittrack::notifications::{toast_channel, ToastKind, ToastQueue};
use fittrack::state::{DashboardState, DashboardSummary, Tab};

/// Press the "complete" button the way the today tab does: only while enabled.
fn press_complete(state: &mut DashboardState, notifier: &dyn fittrack::Notifier) {
    if state.can_complete_today() {
        state.complete_today_workout(notifier);
    }
}

#[test]
fn test_complete_workout_once_through_ui_path() {
    let (notifier, rx) = toast_channel();
    let mut state = DashboardState::default();

    press_complete(&mut state, &notifier);
    press_complete(&mut state, &notifier);
    press_complete(&mut state, &notifier);

    assert!(state.today_completed());
    let toasts: Vec<_> = rx.try_iter().collect();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "🎉 Отличная работа!");
    assert_eq!(toasts[0].kind, ToastKind::Success);
}

#[test]
fn test_completion_is_monotonic() {
    let (notifier, _rx) = toast_channel();
    let mut state = DashboardState::default();

    state.complete_today_workout(&notifier);
    state.set_active_tab(Tab::Notifications);
    state.update_notification_setting(NotificationField::Enabled(false));
    state
        .update_athlete_parameter(AthleteField::Gender, Gender::Female)
        .unwrap();
    state.complete_today_workout(&notifier);

    assert!(state.today_completed());
}

#[test]
fn test_tab_switching() {
    let mut state = DashboardState::default();
    assert_eq!(state.active_tab(), Tab::Today);

    for tab in Tab::ALL {
        state.set_active_tab(tab);
        assert_eq!(state.active_tab(), tab);
    }
}

#[test]
fn test_tab_ids_unique() {
    let mut ids: Vec<_> = Tab::ALL.iter().map(|t| t.id()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 6);
}

#[test]
fn test_fixture_summary() {
    let state = DashboardState::default();
    let summary = DashboardSummary::from_state(&state);

    assert_eq!(summary.total_completed, 2);
    assert_eq!(summary.weekly_goal, fixtures::WEEKLY_GOAL);
    assert_eq!(summary.weekly_percent, 50.0);
    assert_eq!(summary.progress_fraction(), 0.5);
    assert_eq!(summary.athlete_line, "28 лет • 180 см • 78 кг");
}

#[test]
fn test_summary_follows_athlete_edits() {
    let mut state = DashboardState::default();
    state
        .update_athlete_parameter(AthleteField::Weight, 76.0)
        .unwrap();

    let summary = DashboardSummary::from_state(&state);
    assert_eq!(summary.athlete_line, "28 лет • 180 см • 76 кг");
}

#[test]
fn test_toasts_reach_queue_and_expire() {
    let (notifier, rx) = toast_channel();
    let mut queue = ToastQueue::new(rx);
    let mut state = DashboardState::default();
    let start = Instant::now();

    state.save_notification_settings(&notifier);
    state.complete_today_workout(&notifier);
    queue.update(start);

    let messages: Vec<_> = queue
        .active()
        .iter()
        .map(|t| t.toast.message.as_str())
        .collect();
    assert_eq!(messages, vec!["✅ Настройки сохранены", "🎉 Отличная работа!"]);

    // The save toast lasts 3 s, the completion toast 5 s
    queue.update(start + Duration::from_secs(4));
    assert_eq!(queue.active().len(), 1);
    queue.update(start + Duration::from_secs(5));
    assert!(queue.active().is_empty());
}
