//! Integration tests for the scheduled side-effects.
//!
//! T060: Motivational prompt fires once after the delay, never after teardown
//! T061: Reminder fires only in the configured minute while enabled

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use fittrack::domain::fixtures::MOTIVATIONAL_QUOTES;
use fittrack::domain::NotificationField;
use fittrack::notifications::{toast_channel, Toast, ToastPosition};
use fittrack::scheduler::{ManualClock, MotivationPhase, Scheduler};
use fittrack::state::DashboardState;

const MINUTE: Duration = Duration::from_secs(60);

fn reminders(toasts: &[Toast]) -> usize {
    toasts
        .iter()
        .filter(|t| t.message.contains("Время тренировки"))
        .count()
}

fn state_without_motivation() -> DashboardState {
    let mut state = DashboardState::default();
    state.update_notification_setting(NotificationField::MotivationalMessages(false));
    state
}

#[test]
fn test_motivation_fires_after_delay() {
    let (notifier, rx) = toast_channel();
    let clock = ManualClock::at(9, 0, 0);
    let mut state = DashboardState::default();
    let mut rng = StdRng::seed_from_u64(11);
    let mut scheduler = Scheduler::default();

    scheduler.mount(&state, &clock);

    clock.advance(Duration::from_millis(2999));
    scheduler.tick(&clock, &mut state, &notifier, &mut rng);
    assert!(!state.show_motivation());
    assert!(rx.try_recv().is_err());

    clock.advance(Duration::from_millis(1));
    let outcome = scheduler.tick(&clock, &mut state, &notifier, &mut rng);
    assert!(outcome.motivation_fired);
    assert!(state.show_motivation());

    let toasts: Vec<Toast> = rx.try_iter().collect();
    assert_eq!(toasts.len(), 1);
    assert!(MOTIVATIONAL_QUOTES.contains(&toasts[0].message.as_str()));
    assert_eq!(toasts[0].duration_ms, Some(5000));
    assert_eq!(toasts[0].position, Some(ToastPosition::TopCenter));

    // Never again
    clock.advance(Duration::from_secs(30));
    scheduler.tick(&clock, &mut state, &notifier, &mut rng);
    assert_eq!(rx.try_iter().count(), 0);
}

#[test]
fn test_motivation_cancelled_by_teardown() {
    let (notifier, rx) = toast_channel();
    let clock = ManualClock::at(9, 0, 0);
    let mut state = DashboardState::default();
    let mut rng = StdRng::seed_from_u64(11);
    let mut scheduler = Scheduler::default();

    scheduler.mount(&state, &clock);
    clock.advance(Duration::from_secs(1));
    scheduler.tick(&clock, &mut state, &notifier, &mut rng);
    scheduler.teardown();

    assert_eq!(scheduler.motivation().phase(), MotivationPhase::Cancelled);

    clock.advance(Duration::from_secs(10));
    scheduler.tick(&clock, &mut state, &notifier, &mut rng);

    assert!(!state.show_motivation());
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_motivation_not_armed_when_completed_at_mount() {
    let (notifier, rx) = toast_channel();
    let clock = ManualClock::at(9, 0, 0);
    let mut state = DashboardState::default();
    let mut rng = StdRng::seed_from_u64(11);
    let mut scheduler = Scheduler::default();

    state.complete_today_workout(&notifier);
    let _ = rx.try_iter().count();

    scheduler.mount(&state, &clock);
    clock.advance(Duration::from_secs(5));
    scheduler.tick(&clock, &mut state, &notifier, &mut rng);

    assert!(!state.show_motivation());
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_motivation_not_rearmed_by_settings_change() {
    let (notifier, rx) = toast_channel();
    let clock = ManualClock::at(9, 0, 0);
    let mut state = state_without_motivation();
    let mut rng = StdRng::seed_from_u64(11);
    let mut scheduler = Scheduler::default();

    scheduler.mount(&state, &clock);
    state.update_notification_setting(NotificationField::MotivationalMessages(true));

    clock.advance(Duration::from_secs(10));
    scheduler.tick(&clock, &mut state, &notifier, &mut rng);

    assert!(!state.show_motivation());
    assert_eq!(scheduler.motivation().phase(), MotivationPhase::Idle);
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_reminder_disabled_never_fires() {
    let (notifier, rx) = toast_channel();
    let clock = ManualClock::at(17, 58, 30);
    let mut state = state_without_motivation();
    let mut rng = StdRng::seed_from_u64(5);
    let mut scheduler = Scheduler::default();

    state.update_notification_setting(NotificationField::Enabled(false));
    scheduler.mount(&state, &clock);

    // Two hours, passing through 18:00
    for _ in 0..120 {
        clock.advance(MINUTE);
        let outcome = scheduler.tick(&clock, &mut state, &notifier, &mut rng);
        assert!(!outcome.reminder_fired);
    }

    assert_eq!(reminders(&rx.try_iter().collect::<Vec<_>>()), 0);
    assert!(!scheduler.reminder().is_running());
}

#[test]
fn test_reminder_fires_at_configured_minute() {
    let (notifier, rx) = toast_channel();
    let clock = ManualClock::at(17, 59, 0);
    let mut state = state_without_motivation();
    let mut rng = StdRng::seed_from_u64(5);
    let mut scheduler = Scheduler::default();

    scheduler.mount(&state, &clock);

    clock.advance(MINUTE);
    let outcome = scheduler.tick(&clock, &mut state, &notifier, &mut rng);
    assert!(outcome.reminder_fired);

    clock.advance(MINUTE);
    let outcome = scheduler.tick(&clock, &mut state, &notifier, &mut rng);
    assert!(!outcome.reminder_fired);

    let toasts: Vec<Toast> = rx.try_iter().collect();
    assert_eq!(reminders(&toasts), 1);
    assert_eq!(
        toasts[0].description.as_deref(),
        Some("Не забудь выполнить план на сегодня")
    );
    assert_eq!(toasts[0].duration_ms, Some(10_000));
}

#[test]
fn test_reminder_skipped_minute_never_fires() {
    let (notifier, rx) = toast_channel();
    // Ticks land at 18:01:10, 18:02:10, ... and never inside 18:00
    let clock = ManualClock::at(18, 0, 10);
    let mut state = state_without_motivation();
    let mut rng = StdRng::seed_from_u64(5);
    let mut scheduler = Scheduler::default();

    scheduler.mount(&state, &clock);
    for _ in 0..5 {
        clock.advance(MINUTE);
        scheduler.tick(&clock, &mut state, &notifier, &mut rng);
    }

    assert_eq!(reminders(&rx.try_iter().collect::<Vec<_>>()), 0);
}

#[test]
fn test_reminder_malformed_time_is_silent() {
    let (notifier, rx) = toast_channel();
    let clock = ManualClock::at(0, 0, 30);
    let mut state = state_without_motivation();
    let mut rng = StdRng::seed_from_u64(5);
    let mut scheduler = Scheduler::default();

    state.update_notification_setting(NotificationField::WorkoutTime("soon".into()));
    scheduler.mount(&state, &clock);

    // A full day of ticks
    for _ in 0..(24 * 60) {
        clock.advance(MINUTE);
        scheduler.tick(&clock, &mut state, &notifier, &mut rng);
    }

    assert_eq!(reminders(&rx.try_iter().collect::<Vec<_>>()), 0);
}

#[test]
fn test_settings_change_restarts_poll() {
    let (notifier, rx) = toast_channel();
    let clock = ManualClock::at(6, 59, 0);
    let mut state = state_without_motivation();
    let mut rng = StdRng::seed_from_u64(5);
    let mut scheduler = Scheduler::default();

    scheduler.mount(&state, &clock);

    // Edit the time 20 s in; the next check moves to 20 s + 60 s = 07:00:20
    clock.advance(Duration::from_secs(20));
    state.update_notification_setting(NotificationField::WorkoutTime("07:00".into()));
    scheduler.tick(&clock, &mut state, &notifier, &mut rng);

    clock.advance(Duration::from_secs(40));
    let outcome = scheduler.tick(&clock, &mut state, &notifier, &mut rng);
    assert!(!outcome.reminder_fired, "old interval must be torn down");

    clock.advance(Duration::from_secs(20));
    let outcome = scheduler.tick(&clock, &mut state, &notifier, &mut rng);
    assert!(outcome.reminder_fired);

    assert_eq!(reminders(&rx.try_iter().collect::<Vec<_>>()), 1);
}

#[test]
fn test_reenabling_starts_poll() {
    let (notifier, rx) = toast_channel();
    let clock = ManualClock::at(17, 58, 0);
    let mut state = state_without_motivation();
    let mut rng = StdRng::seed_from_u64(5);
    let mut scheduler = Scheduler::default();

    state.update_notification_setting(NotificationField::Enabled(false));
    scheduler.mount(&state, &clock);
    assert!(!scheduler.reminder().is_running());

    clock.advance(MINUTE);
    state.update_notification_setting(NotificationField::Enabled(true));
    scheduler.tick(&clock, &mut state, &notifier, &mut rng);
    assert!(scheduler.reminder().is_running());

    clock.advance(MINUTE);
    let outcome = scheduler.tick(&clock, &mut state, &notifier, &mut rng);
    assert!(outcome.reminder_fired);
    assert_eq!(reminders(&rx.try_iter().collect::<Vec<_>>()), 1);
}

#[test]
fn test_teardown_stops_reminders() {
    let (notifier, rx) = toast_channel();
    let clock = ManualClock::at(17, 59, 0);
    let mut state = state_without_motivation();
    let mut rng = StdRng::seed_from_u64(5);
    let mut scheduler = Scheduler::default();

    scheduler.mount(&state, &clock);
    scheduler.teardown();

    clock.advance(MINUTE);
    let outcome = scheduler.tick(&clock, &mut state, &notifier, &mut rng);

    assert!(!outcome.reminder_fired);
    assert!(rx.try_recv().is_err());
}
