//! Per-minute workout reminder poll.
//!
//! T022: Compare wall clock with the configured reminder time every interval
//! T023: Re-establish the poll whenever the settings change

use std::time::{Duration, Instant};

use chrono::{NaiveTime, Timelike};

use crate::domain::NotificationSettings;
use crate::notifications::{Notifier, Toast};

/// Interval between reminder checks.
pub const DEFAULT_REMINDER_INTERVAL: Duration = Duration::from_secs(60);

/// Display time of the reminder toast.
const REMINDER_TOAST_MS: u64 = 10_000;

/// A running poll, tied to the settings revision it was started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActivePoll {
    revision: u64,
    next_due: Instant,
}

/// Periodic check of the reminder time.
#[derive(Debug, Clone)]
pub struct ReminderPoll {
    interval: Duration,
    active: Option<ActivePoll>,
}

impl Default for ReminderPoll {
    fn default() -> Self {
        Self::new(DEFAULT_REMINDER_INTERVAL)
    }
}

impl ReminderPoll {
    /// Create a stopped poll with the given interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            active: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the poll is currently running.
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Next check time while running.
    pub fn next_due(&self) -> Option<Instant> {
        self.active.map(|a| a.next_due)
    }

    /// Bring the poll in line with the current settings.
    ///
    /// A revision change tears the poll down; it is then re-established with
    /// a full interval from `now` if reminders are enabled.
    pub fn sync(&mut self, settings: &NotificationSettings, revision: u64, now: Instant) {
        if let Some(active) = self.active {
            if active.revision == revision {
                return;
            }
            self.active = None;
        }

        if settings.enabled {
            tracing::debug!(
                "Reminder poll established for {} (revision {})",
                settings.workout_time,
                revision
            );
            self.active = Some(ActivePoll {
                revision,
                next_due: now + self.interval,
            });
        }
    }

    /// Run a check if one is due. Returns `true` when a reminder was sent.
    pub fn tick(
        &mut self,
        settings: &NotificationSettings,
        revision: u64,
        now: Instant,
        wall: NaiveTime,
        notifier: &dyn Notifier,
    ) -> bool {
        self.sync(settings, revision, now);

        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if now < active.next_due {
            return false;
        }

        // One check per tick; missed intervals are skipped, not replayed
        while active.next_due <= now {
            active.next_due += self.interval;
        }

        if !is_reminder_minute(settings, wall) {
            return false;
        }

        tracing::info!("Workout reminder at {}", settings.workout_time);
        notifier.notify(
            Toast::new("⏰ Время тренировки!")
                .with_description("Не забудь выполнить план на сегодня")
                .with_duration_ms(REMINDER_TOAST_MS),
        );
        true
    }

    /// Stop polling.
    pub fn stop(&mut self) {
        self.active = None;
    }
}

/// Whether `wall` falls in the configured reminder minute.
///
/// Unparseable reminder times never match.
pub fn is_reminder_minute(settings: &NotificationSettings, wall: NaiveTime) -> bool {
    settings
        .reminder_time()
        .is_some_and(|(hour, minute)| wall.hour() == hour && wall.minute() == minute)
}
