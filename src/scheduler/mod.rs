//! Scheduled side-effects of the dashboard view.
//!
//! Both timers are polled from the frame loop through [`Scheduler::tick`];
//! nothing runs on another thread. Tearing the scheduler down guarantees no
//! further firings.

pub mod clock;
pub mod motivation;
pub mod reminder;

use std::time::{Duration, Instant};

use rand::Rng;

use crate::notifications::Notifier;
use crate::state::DashboardState;

pub use clock::{Clock, ManualClock, SystemClock};
pub use motivation::{MotivationPhase, MotivationTimer, DEFAULT_MOTIVATION_DELAY};
pub use reminder::{is_reminder_minute, ReminderPoll, DEFAULT_REMINDER_INTERVAL};

/// What fired during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// The motivational prompt was shown
    pub motivation_fired: bool,
    /// A workout reminder was sent
    pub reminder_fired: bool,
}

/// Owner of the motivational timer and the reminder poll.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    motivation: MotivationTimer,
    reminder: ReminderPoll,
    mounted: bool,
}

impl Scheduler {
    /// Create an unmounted scheduler.
    pub fn new(motivation_delay: Duration, reminder_interval: Duration) -> Self {
        Self {
            motivation: MotivationTimer::new(motivation_delay),
            reminder: ReminderPoll::new(reminder_interval),
            mounted: false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn motivation(&self) -> &MotivationTimer {
        &self.motivation
    }

    pub fn reminder(&self) -> &ReminderPoll {
        &self.reminder
    }

    /// Start both timers for a freshly shown view.
    pub fn mount(&mut self, state: &DashboardState, clock: &dyn Clock) {
        let now = clock.now();
        self.mounted = true;
        self.motivation
            .mount(state.notification_settings(), state.today_completed(), now);
        self.reminder.stop();
        self.reminder
            .sync(state.notification_settings(), state.settings_revision(), now);
    }

    /// Advance both timers to the clock's current time.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        clock: &dyn Clock,
        state: &mut DashboardState,
        notifier: &dyn Notifier,
        rng: &mut R,
    ) -> TickOutcome {
        if !self.mounted {
            return TickOutcome::default();
        }

        let now = clock.now();
        let motivation_fired = self.motivation.tick(now, state, notifier, rng);
        let reminder_fired = self.reminder.tick(
            state.notification_settings(),
            state.settings_revision(),
            now,
            clock.local_time(),
            notifier,
        );

        TickOutcome {
            motivation_fired,
            reminder_fired,
        }
    }

    /// Cancel everything pending.
    pub fn teardown(&mut self) {
        if self.mounted {
            tracing::debug!("Scheduler torn down");
        }
        self.mounted = false;
        self.motivation.cancel();
        self.reminder.stop();
    }

    /// Earliest instant at which a tick could do something.
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.mounted {
            return None;
        }
        match (self.motivation.deadline(), self.reminder.next_due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
