//! One-shot motivational prompt.
//!
//! T020: Arm once on mount when motivation is wanted and today is open
//! T021: Fire after the delay, cancel on teardown

use std::time::{Duration, Instant};

use rand::Rng;

use crate::domain::NotificationSettings;
use crate::notifications::{Notifier, Toast, ToastPosition};
use crate::state::{pick_motivational_quote, DashboardState};

/// Delay between mount and the motivational prompt.
pub const DEFAULT_MOTIVATION_DELAY: Duration = Duration::from_secs(3);

/// Display time of the motivational toast.
const MOTIVATION_TOAST_MS: u64 = 5000;

/// Motivational timer phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotivationPhase {
    /// Not armed (conditions did not hold at mount, or never mounted)
    #[default]
    Idle,
    /// Waiting for the deadline
    Armed { deadline: Instant },
    /// Prompt shown
    Fired,
    /// Torn down before the deadline
    Cancelled,
}

/// One-shot timer that reveals the motivation card.
#[derive(Debug, Clone)]
pub struct MotivationTimer {
    delay: Duration,
    phase: MotivationPhase,
}

impl Default for MotivationTimer {
    fn default() -> Self {
        Self::new(DEFAULT_MOTIVATION_DELAY)
    }
}

impl MotivationTimer {
    /// Create an idle timer with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            phase: MotivationPhase::Idle,
        }
    }

    pub fn phase(&self) -> MotivationPhase {
        self.phase
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Evaluate the arming condition for a new mount.
    ///
    /// Only called on mount: later settings changes do not re-arm.
    pub fn mount(&mut self, settings: &NotificationSettings, today_completed: bool, now: Instant) {
        self.phase = if settings.motivational_messages && !today_completed {
            tracing::debug!("Motivation timer armed ({:?})", self.delay);
            MotivationPhase::Armed {
                deadline: now + self.delay,
            }
        } else {
            MotivationPhase::Idle
        };
    }

    /// Fire if the deadline has passed. Returns `true` when it fired.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        now: Instant,
        state: &mut DashboardState,
        notifier: &dyn Notifier,
        rng: &mut R,
    ) -> bool {
        let MotivationPhase::Armed { deadline } = self.phase else {
            return false;
        };
        if now < deadline {
            return false;
        }

        self.phase = MotivationPhase::Fired;
        state.reveal_motivation();

        let quote = pick_motivational_quote(rng);
        tracing::info!("Motivational prompt shown");
        notifier.notify(
            Toast::success(quote)
                .with_duration_ms(MOTIVATION_TOAST_MS)
                .with_position(ToastPosition::TopCenter),
        );

        true
    }

    /// Cancel a pending prompt.
    pub fn cancel(&mut self) {
        if matches!(self.phase, MotivationPhase::Armed { .. }) {
            tracing::debug!("Motivation timer cancelled");
            self.phase = MotivationPhase::Cancelled;
        }
    }

    /// Deadline while armed.
    pub fn deadline(&self) -> Option<Instant> {
        match self.phase {
            MotivationPhase::Armed { deadline } => Some(deadline),
            _ => None,
        }
    }
}
