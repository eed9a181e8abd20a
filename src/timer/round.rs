//! The round countdown.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::Ticks;

/// Countdown lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerStatus {
    Running,
    /// Reached zero on its own.
    Expired,
    /// Halted by the session before reaching zero.
    Stopped,
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerTick {
    /// Timer is not running; nothing changed.
    Inert,
    /// One quantum elapsed.
    Ticked { remaining: Ticks },
    /// The clock hit zero on this tick. Reported exactly once.
    Expired,
}

/// Countdown from the configured round duration to zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTimer {
    duration: Ticks,
    remaining: Ticks,
    status: TimerStatus,
}

impl RoundTimer {
    /// Start a running countdown.
    #[must_use]
    pub fn new(duration: Ticks) -> Self {
        Self {
            duration,
            remaining: duration,
            status: TimerStatus::Running,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Ticks {
        self.duration
    }

    #[must_use]
    pub fn remaining(&self) -> Ticks {
        self.remaining
    }

    #[must_use]
    pub fn status(&self) -> TimerStatus {
        self.status
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    /// Advance the countdown by one quantum.
    pub fn tick(&mut self) -> TimerTick {
        if !self.is_running() {
            return TimerTick::Inert;
        }

        self.remaining = self.remaining.saturating_sub(Ticks::new(1));
        if self.remaining.is_zero() {
            self.status = TimerStatus::Expired;
            info!(duration = %self.duration, "round timer expired");
            return TimerTick::Expired;
        }

        debug!(remaining = %self.remaining, "timer tick");
        TimerTick::Ticked {
            remaining: self.remaining,
        }
    }

    /// Halt the countdown. No-op once expired or stopped.
    pub fn stop(&mut self) {
        if self.is_running() {
            self.status = TimerStatus::Stopped;
        }
    }

    /// Remaining time as `MM:SS`, treating one tick as one second.
    ///
    /// ```
    /// use concentration::core::Ticks;
    /// use concentration::timer::RoundTimer;
    ///
    /// assert_eq!(RoundTimer::new(Ticks::new(120)).clock_display(), "02:00");
    /// assert_eq!(RoundTimer::new(Ticks::new(61)).clock_display(), "01:01");
    /// ```
    #[must_use]
    pub fn clock_display(&self) -> String {
        let secs = self.remaining.raw();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}
