//! Time-driven parts of a round.
//!
//! - `RoundTimer`: countdown that can end the round on its own
//! - `Scheduler`: cancellable delayed tasks (mismatch resets) on the same clock

pub mod round;
pub mod scheduler;

pub use round::{RoundTimer, TimerStatus, TimerTick};
pub use scheduler::{ScheduledTask, Scheduler, TaskId};
