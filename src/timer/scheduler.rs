//! Cancellable delayed tasks on the round clock.
//!
//! The scheduler owns the session clock. Tasks are queued with a delay
//! relative to "now" and come due once the clock reaches their due tick.
//! Nothing blocks: the session drains due tasks on every tick.
//!
//! Every task carries the round generation it was scheduled in, so a task
//! that outlives its round can be recognised and dropped.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Ticks;

/// Handle for cancelling a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// A queued task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask<T> {
    pub id: TaskId,
    /// Absolute clock tick at which the task fires.
    pub due: Ticks,
    /// Round generation the task belongs to.
    pub round: u64,
    pub payload: T,
}

/// Delay queue ordered by due tick, then by scheduling order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scheduler<T> {
    now: Ticks,
    next_id: u64,
    tasks: Vec<ScheduledTask<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Ticks::ZERO,
            next_id: 0,
            tasks: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler at tick zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock position.
    #[must_use]
    pub fn now(&self) -> Ticks {
        self.now
    }

    /// Number of tasks waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate queued tasks in firing order.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduledTask<T>> {
        self.tasks.iter()
    }

    /// Queue `payload` to fire `delay` ticks from now.
    pub fn schedule(&mut self, delay: Ticks, round: u64, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let due = self.now + delay;

        // Ids increase monotonically, so inserting after every task due at
        // or before `due` keeps (due, id) order.
        let index = self.tasks.partition_point(|task| task.due <= due);
        self.tasks.insert(
            index,
            ScheduledTask {
                id,
                due,
                round,
                payload,
            },
        );
        trace!(task = %id, due = %due, round, "task scheduled");
        id
    }

    /// Cancel a task. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                trace!(task = %id, "task cancelled");
                true
            }
            None => false,
        }
    }

    /// Cancel every queued task. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.tasks.len();
        self.tasks.clear();
        dropped
    }

    /// Move the clock forward one tick.
    pub fn advance(&mut self) -> Ticks {
        self.now = self.now + Ticks::new(1);
        self.now
    }

    /// Remove and return every task due at or before now, in firing order.
    pub fn take_due(&mut self) -> Vec<ScheduledTask<T>> {
        let split = self.tasks.partition_point(|task| task.due <= self.now);
        self.tasks.drain(..split).collect()
    }
}
