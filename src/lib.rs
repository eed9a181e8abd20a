//! # concentration
//!
//! Engine for the memory-matching card game: a grid of face-down cards is
//! revealed two at a time, matching pairs stay up, mismatches flip back
//! after a short grace period, and the round ends when the board is cleared
//! or the clock runs out.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: No rendering, animation or audio. The host
//!    feeds input and ticks in and reads events and snapshots out.
//!
//! 2. **Explicit Ownership**: One `Session` owns the board. Cards report
//!    selections by return value, never through a global handle.
//!
//! 3. **Configuration Over Convention**: Grid size, round length, reward,
//!    grace period and palette come from `RoundConfig` at round start.
//!
//! ## Architecture
//!
//! - **Sequential event processing**: every selection and tick is handled
//!   to completion before the next, so no locking is needed.
//!
//! - **Deterministic deals**: a seeded ChaCha8 stream drives the shuffle.
//!
//! - **Cancellable delays**: mismatch resets are scheduled tasks tagged with
//!   their round, never blocking waits.
//!
//! ## Modules
//!
//! - `core`: Positions, ticks, RNG, configuration, errors
//! - `cards`: Identities, cards, dealing, the grid
//! - `rules`: The pairing/match state machine
//! - `timer`: Round countdown and the delayed-task scheduler
//! - `session`: The controller the host talks to, plus events and snapshots

pub mod cards;
pub mod core;
pub mod rules;
pub mod session;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, ConfigResult, GameRng, GameRngState, Position, RoundConfig, Ticks,
};

pub use crate::cards::{Card, CardFace, CardIdentity, Deck, Grid, Palette, Selection};

pub use crate::rules::{MatchEngine, PairingState, Resolution};

pub use crate::timer::{RoundTimer, ScheduledTask, Scheduler, TaskId, TimerStatus, TimerTick};

pub use crate::session::{
    EndReason, PendingReset, RoundSnapshot, RoundSummary, Session, SessionEvent,
};
