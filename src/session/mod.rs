//! Session orchestration: dealing, routing selections, timing and events.
//!
//! ## Key Types
//!
//! - `Session`: owns the board and drives a round from deal to end
//! - `SessionEvent`: discrete changes for the presentation layer
//! - `RoundSummary`: final score and why the round ended
//! - `RoundSnapshot`: cheap read-only view for rendering

mod controller;
mod event;
mod snapshot;

pub use controller::{PendingReset, Session};
pub use event::{EndReason, RoundSummary, SessionEvent};
pub use snapshot::RoundSnapshot;
