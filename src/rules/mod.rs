//! Match resolution.
//!
//! `MatchEngine` owns the two-slot selection buffer, compares identities,
//! keeps the score and reports when every pair has been found. It never
//! schedules anything itself: mismatches are handed back to the session,
//! which owns time.

pub mod engine;

pub use engine::{MatchEngine, PairingState, Resolution};
