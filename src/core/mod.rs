//! Core engine types: positions, time, RNG, configuration, errors.
//!
//! These are the building blocks shared by the deck, the match engine and
//! the session controller.

pub mod config;
pub mod error;
pub mod position;
pub mod rng;
pub mod time;

pub use config::{check_grid, RoundConfig};
pub use error::{ConfigError, ConfigResult};
pub use position::Position;
pub use rng::{GameRng, GameRngState};
pub use time::Ticks;
