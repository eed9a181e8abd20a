//! Round configuration.
//!
//! Everything that shapes a round is supplied at round start through
//! `RoundConfig`: grid size, round length, reward, grace period, palette
//! size and RNG seed. Nothing is hardcoded in the session itself.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::time::Ticks;

/// Configuration for a single round.
///
/// Defaults mirror the classic board: a 4x4 grid of eight faces, two minutes
/// on the clock, 10 points per pair and a one-tick grace period.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Number of grid rows.
    pub rows: usize,

    /// Number of grid columns.
    pub columns: usize,

    /// Time on the clock when the round starts.
    pub round_duration: Ticks,

    /// Score awarded per matched pair.
    pub match_reward: u32,

    /// How long a mismatched pair stays face up before flipping back.
    pub mismatch_delay: Ticks,

    /// Number of distinct faces to deal from.
    /// Smaller than the pair count is allowed: faces are reused.
    pub palette_size: usize,

    /// Seed for the deal shuffle. Same seed produces the same board.
    pub seed: u64,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            columns: 4,
            round_duration: Ticks::new(120),
            match_reward: 10,
            mismatch_delay: Ticks::new(1),
            palette_size: 8,
            seed: 42,
        }
    }
}

impl RoundConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid dimensions.
    #[must_use]
    pub fn with_grid(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    /// Set the round duration in ticks.
    #[must_use]
    pub fn with_duration(mut self, ticks: u32) -> Self {
        self.round_duration = Ticks::new(ticks);
        self
    }

    /// Set the score awarded per pair.
    #[must_use]
    pub fn with_reward(mut self, reward: u32) -> Self {
        self.match_reward = reward;
        self
    }

    /// Set the mismatch grace period in ticks.
    #[must_use]
    pub fn with_mismatch_delay(mut self, ticks: u32) -> Self {
        self.mismatch_delay = Ticks::new(ticks);
        self
    }

    /// Set the number of distinct faces.
    #[must_use]
    pub fn with_palette_size(mut self, size: usize) -> Self {
        self.palette_size = size;
        self
    }

    /// Set the deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Total cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    /// Pairs needed to clear the board.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.card_count() / 2
    }

    /// Check every field before a round is allowed to start.
    pub fn validate(&self) -> ConfigResult<()> {
        check_grid(self.rows, self.columns)?;
        if self.palette_size == 0 {
            return Err(ConfigError::EmptyPalette);
        }
        if self.round_duration.is_zero() {
            return Err(ConfigError::ZeroDuration);
        }
        if self.mismatch_delay.is_zero() {
            return Err(ConfigError::ZeroMismatchDelay);
        }
        Ok(())
    }
}

/// Validate grid dimensions and return the card count.
///
/// The board must be non-empty, evenly divisible into pairs and small enough
/// for every cell to get a `u32` position.
pub fn check_grid(rows: usize, columns: usize) -> ConfigResult<usize> {
    if rows == 0 || columns == 0 {
        return Err(ConfigError::EmptyGrid { rows, columns });
    }
    let cells = rows
        .checked_mul(columns)
        .filter(|&cells| u32::try_from(cells).is_ok())
        .ok_or(ConfigError::GridTooLarge { rows, columns })?;
    if cells % 2 != 0 {
        return Err(ConfigError::OddCardCount { rows, columns, cells });
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RoundConfig::default();
        assert_eq!(config.card_count(), 16);
        assert_eq!(config.total_pairs(), 8);
        assert_eq!(config.round_duration, Ticks::new(120));
        assert_eq!(config.match_reward, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = RoundConfig::new()
            .with_grid(2, 3)
            .with_duration(30)
            .with_reward(5)
            .with_mismatch_delay(2)
            .with_palette_size(2)
            .with_seed(7);

        assert_eq!(config.card_count(), 6);
        assert_eq!(config.round_duration, Ticks::new(30));
        assert_eq!(config.match_reward, 5);
        assert_eq!(config.mismatch_delay, Ticks::new(2));
        assert_eq!(config.palette_size, 2);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_invalid_grids() {
        assert_eq!(
            check_grid(0, 4),
            Err(ConfigError::EmptyGrid { rows: 0, columns: 4 })
        );
        assert_eq!(
            check_grid(3, 3),
            Err(ConfigError::OddCardCount { rows: 3, columns: 3, cells: 9 })
        );
        assert_eq!(
            check_grid(usize::MAX, 2),
            Err(ConfigError::GridTooLarge { rows: usize::MAX, columns: 2 })
        );
        assert_eq!(check_grid(3, 4), Ok(12));
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        let base = RoundConfig::default();
        assert_eq!(base.clone().with_palette_size(0).validate(), Err(ConfigError::EmptyPalette));
        assert_eq!(base.clone().with_duration(0).validate(), Err(ConfigError::ZeroDuration));
        assert_eq!(
            base.with_mismatch_delay(0).validate(),
            Err(ConfigError::ZeroMismatchDelay)
        );
    }

    #[test]
    fn test_serialization() {
        let config = RoundConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RoundConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RoundConfig = serde_json::from_str(r#"{"rows": 2, "columns": 2}"#).unwrap();
        assert_eq!(config.card_count(), 4);
        assert_eq!(config.match_reward, 10);
    }
}
