//! Configuration errors.
//!
//! Only round start can fail. Selections and ticks never return errors:
//! invalid input at runtime is ignored.

use thiserror::Error;

/// Errors raised while validating a round configuration or dealing a deck.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// One of the grid dimensions is zero.
    #[error("grid {rows}x{columns} has no cells")]
    EmptyGrid {
        /// Configured row count
        rows: usize,
        /// Configured column count
        columns: usize,
    },

    /// The grid cannot be split into pairs.
    #[error("grid {rows}x{columns} has an odd number of cells ({cells})")]
    OddCardCount {
        /// Configured row count
        rows: usize,
        /// Configured column count
        columns: usize,
        /// rows * columns
        cells: usize,
    },

    /// The grid is too large to index.
    #[error("grid {rows}x{columns} exceeds the supported card count")]
    GridTooLarge {
        /// Configured row count
        rows: usize,
        /// Configured column count
        columns: usize,
    },

    /// No identities to deal from.
    #[error("palette has no identities")]
    EmptyPalette,

    /// The round would be over before it started.
    #[error("round duration must be at least one tick")]
    ZeroDuration,

    /// Mismatched cards would never be visible.
    #[error("mismatch delay must be at least one tick")]
    ZeroMismatchDelay,
}

/// Result alias for round setup.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConfigError::OddCardCount { rows: 3, columns: 3, cells: 9 };
        assert_eq!(err.to_string(), "grid 3x3 has an odd number of cells (9)");
        assert_eq!(ConfigError::EmptyPalette.to_string(), "palette has no identities");
    }
}
