//! Card positions on the grid.
//!
//! Positions are row-major indices `0..rows * columns`, unique per card and
//! stable for the whole round.

use serde::{Deserialize, Serialize};

/// Index of a cell on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position(pub u32);

impl Position {
    /// Create a position from a raw index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Position of the cell at `(row, column)` on a grid `columns` wide.
    ///
    /// `None` if the index does not fit in a `u32`.
    ///
    /// ```
    /// use concentration::core::Position;
    ///
    /// assert_eq!(Position::at(1, 2, 4), Some(Position::new(6)));
    /// assert_eq!(Position::at(u32::MAX, 1, 2), None);
    /// ```
    #[must_use]
    pub const fn at(row: u32, column: u32, columns: u32) -> Option<Self> {
        match row.checked_mul(columns) {
            Some(offset) => match offset.checked_add(column) {
                Some(index) => Some(Self(index)),
                None => None,
            },
            None => None,
        }
    }

    /// Get the raw index.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the grid's backing storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// `(row, column)` on a grid `columns` wide.
    #[must_use]
    pub const fn coords(self, columns: u32) -> (u32, u32) {
        (self.0 / columns, self.0 % columns)
    }
}

impl From<u32> for Position {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
