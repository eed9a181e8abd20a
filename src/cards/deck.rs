//! Dealing: a shuffled, paired sequence of identities for an R x C grid.
//!
//! ## Algorithm
//!
//! 1. `pairs = rows * columns / 2` identities are taken from the palette,
//!    wrapping around when the palette is smaller than `pairs`.
//! 2. The list is doubled so every chosen identity appears twice.
//! 3. The result is shuffled with Fisher-Yates.
//!
//! ## Small Palettes
//!
//! A palette smaller than the pair count is not an error. Faces are reused,
//! so one face may sit on four or six cards. Any two cards sharing a face
//! still match, which makes the board harder but always solvable.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::identity::{CardIdentity, Palette};
use crate::core::{check_grid, ConfigError, ConfigResult, GameRng};

/// A dealt layout, in row-major grid order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    rows: usize,
    columns: usize,
    identities: Vec<CardIdentity>,
}

impl Deck {
    /// Deal a shuffled deck for a `rows x columns` grid.
    ///
    /// Fails if the grid is empty, odd-sized or the palette is empty.
    pub fn build(
        rows: usize,
        columns: usize,
        palette: &Palette,
        rng: &mut GameRng,
    ) -> ConfigResult<Self> {
        let cells = check_grid(rows, columns)?;
        if palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        let pairs = cells / 2;
        if pairs > palette.len() {
            debug!(pairs, palette = palette.len(), "palette smaller than pair count, reusing faces");
        }

        let mut identities: Vec<CardIdentity> = Vec::with_capacity(cells);
        identities.extend(palette.cycled().take(pairs));
        identities.extend_from_within(..);
        rng.shuffle(&mut identities);

        debug!(rows, columns, cards = identities.len(), "dealt deck");
        Ok(Self {
            rows,
            columns,
            identities,
        })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of cards dealt.
    #[must_use]
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// Number of pairs in the deal.
    #[must_use]
    pub fn pairs(&self) -> usize {
        self.identities.len() / 2
    }

    /// Identities in grid order.
    #[must_use]
    pub fn identities(&self) -> &[CardIdentity] {
        &self.identities
    }

    /// How many cards carry each identity.
    ///
    /// Every count is even. With a palette at least as large as the pair
    /// count every count is exactly two.
    #[must_use]
    pub fn identity_counts(&self) -> FxHashMap<CardIdentity, usize> {
        let mut counts = FxHashMap::default();
        for &identity in &self.identities {
            *counts.entry(identity).or_insert(0) += 1;
        }
        counts
    }
}
