//! Read-only view of a round for rendering.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::event::RoundSummary;
use crate::cards::{Card, CardFace};
use crate::core::{Position, Ticks};

/// Everything the presentation layer needs to draw a frame.
///
/// `cards` shares structure with the live grid, so taking a snapshot every
/// frame is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// Round generation, bumped on every restart.
    pub round: u64,
    pub rows: usize,
    pub columns: usize,
    pub cards: Vector<Card>,
    pub score: u32,
    pub matched_pairs: u32,
    pub total_pairs: u32,
    pub remaining: Ticks,
    pub ended: bool,
    pub summary: Option<RoundSummary>,
}

impl RoundSnapshot {
    /// Card at `position`, if on the board.
    #[must_use]
    pub fn card(&self, position: Position) -> Option<&Card> {
        self.cards.get(position.index())
    }

    /// Faces in grid order.
    pub fn faces(&self) -> impl Iterator<Item = CardFace> + '_ {
        self.cards.iter().map(Card::face)
    }
}
