//! The board: cards laid out row-major.
//!
//! Backed by a persistent `im::Vector` so snapshots handed to the
//! presentation layer are O(1) clones that share structure with the live
//! board.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardFace};
use super::deck::Deck;
use crate::core::Position;

/// Grid of cards owned by the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cards: Vector<Card>,
}

impl Grid {
    /// Lay out a dealt deck, one face-down card per identity.
    #[must_use]
    pub fn from_deck(deck: &Deck) -> Self {
        let cards = deck
            .identities()
            .iter()
            .enumerate()
            .map(|(index, &identity)| Card::new(Position::new(index as u32), identity))
            .collect();

        Self {
            rows: deck.rows(),
            columns: deck.columns(),
            cards,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get the card at `position`, `None` if out of range.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Card> {
        self.cards.get(position.index())
    }

    /// Get the card at `position` for mutation.
    pub fn get_mut(&mut self, position: Position) -> Option<&mut Card> {
        self.cards.get_mut(position.index())
    }

    /// Position of the cell at `(row, column)`, `None` if off the board.
    #[must_use]
    pub fn position_at(&self, row: usize, column: usize) -> Option<Position> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(Position::new((row * self.columns + column) as u32))
    }

    /// Iterate cards in position order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Persistent view of all cards.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Number of cards currently showing `face`.
    #[must_use]
    pub fn count(&self, face: CardFace) -> usize {
        self.cards.iter().filter(|card| card.face() == face).count()
    }
}
