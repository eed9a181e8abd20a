//! A single playable cell.
//!
//! ```text
//!   FaceDown --select--> FaceUp --mark_matched--> Matched (terminal)
//!       ^                  |
//!       +---reset_face-----+
//! ```
//!
//! Cards do not know about the session. `select` hands back a `Selection`
//! which the caller routes into the match engine.

use serde::{Deserialize, Serialize};

use super::identity::CardIdentity;
use crate::core::Position;

/// Which side of the card is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    /// Hidden, selectable.
    #[default]
    FaceDown,
    /// Revealed but not yet paired.
    FaceUp,
    /// Revealed for good.
    Matched,
}

/// A card flipped by the player, reported to the match engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub position: Position,
    pub identity: CardIdentity,
}

/// A card on the grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique position on the grid.
    pub position: Position,

    /// Face printed on the front.
    pub identity: CardIdentity,

    face: CardFace,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(position: Position, identity: CardIdentity) -> Self {
        Self {
            position,
            identity,
            face: CardFace::FaceDown,
        }
    }

    /// Current face state.
    #[must_use]
    pub fn face(&self) -> CardFace {
        self.face
    }

    /// Only face-down cards accept a selection.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.face == CardFace::FaceDown
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face == CardFace::FaceUp
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.face == CardFace::Matched
    }

    /// Flip the card face up.
    ///
    /// Returns the selection to report, or `None` if the card was already
    /// face up or matched (no state change in that case).
    pub fn select(&mut self) -> Option<Selection> {
        if !self.is_selectable() {
            return None;
        }
        self.face = CardFace::FaceUp;
        Some(Selection {
            position: self.position,
            identity: self.identity,
        })
    }

    /// Turn the card back over.
    ///
    /// Matched cards never revert. Returns `true` if the card actually
    /// went from face up to face down.
    pub fn reset_face(&mut self) -> bool {
        match self.face {
            CardFace::FaceUp => {
                self.face = CardFace::FaceDown;
                true
            }
            CardFace::FaceDown | CardFace::Matched => false,
        }
    }

    /// Lock the card face up. Idempotent.
    pub fn mark_matched(&mut self) {
        self.face = CardFace::Matched;
    }
}
