//! The pairing state machine.
//!
//! ```text
//!   Idle --first selection--> OneSelected --second selection--> Idle
//!                                              |
//!                                   match: both cards Matched, score += reward
//!                                   mismatch: pair handed back for a delayed reset
//! ```
//!
//! Resolution is synchronous. A mismatched pair leaves the buffer as soon as
//! it is resolved; turning the cards back over is the caller's job once the
//! grace period has passed. Both cards stay face up until then, so neither
//! can re-enter the buffer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::cards::{CardIdentity, Grid, Selection};
use crate::core::Position;

/// Where the pairing process stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairingState {
    /// Nothing pending.
    Idle,
    /// One card face up, waiting for its partner.
    OneSelected(Selection),
}

/// Outcome of feeding one selection into the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// First card of a pair; waiting for the second.
    Pending,

    /// Both cards share a face and are now matched.
    Matched {
        first: Position,
        second: Position,
        identity: CardIdentity,
    },

    /// Faces differ. Both cards are still face up and must be reset after
    /// the grace period.
    Mismatched {
        first: Position,
        second: Position,
        /// Sequence number of this mismatch within the round, starting at 1.
        generation: u64,
    },
}

/// Selection buffer plus score bookkeeping for one round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchEngine {
    pending: SmallVec<[Selection; 2]>,
    reward: u32,
    score: u32,
    matched_pairs: u32,
    total_pairs: u32,
    mismatches: u64,
}

impl MatchEngine {
    /// Create an idle engine for a board with `total_pairs` pairs.
    #[must_use]
    pub fn new(total_pairs: u32, reward: u32) -> Self {
        Self {
            pending: SmallVec::new(),
            reward,
            score: 0,
            matched_pairs: 0,
            total_pairs,
            mismatches: 0,
        }
    }

    /// Current pairing state.
    #[must_use]
    pub fn state(&self) -> PairingState {
        match self.pending.first() {
            Some(&first) => PairingState::OneSelected(first),
            None => PairingState::Idle,
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    #[must_use]
    pub fn total_pairs(&self) -> u32 {
        self.total_pairs
    }

    #[must_use]
    pub fn reward(&self) -> u32 {
        self.reward
    }

    /// Number of mismatches resolved so far.
    #[must_use]
    pub fn mismatches(&self) -> u64 {
        self.mismatches
    }

    /// Every pair on the board has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matched_pairs >= self.total_pairs
    }

    /// Feed a selection reported by a card that was just flipped.
    ///
    /// On a match both cards on `grid` are marked matched. On a mismatch the
    /// cards are left face up and returned for a delayed reset.
    pub fn submit(&mut self, selection: Selection, grid: &mut Grid) -> Resolution {
        self.pending.push(selection);
        let [first, second] = match self.pending.as_slice() {
            &[_] => return Resolution::Pending,
            &[first, second] => [first, second],
            _ => unreachable!("selection buffer holds at most two cards"),
        };
        self.pending.clear();

        if first.identity == second.identity {
            for position in [first.position, second.position] {
                if let Some(card) = grid.get_mut(position) {
                    card.mark_matched();
                }
            }
            self.score = self.score.saturating_add(self.reward);
            self.matched_pairs += 1;
            info!(
                first = %first.position,
                second = %second.position,
                identity = %first.identity,
                score = self.score,
                matched = self.matched_pairs,
                total = self.total_pairs,
                "pair matched"
            );
            Resolution::Matched {
                first: first.position,
                second: second.position,
                identity: first.identity,
            }
        } else {
            self.mismatches += 1;
            debug!(
                first = %first.position,
                second = %second.position,
                generation = self.mismatches,
                "pair mismatched"
            );
            Resolution::Mismatched {
                first: first.position,
                second: second.position,
                generation: self.mismatches,
            }
        }
    }
}
