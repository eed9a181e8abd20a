//! Observable session events.
//!
//! The session emits a discrete event for every visible change. Hosts drain
//! them after each input or tick and drive animation, audio and text from
//! them; the engine itself never waits on presentation.

use serde::{Deserialize, Serialize};

use crate::cards::CardIdentity;
use crate::core::{Position, Ticks};

/// Why a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// Every pair was found.
    AllPairsMatched,
    /// The clock ran out.
    TimeExpired,
}

/// Final result of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub reason: EndReason,
    pub score: u32,
    pub matched_pairs: u32,
    pub total_pairs: u32,
    /// Time left on the clock when the round ended.
    pub remaining: Ticks,
}

impl RoundSummary {
    /// True if the board was cleared.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.reason == EndReason::AllPairsMatched
    }
}

impl std::fmt::Display for RoundSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            EndReason::AllPairsMatched => write!(f, "Score: {} - Game Over!", self.score),
            EndReason::TimeExpired => write!(f, "Time's Up! Final Score: {}", self.score),
        }
    }
}

/// Something the presentation layer may want to react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A card was turned face up by the player.
    CardFlipped {
        position: Position,
        identity: CardIdentity,
    },

    /// Two face-up cards matched and are now locked.
    MatchFound {
        first: Position,
        second: Position,
        identity: CardIdentity,
        score: u32,
    },

    /// Two face-up cards differ; they will flip back after the grace period.
    MismatchFound {
        first: Position,
        second: Position,
        /// Mismatch sequence number within the round.
        generation: u64,
    },

    /// A mismatched pair was turned back face down.
    CardsReset {
        first: Position,
        second: Position,
        /// Generation of the `MismatchFound` this reset answers.
        generation: u64,
    },

    /// The round clock moved.
    TimerTicked { remaining: Ticks },

    /// The round is over. Always the last event of a round.
    RoundEnded(RoundSummary),
}

impl SessionEvent {
    /// Short name, handy for logging and for mapping to sound cues.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            SessionEvent::CardFlipped { .. } => "card_flipped",
            SessionEvent::MatchFound { .. } => "match_found",
            SessionEvent::MismatchFound { .. } => "mismatch_found",
            SessionEvent::CardsReset { .. } => "cards_reset",
            SessionEvent::TimerTicked { .. } => "timer_ticked",
            SessionEvent::RoundEnded(_) => "round_ended",
        }
    }
}
