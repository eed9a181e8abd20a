//! Card system: identities, cards, dealing and the grid.
//!
//! ## Key Types
//!
//! - `CardIdentity`: Opaque face symbol shared by a pair
//! - `Palette`: The faces a deck is dealt from
//! - `Card`: One cell with its FaceDown/FaceUp/Matched state
//! - `Deck`: Shuffled, paired layout for a grid
//! - `Grid`: The live board owned by the session

pub mod card;
pub mod deck;
pub mod grid;
pub mod identity;

pub use card::{Card, CardFace, Selection};
pub use deck::Deck;
pub use grid::Grid;
pub use identity::{CardIdentity, Palette};
