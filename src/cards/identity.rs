//! Card identities and the palette they are dealt from.
//!
//! An identity is the face printed on a card. The engine never interprets
//! it beyond equality: two face-up cards match when their identities are
//! equal. Hosts map identities to sprites, glyphs or names.

use serde::{Deserialize, Serialize};

/// Opaque face symbol shared by the two cards of a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardIdentity(pub u16);

impl CardIdentity {
    /// Create a new identity.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw identity value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CardIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Face({})", self.0)
    }
}

/// The finite set of faces a deck is built from.
///
/// ## Example
///
/// ```
/// use concentration::cards::{CardIdentity, Palette};
///
/// let palette = Palette::numbered(3);
/// let faces: Vec<_> = palette.cycled().take(5).collect();
/// assert_eq!(
///     faces,
///     vec![
///         CardIdentity::new(0),
///         CardIdentity::new(1),
///         CardIdentity::new(2),
///         CardIdentity::new(0),
///         CardIdentity::new(1),
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    identities: Vec<CardIdentity>,
}

impl Palette {
    /// Create a palette from explicit identities, in dealing order.
    #[must_use]
    pub fn new(identities: Vec<CardIdentity>) -> Self {
        Self { identities }
    }

    /// Palette of `size` faces numbered `0..size`.
    ///
    /// Sizes beyond `u16::MAX + 1` are capped.
    #[must_use]
    pub fn numbered(size: usize) -> Self {
        let size = size.min(usize::from(u16::MAX) + 1);
        Self {
            identities: (0..size).map(|i| CardIdentity::new(i as u16)).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// Get the identity at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<CardIdentity> {
        self.identities.get(index).copied()
    }

    /// Iterate identities in palette order.
    pub fn iter(&self) -> impl Iterator<Item = CardIdentity> + '_ {
        self.identities.iter().copied()
    }

    /// Endless iterator over the palette, wrapping back to the start.
    ///
    /// Empty for an empty palette.
    pub fn cycled(&self) -> impl Iterator<Item = CardIdentity> + '_ {
        self.identities.iter().copied().cycle()
    }

    /// Check if `identity` belongs to this palette.
    #[must_use]
    pub fn contains(&self, identity: CardIdentity) -> bool {
        self.identities.contains(&identity)
    }
}

impl FromIterator<CardIdentity> for Palette {
    fn from_iter<I: IntoIterator<Item = CardIdentity>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_palette() {
        let palette = Palette::numbered(4);
        assert_eq!(palette.len(), 4);
        assert_eq!(palette.get(0), Some(CardIdentity::new(0)));
        assert_eq!(palette.get(3), Some(CardIdentity::new(3)));
        assert_eq!(palette.get(4), None);
        assert!(palette.contains(CardIdentity::new(2)));
    }

    #[test]
    fn test_empty_palette_cycles_to_nothing() {
        let palette = Palette::default();
        assert!(palette.is_empty());
        assert_eq!(palette.cycled().next(), None);
    }

    #[test]
    fn test_custom_palette_order() {
        let palette: Palette = [7, 3, 5].into_iter().map(CardIdentity::new).collect();
        let faces: Vec<_> = palette.iter().map(CardIdentity::raw).collect();
        assert_eq!(faces, vec![7, 3, 5]);
    }

    #[test]
    fn test_display() {
        assert_eq!(CardIdentity::new(12).to_string(), "Face(12)");
    }
}
