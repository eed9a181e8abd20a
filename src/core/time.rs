//! Discrete round time.
//!
//! The engine never reads a wall clock. The host drives time by calling
//! `Session::tick()` once per timer period; one tick is the timer quantum.

use serde::{Deserialize, Serialize};

/// A whole number of timer quanta.
///
/// Used both for durations (round length, mismatch grace period) and for
/// absolute positions on the scheduler clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ticks(pub u32);

impl Ticks {
    /// Zero ticks.
    pub const ZERO: Ticks = Ticks(0);

    /// Create a tick count.
    #[must_use]
    pub const fn new(ticks: u32) -> Self {
        Self(ticks)
    }

    /// Get the raw tick count.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Subtract, clamping at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Ticks) -> Ticks {
        Ticks(self.0.saturating_sub(other.0))
    }

    /// Add, clamping at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Ticks) -> Ticks {
        Ticks(self.0.saturating_add(other.0))
    }
}

impl std::ops::Add for Ticks {
    type Output = Ticks;

    fn add(self, rhs: Ticks) -> Ticks {
        self.saturating_add(rhs)
    }
}

impl std::fmt::Display for Ticks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}t", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturating_arithmetic() {
        assert_eq!(Ticks::new(3).saturating_sub(Ticks::new(5)), Ticks::ZERO);
        assert_eq!(Ticks::new(u32::MAX) + Ticks::new(1), Ticks::new(u32::MAX));
        assert_eq!(Ticks::new(2) + Ticks::new(3), Ticks::new(5));
    }

    #[test]
    fn test_ordering() {
        assert!(Ticks::new(1) < Ticks::new(2));
        assert!(Ticks::ZERO.is_zero());
        assert_eq!(Ticks::new(7).to_string(), "7t");
    }
}
