//! Cart line quantities.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Number of units of a product in the cart.
///
/// Quantities are unsigned, so a line can reach zero but never go below it.
/// A committed cart never holds a zero-quantity line; zero only shows up in
/// untrusted input (e.g., a hand-edited persisted list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// No units.
    pub const ZERO: Self = Self(0);
    /// A single unit, the quantity of a freshly added line.
    pub const ONE: Self = Self(1);

    /// Create a quantity from a raw count.
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self(count)
    }

    /// Get the underlying count.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if there are no units.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// One more unit, saturating at `u32::MAX`.
    #[must_use]
    pub const fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One fewer unit, or `None` if already at zero.
    #[must_use]
    pub const fn decremented(self) -> Option<Self> {
        match self.0.checked_sub(1) {
            Some(count) => Some(Self(count)),
            None => None,
        }
    }

    /// Sum of two quantities, saturating at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Quantity {
    fn from(count: u32) -> Self {
        Self(count)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incremented() {
        assert_eq!(Quantity::ZERO.incremented(), Quantity::ONE);
        assert_eq!(Quantity::new(u32::MAX).incremented(), Quantity::new(u32::MAX));
    }

    #[test]
    fn test_decremented() {
        assert_eq!(Quantity::new(2).decremented(), Some(Quantity::ONE));
        assert_eq!(Quantity::ONE.decremented(), Some(Quantity::ZERO));
        assert_eq!(Quantity::ZERO.decremented(), None);
    }

    #[test]
    fn test_is_zero() {
        assert!(Quantity::ZERO.is_zero());
        assert!(!Quantity::ONE.is_zero());
    }
}
