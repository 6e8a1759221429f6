//! Type-safe price representation using decimal arithmetic.

use std::iter::Sum;
use std::ops::{Add, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in the currency's standard unit (dollars, not cents).
///
/// Backed by `rust_decimal` so line totals and cart totals stay exact.
/// Deserializes from the fractional JSON numbers the catalog service emits
/// as well as from strings.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an amount in cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.0)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<i64> for Price {
    type Output = Self;

    /// Line total: unit price times quantity.
    fn mul(self, quantity: i64) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|price| price.0).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::new(Decimal::new(1999, 2)).display(), "$19.99");
        assert_eq!(Price::new(Decimal::new(10, 0)).display(), "$10.00");
        assert_eq!(Price::ZERO.display(), "$0.00");
    }

    #[test]
    fn test_from_cents() {
        assert_eq!(Price::from_cents(1099), Price::new(Decimal::new(1099, 2)));
        assert_eq!(Price::from_cents(1099).display(), "$10.99");
    }

    #[test]
    fn test_line_total() {
        let price = Price::new(Decimal::new(1000, 2));
        assert_eq!((price * 2).display(), "$20.00");
        assert_eq!((price * 0).display(), "$0.00");
    }

    #[test]
    fn test_sum() {
        let total: Price = [
            Price::new(Decimal::new(1050, 2)),
            Price::new(Decimal::new(950, 2)),
        ]
        .into_iter()
        .sum();
        assert_eq!(total.display(), "$20.00");

        let empty: Price = std::iter::empty().sum();
        assert_eq!(empty, Price::ZERO);
    }

    #[test]
    fn test_deserialize_json_number() {
        // The catalog service emits prices as fractional JSON numbers.
        let price: Price = serde_json::from_str("109.95").expect("float price");
        assert_eq!(price.display(), "$109.95");

        let whole: Price = serde_json::from_str("55").expect("integer price");
        assert_eq!(whole.display(), "$55.00");
    }
}
