//! # Money Module
//!
//! Provides the `Money` type for unit prices and stock valuation.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Inventory value in floating point:                                     │
//! │    18.50 × 12 + 32.75 × 28 = 1138.9999999999998  ❌                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1850 × 12 + 3275 × 28 = 113900 cents = R$ 1139.00                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pastry_core::money::Money;
//!
//! let price = Money::from_cents(1850);     // R$ 18.50
//! let stock_value = price * 12u32;         // R$ 222.00
//! assert_eq!(stock_value.cents(), 22_200);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (centavos).
///
/// ## Design Decisions
/// - **i64 (signed)**: non-negativity of prices is a validation rule, not a
///   type rule
/// - **Saturating arithmetic**: products rehydrated from a hand-edited data
///   file skip validation, so valuation clamps at the i64 bounds instead of
///   overflowing
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use pastry_core::money::Money;
    ///
    /// let price = Money::from_cents(2599); // Represents R$ 25.99
    /// assert_eq!(price.cents(), 2599);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (reais and centavos).
    ///
    /// ## Example
    /// ```rust
    /// use pastry_core::money::Money;
    ///
    /// let price = Money::from_major_minor(32, 75); // R$ 32.75
    /// assert_eq!(price.cents(), 3275);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a stock quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// Product: Manteiga R$ 32.75 / kg
    /// Stock: 28 kg
    ///      │
    ///      ▼
    /// multiply_quantity(28) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Stock value: R$ 917.00 (summed into the dashboard total)
    /// ```
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        // i128 intermediate, clamped back into i64
        let cents = self.0 as i128 * qty as i128;
        Money(clamp_cents(cents))
    }
}

const fn clamp_cents(cents: i128) -> i64 {
    if cents > i64::MAX as i128 {
        i64::MAX
    } else if cents < i64::MIN as i128 {
        i64::MIN
    } else {
        cents as i64
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money the way the dashboard does (`R$ 25.99`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}R$ {}.{:02}", sign, self.major().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Multiplication by a stock quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(i64::from(qty))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
