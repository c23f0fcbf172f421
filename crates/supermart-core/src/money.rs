//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Accumulating a line subtotal in floating point:                        │
//! │    1.20 + 1.20 + 1.20 = 3.5999999999999996  ❌ WRONG!                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (paise)                              │
//! │    120 + 120 + 120 = 360 paise = 3.60        ✅ exact                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use supermart_core::money::Money;
//!
//! let price = Money::from_minor(250); // 2.50
//! let line = price * 4;               // 10.00
//! assert_eq!(line.to_string(), "10.00");
//! assert_eq!(line.with_symbol("₹").to_string(), "₹10.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

/// Number of minor units in one major unit (paise per rupee).
pub const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction stays closed, even though bill amounts are
///   never negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **No symbol**: the currency symbol is a display convention and is
///   attached with [`Money::with_symbol`]
///
/// ## Where Money Flows
/// ```text
/// CatalogEntry.unit_price ──► LineItem.unit_price ──► LineItem.subtotal
///                                                          │
///                                                          ▼
///                                             BillLedger::grand_total()
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ```rust
    /// use supermart_core::money::Money;
    ///
    /// let price = Money::from_minor(1099);
    /// assert_eq!(price.minor_units(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -5.50.
    ///
    /// ```rust
    /// use supermart_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(8, 75).minor_units(), 875);
    /// assert_eq!(Money::from_major_minor(-5, 50).minor_units(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * MINOR_PER_MAJOR - minor)
        } else {
            Money(major * MINOR_PER_MAJOR + minor)
        }
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, returning `None` on overflow.
    ///
    /// ```rust
    /// use supermart_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(225);
    /// assert_eq!(unit_price.checked_mul_quantity(3), Some(Money::from_minor(675)));
    /// assert_eq!(unit_price.checked_mul_quantity(i64::MAX), None);
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }

    /// Wraps the amount for display with a leading currency symbol.
    ///
    /// ```rust
    /// use supermart_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(825).with_symbol("₹").to_string(), "₹8.25");
    /// assert_eq!(Money::from_minor(-550).with_symbol("$").to_string(), "-$5.50");
    /// ```
    pub fn with_symbol<'a>(&self, symbol: &'a str) -> WithSymbol<'a> {
        WithSymbol {
            amount: *self,
            symbol,
        }
    }

    fn write_plain(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.major().abs(),
            self.minor_part()
        )
    }
}

// =============================================================================
// Display
// =============================================================================

/// Renders as `major.minor` with two decimals and no symbol.
///
/// Width and alignment flags are honoured, so `format!("{:<10}", m)`
/// pads like any string column.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.write_plain(""))
    }
}

/// Display adapter returned by [`Money::with_symbol`].
#[derive(Debug, Clone, Copy)]
pub struct WithSymbol<'a> {
    amount: Money,
    symbol: &'a str,
}

impl fmt::Display for WithSymbol<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.amount.write_plain(self.symbol))
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
