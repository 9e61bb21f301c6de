//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In many retail systems:                                                │
//! │    Ksh 10.00 / 3 = Ksh 3.33 (×3 = Ksh 9.99)  → Lost Ksh 0.01!          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1000 cents / 3 = 333 cents (×3 = 999 cents)                         │
//! │    We KNOW we lost 1 cent, and handle it explicitly                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kibanda_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(15000); // Ksh 150.00
//!
//! // Arithmetic operations
//! let doubled = price * 2;                        // Ksh 300.00
//! let total = price + Money::from_shillings(30);  // Ksh 180.00
//!
//! // NEVER do this:
//! // let bad = Money::from_float(150.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents of a
/// Kenyan shilling).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections and differences
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support; serializes as a bare integer of cents
///
/// Every monetary value in the system flows through this type: item prices,
/// sale amounts, running daily totals, report figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use kibanda_core::money::Money;
    ///
    /// let price = Money::from_cents(15000); // Represents Ksh 150.00
    /// assert_eq!(price.cents(), 15000);
    /// ```
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// Storage, calculations, and the API all use cents. Only display
    /// formatting converts to shillings.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole shillings.
    ///
    /// Menu prices are whole shillings in practice, so this keeps seed data
    /// and test fixtures readable.
    ///
    /// ## Example
    /// ```rust
    /// use kibanda_core::money::Money;
    ///
    /// let price = Money::from_shillings(150);
    /// assert_eq!(price.cents(), 15000);
    /// ```
    #[inline]
    pub const fn from_shillings(shillings: i64) -> Self {
        Money(shillings * 100)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-shilling portion.
    ///
    /// ## Example
    /// ```rust
    /// use kibanda_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(15050).shillings(), 150);
    /// assert_eq!(Money::from_cents(-550).shillings(), -5);
    /// ```
    #[inline]
    pub const fn shillings(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use kibanda_core::money::Money;
    ///
    /// let unit_price = Money::from_shillings(150); // Rice Plate
    /// let line_total = unit_price.multiply_quantity(5);
    /// assert_eq!(line_total, Money::from_shillings(750));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Divides evenly across `count` parts, rounding toward zero.
    ///
    /// Used for the average-transaction figure in daily summaries. Returns
    /// zero when `count` is zero so empty days report a Ksh 0.00 average.
    ///
    /// ## Example
    /// ```rust
    /// use kibanda_core::money::Money;
    ///
    /// let revenue = Money::from_shillings(1000);
    /// assert_eq!(revenue.divide_count(4), Money::from_shillings(250));
    /// assert_eq!(revenue.divide_count(0), Money::zero());
    /// ```
    #[inline]
    pub const fn divide_count(&self, count: i64) -> Self {
        if count == 0 {
            Money(0)
        } else {
            Money(self.0 / count)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in the receipt format: `Ksh 150.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}Ksh {}.{:02}",
            sign,
            self.shillings().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over iterators (for ledger revenue totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
