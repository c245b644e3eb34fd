//! # Money Module
//!
//! Monetary values as an exact count of cents.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A $17.00 order taxed at 13% must come out as $19.21 every single      │
//! │  time, not as 19.209999999999997 that happens to print as 19.21.       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    $17.00 is the integer 1700; addition is exact; the one place a      │
//! │    fraction appears (tax) is integer math with explicit rounding.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Unsigned?
//! Every amount in this system — menu prices, line amounts, the subtotal,
//! tax, the grand total — is non-negative by rule. `u64` makes a negative
//! amount unrepresentable instead of merely unexpected.
//!
//! ## Usage
//! ```rust
//! use shawarma_core::money::Money;
//!
//! let plate = Money::from_cents(1200); // $12.00
//! let meat = Money::from_cents(200);   // $2.00
//!
//! let subtotal = plate + meat;
//! assert_eq!(subtotal.cents(), 1400);
//! assert_eq!(subtotal.to_string(), "$14.00");
//! ```

use std::fmt;
use std::ops::{Add, AddAssign};

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **u64 (unsigned)**: amounts here are non-negative by rule; refunds and
///   discounts do not exist in this system
/// - **Single field tuple struct**: zero-cost wrapper over the cent count
/// - **`Display` is diagnostic**: `$d.cc` for logs and test messages; the
///   console receipt line formats the bare number itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(u64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use shawarma_core::money::Money;
    ///
    /// let drink = Money::from_cents(300); // $3.00
    /// assert_eq!(drink.cents(), 300);
    /// ```
    #[inline]
    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    ///
    /// ## Example
    /// ```rust
    /// use shawarma_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1921).dollars(), 19);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> u64 {
        self.0 / 100
    }

    /// Returns the cents remainder (always 0–99).
    ///
    /// Together with [`Money::dollars`] this is the two-decimal rendering
    /// used for the receipt amount.
    ///
    /// ## Example
    /// ```rust
    /// use shawarma_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1921).cents_part(), 21);
    /// assert_eq!(Money::from_cents(1100).cents_part(), 0);
    /// ```
    #[inline]
    pub const fn cents_part(&self) -> u64 {
        self.0 % 100
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Computes the tax on this amount at `rate`, rounded half-up to the
    /// nearest cent.
    ///
    /// ## Implementation
    /// Integer math throughout: `(cents × bps + 5000) / 10000`, with the
    /// product widened to 128 bits. The `+ 5000` term is half of the divisor,
    /// which turns truncating division into half-up rounding.
    ///
    /// Every subtotal this shop can produce is a whole-dollar amount, so the
    /// division is exact for all reachable inputs and the rounding term only
    /// matters for callers taxing arbitrary amounts.
    ///
    /// ## Example
    /// ```rust
    /// use shawarma_core::menu::HST;
    /// use shawarma_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(1700); // $17.00
    /// let tax = subtotal.apply_tax(HST);
    /// assert_eq!(tax.cents(), 221); // $2.21
    ///
    /// let total = subtotal + tax;
    /// assert_eq!(total.to_string(), "$19.21");
    /// ```
    pub fn apply_tax(&self, rate: TaxRate) -> Money {
        let tax_cents = (self.0 as u128 * rate.bps() as u128 + 5000) / 10000;
        Money::from_cents(tax_cents as u64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Diagnostic `$d.cc` rendering for logs and assertions.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars(), self.cents_part())
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

/// Addition assignment (+=), used by the order's running subtotal.
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
