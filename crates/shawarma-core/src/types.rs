//! # Domain Types
//!
//! The fixed vocabulary of a shawarma order.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Order Vocabulary                               │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ShawarmaType   │   │     Filling     │   │   DrinkChoice   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Plate "plate"  │   │  Meat  "meat"   │   │  Yes   "yes"    │       │
//! │  │  Wrap  "wrap"   │   │  Veg   "veg"    │   │  No    "no"     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   ChoiceField   │   │     TaxRate     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  names the 3    │   │  bps (u32)      │                             │
//! │  │  prompts above  │   │  1300 = 13%     │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Parsing Contract
//! Every menu enum parses from **exactly** its console literal. There is no
//! trimming and no case folding: `"plate"` parses, `"Plate"` and `" plate"`
//! do not. The console loop owns the retry policy; these types only decide
//! valid/invalid.

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidChoice;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so the 13% HST is stored as the integer
/// 1300 and tax math never touches floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Menu Choice Enums
// =============================================================================

/// How the shawarma is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShawarmaType {
    /// Served as a plate.
    Plate,
    /// Served as a wrap.
    Wrap,
}

impl fmt::Display for ShawarmaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShawarmaType::Plate => write!(f, "plate"),
            ShawarmaType::Wrap => write!(f, "wrap"),
        }
    }
}

impl FromStr for ShawarmaType {
    type Err = InvalidChoice;

    /// Accepts the exact literals `plate` and `wrap`, nothing else.
    ///
    /// ## Example
    /// ```rust
    /// use shawarma_core::types::ShawarmaType;
    ///
    /// let choice: ShawarmaType = "plate".parse().unwrap();
    /// assert_eq!(choice, ShawarmaType::Plate);
    /// assert!("Plate".parse::<ShawarmaType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plate" => Ok(ShawarmaType::Plate),
            "wrap" => Ok(ShawarmaType::Wrap),
            other => Err(InvalidChoice::new(ChoiceField::ShawarmaType, other)),
        }
    }
}

/// What goes inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filling {
    /// Meat filling (carries a surcharge).
    Meat,
    /// Vegetable filling (no surcharge).
    Veg,
}

impl fmt::Display for Filling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filling::Meat => write!(f, "meat"),
            Filling::Veg => write!(f, "veg"),
        }
    }
}

impl FromStr for Filling {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meat" => Ok(Filling::Meat),
            "veg" => Ok(Filling::Veg),
            other => Err(InvalidChoice::new(ChoiceField::Filling, other)),
        }
    }
}

/// Whether a drink is added to the order.
///
/// A dedicated enum rather than `bool`: the answer is part of the order
/// vocabulary and parses from the same kind of console literal as the other
/// two fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrinkChoice {
    /// Add a drink.
    Yes,
    /// No drink.
    No,
}

impl fmt::Display for DrinkChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrinkChoice::Yes => write!(f, "yes"),
            DrinkChoice::No => write!(f, "no"),
        }
    }
}

impl FromStr for DrinkChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(DrinkChoice::Yes),
            "no" => Ok(DrinkChoice::No),
            other => Err(InvalidChoice::new(ChoiceField::Drink, other)),
        }
    }
}

// =============================================================================
// Choice Field
// =============================================================================

/// Names one of the three answers an order is built from.
///
/// Used by error values and log lines to say *which* prompt a value belongs
/// to without carrying the prompt text around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceField {
    /// The plate-or-wrap question.
    ShawarmaType,
    /// The meat-or-veg question.
    Filling,
    /// The yes-or-no drink question.
    Drink,
}

impl ChoiceField {
    /// The two literals this field accepts, as shown at the prompt.
    #[inline]
    pub const fn expected(&self) -> &'static str {
        match self {
            ChoiceField::ShawarmaType => "plate/wrap",
            ChoiceField::Filling => "meat/veg",
            ChoiceField::Drink => "yes/no",
        }
    }
}

impl fmt::Display for ChoiceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceField::ShawarmaType => write!(f, "shawarma type"),
            ChoiceField::Filling => write!(f, "filling"),
            ChoiceField::Drink => write!(f, "drink"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_accessors() {
        let hst = TaxRate::from_bps(1300);
        assert_eq!(hst.bps(), 1300);
    }

    #[test]
    fn test_parse_exact_literals() {
        assert_eq!("plate".parse::<ShawarmaType>().unwrap(), ShawarmaType::Plate);
        assert_eq!("wrap".parse::<ShawarmaType>().unwrap(), ShawarmaType::Wrap);
        assert_eq!("meat".parse::<Filling>().unwrap(), Filling::Meat);
        assert_eq!("veg".parse::<Filling>().unwrap(), Filling::Veg);
        assert_eq!("yes".parse::<DrinkChoice>().unwrap(), DrinkChoice::Yes);
        assert_eq!("no".parse::<DrinkChoice>().unwrap(), DrinkChoice::No);
    }

    #[test]
    fn test_parse_rejects_near_misses() {
        // No case folding
        assert!("Plate".parse::<ShawarmaType>().is_err());
        assert!("WRAP".parse::<ShawarmaType>().is_err());
        assert!("MEAT".parse::<Filling>().is_err());
        assert!("Yes".parse::<DrinkChoice>().is_err());

        // No trimming
        assert!(" plate".parse::<ShawarmaType>().is_err());
        assert!("wrap ".parse::<ShawarmaType>().is_err());
        assert!("veg\t".parse::<Filling>().is_err());

        // Plain wrong answers
        assert!("sandwich".parse::<ShawarmaType>().is_err());
        assert!("vegetables".parse::<Filling>().is_err());
        assert!("y".parse::<DrinkChoice>().is_err());
        assert!("".parse::<DrinkChoice>().is_err());
    }

    #[test]
    fn test_parse_error_names_the_field() {
        let err = "sandwich".parse::<ShawarmaType>().unwrap_err();
        assert_eq!(err.field, ChoiceField::ShawarmaType);
        assert_eq!(err.input, "sandwich");

        let err = "coffee".parse::<DrinkChoice>().unwrap_err();
        assert_eq!(err.field, ChoiceField::Drink);
    }

    #[test]
    fn test_display_matches_console_literals() {
        assert_eq!(ShawarmaType::Plate.to_string(), "plate");
        assert_eq!(ShawarmaType::Wrap.to_string(), "wrap");
        assert_eq!(Filling::Meat.to_string(), "meat");
        assert_eq!(Filling::Veg.to_string(), "veg");
        assert_eq!(DrinkChoice::Yes.to_string(), "yes");
        assert_eq!(DrinkChoice::No.to_string(), "no");
    }

    #[test]
    fn test_choice_field_labels() {
        assert_eq!(ChoiceField::ShawarmaType.to_string(), "shawarma type");
        assert_eq!(ChoiceField::ShawarmaType.expected(), "plate/wrap");
        assert_eq!(ChoiceField::Filling.expected(), "meat/veg");
        assert_eq!(ChoiceField::Drink.expected(), "yes/no");
    }
}
