//! # Menu & Pricing Table
//!
//! The shop's fixed prices and the three pure cost lookups.
//!
//! Prices and the tax rate are `const` items — read-only for the process
//! lifetime, no configuration layer behind them. Each lookup takes an
//! already-validated menu enum, so both arms of every `match` are explicit
//! literals and no fallback arm exists: an unpriced value cannot reach these
//! functions at all.

use crate::money::Money;
use crate::types::{DrinkChoice, Filling, ShawarmaType, TaxRate};

/// Price of a shawarma plate.
pub const PLATE_PRICE: Money = Money::from_cents(1200);

/// Price of a shawarma wrap.
pub const WRAP_PRICE: Money = Money::from_cents(1000);

/// Surcharge for meat filling; vegetables are free.
pub const MEAT_EXTRA: Money = Money::from_cents(200);

/// Price of a drink.
pub const DRINK_PRICE: Money = Money::from_cents(300);

/// Harmonized Sales Tax, applied once to the order subtotal.
pub const HST: TaxRate = TaxRate::from_bps(1300);

/// Cost of the chosen serving style.
///
/// ## Example
/// ```rust
/// use shawarma_core::menu::{self, PLATE_PRICE};
/// use shawarma_core::types::ShawarmaType;
///
/// assert_eq!(menu::type_cost(ShawarmaType::Plate), PLATE_PRICE);
/// ```
#[inline]
pub const fn type_cost(choice: ShawarmaType) -> Money {
    match choice {
        ShawarmaType::Plate => PLATE_PRICE,
        ShawarmaType::Wrap => WRAP_PRICE,
    }
}

/// Cost of the chosen filling.
#[inline]
pub const fn filling_cost(choice: Filling) -> Money {
    match choice {
        Filling::Meat => MEAT_EXTRA,
        Filling::Veg => Money::zero(),
    }
}

/// Cost of the drink answer.
#[inline]
pub const fn drink_cost(choice: DrinkChoice) -> Money {
    match choice {
        DrinkChoice::Yes => DRINK_PRICE,
        DrinkChoice::No => Money::zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_cost() {
        assert_eq!(type_cost(ShawarmaType::Plate).cents(), 1200);
        assert_eq!(type_cost(ShawarmaType::Wrap).cents(), 1000);
    }

    #[test]
    fn test_filling_cost() {
        assert_eq!(filling_cost(Filling::Meat).cents(), 200);
        assert!(filling_cost(Filling::Veg).is_zero());
    }

    #[test]
    fn test_drink_cost() {
        assert_eq!(drink_cost(DrinkChoice::Yes).cents(), 300);
        assert!(drink_cost(DrinkChoice::No).is_zero());
    }

    #[test]
    fn test_hst_rate() {
        assert_eq!(HST.bps(), 1300);
    }
}
