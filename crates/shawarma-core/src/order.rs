//! # Order Accumulator
//!
//! One customer's in-progress order and its totals.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Order Lifecycle                                 │
//! │                                                                         │
//! │  Order::new()            subtotal $0.00, all three fields open          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  choose_type(..)    ───► subtotal += type_cost(..)      (once only)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  choose_filling(..) ───► subtotal += filling_cost(..)   (once only)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  choose_drink(..)   ───► subtotal += drink_cost(..)     (once only)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  totals()           ───► OrderTotals { subtotal, tax, total }          │
//! │                                                                         │
//! │  Invariant: the subtotal is the sum of exactly one type cost, one      │
//! │  filling cost and one drink cost, each recorded at most once and only  │
//! │  from a value that already passed validation.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use crate::error::{OrderError, OrderResult};
use crate::menu;
use crate::money::Money;
use crate::types::{ChoiceField, DrinkChoice, Filling, ShawarmaType};

// =============================================================================
// Order
// =============================================================================

/// A single order being assembled, one validated answer at a time.
///
/// Entirely stack-local and transient: created at session start, mutated
/// once per accepted field, consumed by [`Order::totals`], gone when the
/// session ends. Nothing is shared and nothing persists.
#[derive(Debug, Clone)]
pub struct Order {
    shawarma_type: Option<ShawarmaType>,
    filling: Option<Filling>,
    drink: Option<DrinkChoice>,
    subtotal: Money,
}

impl Order {
    /// Creates an empty order with a zero subtotal.
    pub fn new() -> Self {
        Order {
            shawarma_type: None,
            filling: None,
            drink: None,
            subtotal: Money::zero(),
        }
    }

    /// Records the serving style and adds its cost to the subtotal.
    ///
    /// Returns the line amount that was added. Choosing a style twice is
    /// [`OrderError::AlreadyChosen`] — each field may be priced exactly once.
    ///
    /// ## Example
    /// ```rust
    /// use shawarma_core::order::Order;
    /// use shawarma_core::types::ShawarmaType;
    ///
    /// let mut order = Order::new();
    /// let amount = order.choose_type(ShawarmaType::Plate).unwrap();
    /// assert_eq!(amount.cents(), 1200);
    /// assert!(order.choose_type(ShawarmaType::Wrap).is_err());
    /// ```
    pub fn choose_type(&mut self, choice: ShawarmaType) -> OrderResult<Money> {
        if self.shawarma_type.is_some() {
            return Err(OrderError::AlreadyChosen {
                field: ChoiceField::ShawarmaType,
            });
        }
        let amount = menu::type_cost(choice);
        self.shawarma_type = Some(choice);
        self.subtotal += amount;
        Ok(amount)
    }

    /// Records the filling and adds its cost to the subtotal.
    pub fn choose_filling(&mut self, choice: Filling) -> OrderResult<Money> {
        if self.filling.is_some() {
            return Err(OrderError::AlreadyChosen {
                field: ChoiceField::Filling,
            });
        }
        let amount = menu::filling_cost(choice);
        self.filling = Some(choice);
        self.subtotal += amount;
        Ok(amount)
    }

    /// Records the drink answer and adds its cost to the subtotal.
    pub fn choose_drink(&mut self, choice: DrinkChoice) -> OrderResult<Money> {
        if self.drink.is_some() {
            return Err(OrderError::AlreadyChosen {
                field: ChoiceField::Drink,
            });
        }
        let amount = menu::drink_cost(choice);
        self.drink = Some(choice);
        self.subtotal += amount;
        Ok(amount)
    }

    /// The running subtotal: only validated, recorded answers contribute.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// True once all three fields have been answered.
    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Computes tax and grand total for a complete order.
    ///
    /// `tax = subtotal × HST`, `total = subtotal + tax`, all in exact cents.
    /// An order with an open field is [`OrderError::Incomplete`], naming the
    /// first unanswered field in prompt order.
    pub fn totals(&self) -> OrderResult<OrderTotals> {
        if let Some(field) = self.missing_field() {
            return Err(OrderError::Incomplete { field });
        }
        let tax = self.subtotal.apply_tax(menu::HST);
        Ok(OrderTotals {
            subtotal: self.subtotal,
            tax,
            total: self.subtotal + tax,
        })
    }

    /// First unanswered field in prompt order, if any.
    fn missing_field(&self) -> Option<ChoiceField> {
        if self.shawarma_type.is_none() {
            Some(ChoiceField::ShawarmaType)
        } else if self.filling.is_none() {
            Some(ChoiceField::Filling)
        } else if self.drink.is_none() {
            Some(ChoiceField::Drink)
        } else {
            None
        }
    }
}

impl Default for Order {
    fn default() -> Self {
        Order::new()
    }
}

// =============================================================================
// Order Totals
// =============================================================================

/// The finished arithmetic of a complete order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    /// Sum of the three line amounts, before tax.
    pub subtotal: Money,
    /// HST on the subtotal, rounded half-up to the cent.
    pub tax: Money,
    /// `subtotal + tax`.
    pub total: Money,
}

/// One-line summary for log output.
impl fmt::Display for OrderTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "subtotal {}, tax {}, total {}",
            self.subtotal, self.tax, self.total
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
