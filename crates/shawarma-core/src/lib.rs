//! # shawarma-core: Pure Business Logic for the Shawarma Shop
//!
//! This crate is the **heart** of the order terminal. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Shawarma Shop Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/terminal (console shell)                   │   │
//! │  │   welcome banner ──► 3 prompt loops ──► totals printout         │   │
//! │  │   owns stdin/stdout, retry policy, exit codes, logging          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ validated enums in, Money out          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shawarma-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   menu    │  │   order   │  │   │
//! │  │   │ Shawarma  │  │   Money   │  │  prices   │  │   Order   │  │   │
//! │  │   │Type, etc. │  │  TaxRate  │  │  lookups  │  │  totals   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONSOLE • NO LOGGING • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Menu choice enums, [`ChoiceField`], [`TaxRate`]
//! - [`money`] - [`Money`] with integer-cents arithmetic (no floating point!)
//! - [`menu`] - Fixed prices and the three pure pricing lookups
//! - [`order`] - The per-session [`Order`] accumulator and its totals
//! - [`error`] - Typed domain errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Console, file system, network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (u64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use shawarma_core::{DrinkChoice, Filling, Order, ShawarmaType};
//!
//! let mut order = Order::new();
//! order.choose_type(ShawarmaType::Plate).unwrap();   // +$12.00
//! order.choose_filling(Filling::Meat).unwrap();      // +$2.00
//! order.choose_drink(DrinkChoice::Yes).unwrap();     // +$3.00
//!
//! let totals = order.totals().unwrap();
//! assert_eq!(totals.subtotal.cents(), 1700);
//! assert_eq!(totals.tax.cents(), 221); // 13% HST
//! assert_eq!(totals.total.cents(), 1921);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shawarma_core::Money` instead of
// `use shawarma_core::money::Money`

pub use error::{InvalidChoice, OrderError, OrderResult};
pub use money::Money;
pub use order::{Order, OrderTotals};
pub use types::{ChoiceField, DrinkChoice, Filling, ShawarmaType, TaxRate};
