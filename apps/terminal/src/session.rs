//! # Order Session
//!
//! The complete console conversation, from welcome banner to printed total.
//!
//! ## Console Protocol (byte-exact)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Welcome to the Shawarma Shop!                                          │
//! │  Do you want a Shawarma plate or wrap?                                  │
//! │  (plate/wrap): plate                                                    │
//! │  Do you want meat or vegetables? (meat/veg)                             │
//! │  meat                                                                   │
//! │  Do you want a drink? (yes/no)                                          │
//! │  yes                                                                    │
//! │  Your total including HST is: $                                         │
//! │  19.21                                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The three questions always run in this order - type, filling, drink -
//! no matter how many retries any single question takes. Rejected answers
//! never touch the order; only an accepted answer adds its line amount.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use shawarma_core::{DrinkChoice, Filling, Order, OrderTotals, ShawarmaType};

use crate::error::TerminalResult;
use crate::prompt::{prompt_field, FieldPrompt};

// =============================================================================
// Protocol Text
// =============================================================================

/// Banner printed once at session start.
pub const WELCOME: &str = "Welcome to the Shawarma Shop!";

/// Label line printed before the final amount.
pub const TOTAL_LABEL: &str = "Your total including HST is: $";

const TYPE_PROMPT: FieldPrompt = FieldPrompt {
    question: "Do you want a Shawarma plate or wrap?",
    inline_hint: Some("(plate/wrap): "),
    invalid: "Invalid shawarma type. Please try again.",
};

const FILLING_PROMPT: FieldPrompt = FieldPrompt {
    question: "Do you want meat or vegetables? (meat/veg)",
    inline_hint: None,
    invalid: "Invalid filling choice. Please try again.",
};

const DRINK_PROMPT: FieldPrompt = FieldPrompt {
    question: "Do you want a drink? (yes/no)",
    inline_hint: None,
    invalid: "Invalid drink choice. Please try again.",
};

// =============================================================================
// Session
// =============================================================================

/// Runs one complete order session over the given streams.
///
/// Returns the computed totals so callers (and tests) can check the math
/// independently of the printed transcript. The binary's `run()` passes
/// locked stdin/stdout; integration tests pass in-memory buffers.
///
/// Every fatal condition (stream exhaustion, I/O failure) propagates by
/// early return, so the caller's stream handles release normally.
pub fn run_session<R, W>(reader: &mut R, writer: &mut W) -> TerminalResult<OrderTotals>
where
    R: BufRead,
    W: Write,
{
    writeln!(writer, "{WELCOME}")?;

    let mut order = Order::new();

    let shawarma_type: ShawarmaType = prompt_field(reader, writer, &TYPE_PROMPT)?;
    let amount = order.choose_type(shawarma_type)?;
    debug!(choice = %shawarma_type, %amount, "shawarma type accepted");

    let filling: Filling = prompt_field(reader, writer, &FILLING_PROMPT)?;
    let amount = order.choose_filling(filling)?;
    debug!(choice = %filling, %amount, "filling accepted");

    let drink: DrinkChoice = prompt_field(reader, writer, &DRINK_PROMPT)?;
    let amount = order.choose_drink(drink)?;
    debug!(choice = %drink, %amount, "drink accepted");

    let totals = order.totals()?;
    info!(%totals, "order complete");

    writeln!(writer, "{TOTAL_LABEL}")?;
    writeln!(writer, "{}.{:02}", totals.total.dollars(), totals.total.cents_part())?;
    writer.flush()?;

    Ok(totals)
}
