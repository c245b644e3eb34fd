//! # Terminal Error Type
//!
//! Unified fatal-error type for the console session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Error Flow in the Order Terminal                        │
//! │                                                                         │
//! │  InvalidChoice (shawarma-core)                                          │
//! │       │  a typed answer failed to parse                                 │
//! │       ▼                                                                 │
//! │  CONSUMED by the prompt loop: print the field's retry message,          │
//! │  ask again. Never becomes a TerminalError, never aborts.                │
//! │                                                                         │
//! │  TerminalError (this module) - everything here is FATAL                 │
//! │       │                                                                 │
//! │       ├── InputClosed   stdin exhausted mid-session                     │
//! │       ├── Io            a console read or write failed                  │
//! │       └── Order         core accumulator invariant breached             │
//! │       ▼                                                                 │
//! │  propagates with `?` to main ──► error! log on stderr ──► exit ≠ 0     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use shawarma_core::OrderError;

/// Fatal session errors. Anything that reaches this type ends the program.
///
/// Invalid answers are not errors at this layer: the prompt loop handles
/// them locally and keeps asking.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// The input stream ended while a prompt was still waiting for a line.
    ///
    /// ## When This Occurs
    /// - stdin is a pipe or file that ran out of lines before all three
    ///   fields were answered
    /// - the user closed the terminal's input (Ctrl-D on an empty line)
    #[error("input stream closed before the order was complete")]
    InputClosed,

    /// A console read or write failed.
    ///
    /// ## When This Occurs
    /// - stdout is a pipe whose reader went away (broken pipe)
    /// - the underlying stream reported any other I/O error
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The core order accumulator rejected an operation.
    ///
    /// ## When This Occurs
    /// - cannot happen through the fixed three-question session; mapped
    ///   here so the seam stays honest if the session code ever changes
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Convenience alias for results carrying [`TerminalError`].
pub type TerminalResult<T> = Result<T, TerminalError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shawarma_core::ChoiceField;

    #[test]
    fn test_input_closed_message() {
        let err = TerminalError::InputClosed;
        assert_eq!(
            err.to_string(),
            "input stream closed before the order was complete"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err = TerminalError::from(io);
        assert!(matches!(err, TerminalError::Io(_)));
        assert!(err.to_string().starts_with("console I/O failed:"));
    }

    #[test]
    fn test_order_error_passes_through_transparently() {
        let err = TerminalError::from(OrderError::Incomplete {
            field: ChoiceField::Drink,
        });
        assert_eq!(err.to_string(), "order is incomplete: missing the drink answer");
    }
}
