//! # Error Types
//!
//! Typed errors for order building and answer validation.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Error Propagation                                │
//! │                                                                         │
//! │  InvalidChoice (this module)                                           │
//! │       │  a console line failed to parse as a menu literal              │
//! │       ▼                                                                 │
//! │  consumed by the prompt loop ← prints the field's fixed retry message  │
//! │                                  and asks again; never aborts          │
//! │                                                                         │
//! │  OrderError (this module)                                              │
//! │       │  an accumulator invariant was violated                         │
//! │       ▼                                                                 │
//! │  propagated to the terminal's error type and treated as fatal          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. `thiserror` derive macros, no manual `Display`/`Error` impls
//! 2. Errors are typed variants carrying the field they concern, never bare
//!    strings
//! 3. The retry policy lives in the caller; these values only report facts

use thiserror::Error;

use crate::types::ChoiceField;

// =============================================================================
// Invalid Choice
// =============================================================================

/// A console answer that matched neither of a field's two menu literals.
///
/// This is the `FromStr` error of every menu enum. It is recoverable by
/// policy: the prompt loop prints the field's retry message and reads again,
/// so this value never crosses the session boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: got {input:?}, expected one of {}", .field.expected())]
pub struct InvalidChoice {
    /// Which prompt the answer was for.
    pub field: ChoiceField,
    /// The offending line, exactly as read (terminator stripped).
    pub input: String,
}

impl InvalidChoice {
    /// Creates a rejection record for `field` from the raw console line.
    pub fn new(field: ChoiceField, input: &str) -> Self {
        InvalidChoice {
            field,
            input: input.to_string(),
        }
    }
}

// =============================================================================
// Order Error
// =============================================================================

/// Order accumulator rule violations.
///
/// Neither variant can occur through the terminal's fixed ask-three-questions
/// sequence; they guard the invariants for any other caller of the library.
#[derive(Debug, Error)]
pub enum OrderError {
    /// A field was answered twice for the same order.
    ///
    /// ## When This Occurs
    /// - A caller invokes `choose_*` for a field that already contributed
    ///   to the subtotal (each field may be priced exactly once)
    #[error("{field} has already been chosen for this order")]
    AlreadyChosen { field: ChoiceField },

    /// Totals were requested before every field was answered.
    ///
    /// ## When This Occurs
    /// - `Order::totals` is called while at least one field is still open;
    ///   `field` is the first unanswered one in prompt order
    #[error("order is incomplete: missing the {field} answer")]
    Incomplete { field: ChoiceField },
}

/// Convenience alias for results carrying [`OrderError`].
pub type OrderResult<T> = Result<T, OrderError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_choice_message() {
        let err = InvalidChoice::new(ChoiceField::ShawarmaType, "sandwich");
        assert_eq!(
            err.to_string(),
            "invalid shawarma type: got \"sandwich\", expected one of plate/wrap"
        );
    }

    #[test]
    fn test_invalid_choice_preserves_input_verbatim() {
        let err = InvalidChoice::new(ChoiceField::Filling, " meat");
        assert_eq!(err.input, " meat");
    }

    #[test]
    fn test_order_error_messages() {
        let err = OrderError::AlreadyChosen {
            field: ChoiceField::Drink,
        };
        assert_eq!(err.to_string(), "drink has already been chosen for this order");

        let err = OrderError::Incomplete {
            field: ChoiceField::Filling,
        };
        assert_eq!(err.to_string(), "order is incomplete: missing the filling answer");
    }
}
