//! # Prompt Loop
//!
//! The read-validate-retry loop behind every question the terminal asks.
//!
//! ## Validation State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        One Field, One Loop                              │
//! │                                                                         │
//! │   ┌──────────────────┐   line parses as T    ┌────────────────┐        │
//! │   │  AWAITING_INPUT  │ ────────────────────► │    ACCEPTED    │        │
//! │   │  (print prompt,  │                       │  (return the   │        │
//! │   │   read a line)   │ ◄──────────────┐      │  typed value)  │        │
//! │   └──────────────────┘                │      └────────────────┘        │
//! │            │            parse failed: │                                 │
//! │            │            print invalid │                                 │
//! │            │            message, loop │                                 │
//! │            └───────────────────────────                                 │
//! │                                                                         │
//! │   zero bytes read (stream exhausted) ──► TerminalError::InputClosed    │
//! │   There is NO retry limit - only EOF or a valid answer ends the loop.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Matching Contract
//! The line is taken exactly as typed - only the trailing `\n` (or `\r\n`)
//! is stripped, never other whitespace. `" plate"` is a retry, not a plate.
//! Lines are read as raw bytes: a line that is not valid UTF-8 cannot match
//! any menu literal, so it is an ordinary retry, not a stream failure.

use std::io::{BufRead, Write};
use std::str::{self, FromStr};

use tracing::trace;

use shawarma_core::InvalidChoice;

use crate::error::{TerminalError, TerminalResult};

// =============================================================================
// Field Prompt
// =============================================================================

/// The fixed console text for one field.
///
/// Kept as data rather than code so the session can declare all three
/// questions as `const` items and the loop stays generic.
#[derive(Debug, Clone, Copy)]
pub struct FieldPrompt {
    /// The question line, written with a trailing newline.
    pub question: &'static str,
    /// An inline answer hint written **without** a trailing newline, so the
    /// cursor waits on the same line. Only the type question has one.
    pub inline_hint: Option<&'static str>,
    /// The exact retry message printed for a rejected answer.
    pub invalid: &'static str,
}

// =============================================================================
// Prompt Loop
// =============================================================================

/// Asks one question until a valid answer arrives; returns the typed value.
///
/// Generic over the reader and writer so tests drive it from in-memory
/// buffers; the real session passes locked stdin/stdout.
///
/// ## Loop Behavior
/// - Prints the question (and inline hint, if any), flushes, reads one line
///   of raw bytes
/// - Strips only the line terminator; all other bytes stay as typed
/// - A line that parses ends the loop with the value
/// - A line that does not parse - including one that is not valid UTF-8 -
///   prints the field's retry message and loops; there is no retry limit
/// - A read of zero bytes means the stream is exhausted: fatal,
///   [`TerminalError::InputClosed`]
///
/// A final line without a terminator still counts as a line. Only stream
/// exhaustion and transport-level I/O failures end the loop without a
/// value; no byte sequence the user can type is fatal.
pub fn prompt_field<T, R, W>(
    reader: &mut R,
    writer: &mut W,
    prompt: &FieldPrompt,
) -> TerminalResult<T>
where
    T: FromStr<Err = InvalidChoice>,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(writer, "{}", prompt.question)?;
        if let Some(hint) = prompt.inline_hint {
            write!(writer, "{hint}")?;
        }
        // The hint has no newline; flush so it is visible before we block.
        writer.flush()?;

        // Raw bytes, not read_line: a non-UTF-8 line is an invalid answer
        // to retry, never an InvalidData error that would kill the session.
        let mut raw = Vec::new();
        let bytes_read = reader.read_until(b'\n', &mut raw)?;
        if bytes_read == 0 {
            return Err(TerminalError::InputClosed);
        }

        // Strip the terminator only; preserve every other byte as typed.
        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }

        let line = match str::from_utf8(&raw) {
            Ok(line) => line,
            Err(_) => {
                trace!("answer was not valid UTF-8, reprompting");
                writeln!(writer, "{}", prompt.invalid)?;
                continue;
            }
        };

        match line.parse::<T>() {
            Ok(choice) => return Ok(choice),
            Err(rejected) => {
                trace!(%rejected, "answer rejected, reprompting");
                writeln!(writer, "{}", prompt.invalid)?;
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use shawarma_core::{DrinkChoice, ShawarmaType};

    const TYPE_PROMPT: FieldPrompt = FieldPrompt {
        question: "Do you want a Shawarma plate or wrap?",
        inline_hint: Some("(plate/wrap): "),
        invalid: "Invalid shawarma type. Please try again.",
    };

    const DRINK_PROMPT: FieldPrompt = FieldPrompt {
        question: "Do you want a drink? (yes/no)",
        inline_hint: None,
        invalid: "Invalid drink choice. Please try again.",
    };

    fn ask<T>(input: &str, prompt: &FieldPrompt) -> (TerminalResult<T>, String)
    where
        T: FromStr<Err = InvalidChoice>,
    {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = prompt_field::<T, _, _>(&mut reader, &mut output, prompt);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_valid_answer_on_first_try() {
        let (result, output) = ask::<ShawarmaType>("plate\n", &TYPE_PROMPT);
        assert_eq!(result.unwrap(), ShawarmaType::Plate);
        assert_eq!(output, "Do you want a Shawarma plate or wrap?\n(plate/wrap): ");
    }

    #[test]
    fn test_invalid_answer_reprompts_with_exact_text() {
        let (result, output) = ask::<ShawarmaType>("sandwich\nwrap\n", &TYPE_PROMPT);
        assert_eq!(result.unwrap(), ShawarmaType::Wrap);
        assert_eq!(
            output,
            "Do you want a Shawarma plate or wrap?\n\
             (plate/wrap): Invalid shawarma type. Please try again.\n\
             Do you want a Shawarma plate or wrap?\n\
             (plate/wrap): "
        );
    }

    #[test]
    fn test_no_retry_limit() {
        let input = "a\nb\nc\nd\ne\nf\ng\nyes\n";
        let (result, output) = ask::<DrinkChoice>(input, &DRINK_PROMPT);
        assert_eq!(result.unwrap(), DrinkChoice::Yes);
        assert_eq!(
            output.matches("Invalid drink choice. Please try again.\n").count(),
            7
        );
        assert_eq!(output.matches("Do you want a drink? (yes/no)\n").count(), 8);
    }

    #[test]
    fn test_whitespace_is_not_forgiven() {
        let (result, _) = ask::<ShawarmaType>(" plate\nplate \nplate\n", &TYPE_PROMPT);
        // The padded attempts are retries; only the exact literal lands.
        assert_eq!(result.unwrap(), ShawarmaType::Plate);
    }

    #[test]
    fn test_crlf_terminator_is_stripped() {
        let (result, _) = ask::<DrinkChoice>("no\r\n", &DRINK_PROMPT);
        assert_eq!(result.unwrap(), DrinkChoice::No);
    }

    #[test]
    fn test_final_line_without_terminator_counts() {
        let (result, _) = ask::<DrinkChoice>("yes", &DRINK_PROMPT);
        assert_eq!(result.unwrap(), DrinkChoice::Yes);
    }

    #[test]
    fn test_non_utf8_line_is_a_retry_not_fatal() {
        // Bytes that cannot decode as UTF-8 cannot match any menu literal;
        // they get the same retry treatment as any other wrong answer.
        let mut input = vec![0xff, 0xfe, b'\n'];
        input.extend_from_slice(b"no\n");
        let mut reader = Cursor::new(input);
        let mut output = Vec::new();
        let result = prompt_field::<DrinkChoice, _, _>(&mut reader, &mut output, &DRINK_PROMPT);
        assert_eq!(result.unwrap(), DrinkChoice::No);

        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(
            transcript.matches("Invalid drink choice. Please try again.\n").count(),
            1
        );
        assert_eq!(transcript.matches("Do you want a drink? (yes/no)\n").count(), 2);
    }

    #[test]
    fn test_exhausted_stream_is_fatal() {
        let (result, output) = ask::<ShawarmaType>("", &TYPE_PROMPT);
        assert!(matches!(result.unwrap_err(), TerminalError::InputClosed));
        // The prompt was issued before the failed read.
        assert_eq!(output, "Do you want a Shawarma plate or wrap?\n(plate/wrap): ");
    }

    #[test]
    fn test_exhaustion_after_invalid_answers_is_still_fatal() {
        let (result, output) = ask::<DrinkChoice>("maybe\n", &DRINK_PROMPT);
        assert!(matches!(result.unwrap_err(), TerminalError::InputClosed));
        assert!(output.contains("Invalid drink choice. Please try again.\n"));
    }
}
