//! # Shawarma Terminal Library
//!
//! Console shell for the shawarma order calculator. The binary in `main.rs`
//! is a thin wrapper around [`run`]; everything testable lives here.
//!
//! ## Module Organization
//! ```text
//! shawarma_terminal/
//! ├── lib.rs          ◄─── You are here (stream wiring & logging setup)
//! ├── session.rs      ◄─── The full console conversation
//! ├── prompt.rs       ◄─── Read-validate-retry loop for one field
//! └── error.rs        ◄─── Fatal TerminalError type
//! ```
//!
//! ## Two Output Streams, Two Jobs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Stream Discipline                               │
//! │                                                                         │
//! │  stdout ──► the order protocol, byte-exact                             │
//! │             prompts, retry messages, the total - nothing else          │
//! │                                                                         │
//! │  stderr ──► tracing diagnostics, filtered by RUST_LOG                  │
//! │             quiet by default (warn); debug shows accepted line         │
//! │             amounts; never mixed into the protocol                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod prompt;
pub mod session;

use std::io;

use tracing_subscriber::EnvFilter;

pub use error::{TerminalError, TerminalResult};

/// Runs one order session over the process's real console streams.
///
/// Stdin and stdout are locked once for the whole session and released by
/// drop on every return path, including the fatal end-of-input one.
pub fn run() -> TerminalResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();
    let mut writer = stdout.lock();

    session::run_session(&mut reader, &mut writer)?;
    Ok(())
}

/// Initializes tracing output on stderr.
///
/// Default filter is `warn` so an ordinary session prints nothing but the
/// protocol; `RUST_LOG=shawarma=debug` surfaces the per-field line amounts.
/// Stdout is never used for diagnostics.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
