//! # Shawarma Terminal Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr, `RUST_LOG`-filtered, quiet by default)
//! 2. Lock stdin/stdout and run the order session
//! 3. Map the outcome to the process exit code
//!
//! Exit code 0 on a completed order; nonzero only for the fatal conditions
//! in [`shawarma_terminal::TerminalError`] (exhausted input, I/O failure).

use std::process::ExitCode;

use tracing::error;

fn main() -> ExitCode {
    shawarma_terminal::init_tracing();

    match shawarma_terminal::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "session aborted");
            ExitCode::FAILURE
        }
    }
}
