//! Risk tracker CLI entry point
//!
//! Parses arguments and dispatches via `cli::run`. Errors go to stderr and
//! the process exits non-zero.

use risk_tracker::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
