//! survival-predictor CLI entry point
//!
//! Parses arguments and dispatches via `cli::run`; prints errors to
//! stderr and exits non-zero on failure.

use survival_predictor::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
