//! CLI module
//!
//! Provides command-line interface for:
//! - serve: load the model and run the HTTP server
//! - predict: one-shot prediction from stdin
//! - fields: print the field schema

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{fields, predict, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, write_json};
