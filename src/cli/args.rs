//! CLI argument definitions using clap
//!
//! Commands:
//! - survival-predictor serve [--model <path>] [--host <host>] [--port <port>] [--debug]
//! - survival-predictor predict --model <path>   (JSON on stdin)
//! - survival-predictor fields

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::http_server::HttpServerConfig;

/// Survival prediction service
#[derive(Parser, Debug)]
#[command(name = "survival-predictor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to the model file
        #[arg(long, env = "MODEL_PATH", default_value = "model_rf.json")]
        model: PathBuf,

        /// Host to bind to
        #[arg(long, env = "APP_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, env = "PORT", default_value_t = 5000)]
        port: u16,

        /// Enable debug logging
        #[arg(
            long,
            env = "APP_DEBUG",
            action = ArgAction::Set,
            num_args = 0..=1,
            default_missing_value = "true",
            default_value = "false",
            value_parser = parse_flag
        )]
        debug: bool,

        /// Allowed CORS origin (repeatable)
        #[arg(long = "cors-origin")]
        cors_origins: Vec<String>,
    },

    /// Predict once: read a JSON object from stdin, write the result to stdout
    Predict {
        /// Path to the model file
        #[arg(long, env = "MODEL_PATH", default_value = "model_rf.json")]
        model: PathBuf,
    },

    /// Print the field schema as JSON
    Fields,
}

impl Command {
    /// Whether debug logging was requested
    pub fn debug(&self) -> bool {
        matches!(self, Command::Serve { debug: true, .. })
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Build the server configuration from `serve` arguments
pub fn server_config(
    model: PathBuf,
    host: String,
    port: u16,
    debug: bool,
    cors_origins: Vec<String>,
) -> HttpServerConfig {
    HttpServerConfig {
        model_path: model,
        host,
        port,
        debug,
        cors_origins,
    }
}

/// Accepts 1/true/yes (any case) as true, anything else as false
fn parse_flag(s: &str) -> Result<bool, String> {
    Ok(matches!(
        s.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    ))
}
