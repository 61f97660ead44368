//! CLI command implementations
//!
//! `serve` loads the model once, then hands the predictor to the HTTP
//! server. A failed load is logged and the server still starts.

use std::net::SocketAddr;
use std::path::Path;

use tracing::info;

use crate::api::ApiHandler;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::logging;
use crate::model::load_or_degrade;
use crate::schema::FIELDS;

use super::args::{server_config, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_json};

/// Parse arguments and run the requested command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    logging::init(cli.command.debug());
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            model,
            host,
            port,
            debug,
            cors_origins,
        } => serve(server_config(model, host, port, debug, cors_origins)),
        Command::Predict { model } => predict(&model),
        Command::Fields => fields(),
    }
}

/// Start the HTTP server
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    config
        .socket_addr()
        .parse::<SocketAddr>()
        .map_err(|e| CliError::config_error(format!("invalid bind address: {}", e)))?;

    let predictor = load_or_degrade(&config.model_path);
    info!(
        model_path = %config.model_path.display(),
        model_loaded = predictor.is_loaded(),
        "starting prediction service"
    );

    let server = HttpServer::with_config(config, predictor);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Run a single prediction from stdin
///
/// The response body matches `POST /api/predict`; a non-200 outcome also
/// makes the process exit non-zero.
pub fn predict(model_path: &Path) -> CliResult<()> {
    let predictor = load_or_degrade(model_path);
    let input = read_request()?;

    let response = ApiHandler::new(&predictor).handle_str(&input);
    write_json(&response.to_value())?;

    if response.is_success() {
        Ok(())
    } else {
        Err(CliError::predict_failed(response.status_code()))
    }
}

/// Print the field schema
pub fn fields() -> CliResult<()> {
    write_json(FIELDS.as_slice())
}
