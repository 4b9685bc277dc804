//! CLI command implementations
//!
//! Boot order for `serve`: configuration, logging, runtime, server.

use std::io::{self, Write};
use std::path::Path;

use crate::config::Config;
use crate::http_server::HttpServer;
use crate::observability::{init_logging, log_event, Event};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Main entry point for the CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::CheckConfig { config } => check_config(config.as_deref()),
    }
}

/// Resolve the effective configuration
pub fn load_config(config_path: Option<&Path>, port: Option<u16>) -> CliResult<Config> {
    let mut config = Config::load(config_path)?;
    if let Some(port) = port {
        config.app.port = port;
        config.validate()?;
    }
    Ok(config)
}

/// Start the HTTP server and block until shutdown
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let config = load_config(config_path, port)?;

    init_logging(&config.log)?;
    log_event(Event::BootStart);
    tracing::info!(
        event = Event::ConfigLoaded.as_str(),
        addr = %config.app.socket_addr(),
        pagination_limit = config.pagination.limit,
        pagination_offset = config.pagination.offset,
    );

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Print the effective configuration as JSON
pub fn check_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path, None)?;

    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, &config)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
