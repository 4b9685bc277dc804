//! CLI argument definitions using clap
//!
//! Commands:
//! - risk-tracker serve [--config <path>] [--port <port>]
//! - risk-tracker check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Risk Tracker - a small in-memory risk tracking service
#[derive(Parser, Debug)]
#[command(name = "risk-tracker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP server
    #[command(alias = "server")]
    Serve {
        /// Path to configuration file (optional; defaults apply if missing)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port override
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate configuration, print the effective result
    CheckConfig {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["risk-tracker", "serve", "--port", "9000"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Serve {
                config: None,
                port: Some(9000)
            }
        );
    }

    #[test]
    fn test_server_alias() {
        let cli = Cli::try_parse_from(["risk-tracker", "server"]).unwrap();
        assert!(matches!(cli.command, Command::Serve { .. }));
    }

    #[test]
    fn test_parse_check_config() {
        let cli =
            Cli::try_parse_from(["risk-tracker", "check-config", "--config", "risk.json"]).unwrap();
        assert_eq!(
            cli.command,
            Command::CheckConfig {
                config: Some(PathBuf::from("risk.json"))
            }
        );
    }

    #[test]
    fn test_missing_subcommand_rejected() {
        assert!(Cli::try_parse_from(["risk-tracker"]).is_err());
    }
}
