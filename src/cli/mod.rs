//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Encoda using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Encoda - batch export bridge for a timeline editor
#[derive(Parser, Debug)]
#[command(name = "encoda")]
#[command(version, about, long_about = None)]
#[command(author = "Encoda Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "encoda.toml", env = "ENCODA_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ENCODA_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export the selected sequences (or the active one) via the encoder
    Export(commands::export::ExportArgs),

    /// Show what the host sees and the effective export settings
    Status(commands::status::StatusArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["encoda", "export"]);
        assert_eq!(cli.config, "encoda.toml");
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["encoda", "--config", "custom.toml", "export"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["encoda", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_export_flags() {
        let cli = Cli::parse_from(["encoda", "export", "--single", "--in-out"]);
        match cli.command {
            Commands::Export(args) => {
                assert!(args.single);
                assert!(args.in_out);
                assert!(!args.direct);
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["encoda", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_status() {
        let cli = Cli::parse_from(["encoda", "status"]);
        assert!(matches!(cli.command, Commands::Status(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["encoda", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
