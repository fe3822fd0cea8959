//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Surveyor using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Surveyor - SurveyMonkey response export tool
#[derive(Parser, Debug)]
#[command(name = "surveyor")]
#[command(version, about, long_about = None)]
#[command(author = "Surveyor Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "surveyor.toml", env = "SURVEYOR_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SURVEYOR_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export survey responses to the configured sink
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Show per-survey watermarks
    Status(commands::status::StatusArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["surveyor", "export"]);
        assert_eq!(cli.config, "surveyor.toml");
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["surveyor", "--config", "custom.toml", "export"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["surveyor", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["surveyor", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_status() {
        let cli = Cli::parse_from(["surveyor", "status"]);
        assert!(matches!(cli.command, Commands::Status(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["surveyor", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_cli_parse_export_flags() {
        let cli = Cli::parse_from([
            "surveyor",
            "export",
            "--dry-run",
            "--survey-id",
            "316084387",
            "--mode",
            "full",
        ]);
        match cli.command {
            Commands::Export(args) => {
                assert!(args.dry_run);
                assert_eq!(args.survey_id, Some("316084387".to_string()));
                assert_eq!(args.mode, Some("full".to_string()));
            }
            _ => panic!("expected export command"),
        }
    }
}
