//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Surveyor configuration file.

use crate::config::load_config;
use crate::config::schema::SinkTarget;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing, so a successful load is a valid config
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Surface schema construction errors that validation defers
        let schemas = match config.survey_schemas() {
            Ok(s) => s,
            Err(e) => {
                println!("Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  SurveyMonkey API: {}", config.surveymonkey.base_url);
        println!("  Page Size: {}", config.surveymonkey.page_size);
        println!("  Export Mode: {}", config.export.mode);
        match config.sink.target {
            SinkTarget::File => {
                println!("  Sink: file ({})", config.sink.output_dir);
            }
            SinkTarget::Stdout => {
                println!("  Sink: stdout");
            }
        }
        println!("  State Directory: {}", config.state.state_dir);
        println!("  Surveys: {}", schemas.len());
        for schema in &schemas {
            println!(
                "    {} \"{}\" ({} questions)",
                schema.id,
                schema.title,
                schema.question_fields.len()
            );
        }
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_creation() {
        let args = ValidateArgs {};
        let _ = format!("{args:?}");
    }
}
