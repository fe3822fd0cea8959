//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "surveyor.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("Initializing Surveyor configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your survey ids and mappings", self.output);
                println!("  2. Set SURVEYMONKEY_ACCESS_TOKEN in your environment or .env file");
                println!("  3. Validate configuration: surveyor validate-config");
                println!("  4. Run export: surveyor export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Sample configuration template
    fn sample_config() -> &'static str {
        r#"# Surveyor Configuration File
# SurveyMonkey response export tool

[application]
log_level = "info"

[surveymonkey]
base_url = "https://api.surveymonkey.com"
access_token = "${SURVEYMONKEY_ACCESS_TOKEN}"
timeout_seconds = 30
page_size = 100

[surveymonkey.retry]
max_retries = 3
initial_delay_ms = 1000
max_delay_ms = 30000
backoff_multiplier = 2.0

[export]
mode = "incremental"  # incremental | full
dry_run = false

[sink]
target = "file"  # file | stdout
output_dir = "./export"

[state]
state_dir = "./state"

[logging]
file_enabled = false
file_path = "/var/log/surveyor"
file_rotation = "daily"

# One [[surveys]] block per survey to export.
# questions maps SurveyMonkey question ids to output field names,
# fields binds each field name to an answer shape
# (boolean, single_choice, multi_choice, rating).
[[surveys]]
id = "316084387"
title = "Customer Feedback"

[surveys.questions]
"513814057" = "recommend"
"513814058" = "satisfaction"

[surveys.fields]
recommend = "boolean"
satisfaction = "rating"
"#
    }
}
