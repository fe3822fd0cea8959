//! Status command implementation
//!
//! This module implements the `status` command for displaying per-survey
//! export watermarks.

use crate::adapters::state::FileWatermarkStore;
use crate::config::load_config;
use crate::core::state::manager::StateManager;
use clap::Args;
use std::sync::Arc;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Filter by survey id
    #[arg(long)]
    pub survey_id: Option<String>,
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Checking export status");

        println!("Export Status");
        println!();

        // Load configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Open the watermark store
        let store = match FileWatermarkStore::new(&config.state.state_dir) {
            Ok(s) => Arc::new(s),
            Err(e) => {
                println!("Failed to open state directory");
                println!("   Error: {e}");
                return Ok(5); // Fatal error exit code
            }
        };
        let state_manager = StateManager::new(store);

        // Load all watermarks
        let watermarks = match state_manager.all_watermarks().await {
            Ok(w) => w,
            Err(e) => {
                println!("Failed to load watermarks");
                println!("   Error: {e}");
                return Ok(5);
            }
        };

        if watermarks.is_empty() {
            println!("No export history found.");
            println!("Run 'surveyor export' to start exporting data.");
            return Ok(0);
        }

        // Filter watermarks if requested
        let filtered: Vec<_> = watermarks
            .iter()
            .filter(|w| match &self.survey_id {
                Some(id) => w.survey_id.as_str() == id,
                None => true,
            })
            .collect();

        if filtered.is_empty() {
            println!("No watermarks match the specified filter.");
            return Ok(0);
        }

        // Display watermarks in table format
        println!("Found {} watermark(s):", filtered.len());
        println!();
        println!(
            "{:<15} {:<25} {:<10} {:<12} {:<25}",
            "Survey ID", "Last Committed", "Pages", "Responses", "Updated"
        );
        println!("{}", "-".repeat(90));

        for watermark in filtered {
            println!(
                "{:<15} {:<25} {:<10} {:<12} {:<25}",
                watermark.survey_id.as_str(),
                watermark.last_committed.format("%Y-%m-%d %H:%M:%S"),
                watermark.pages_committed,
                watermark.responses_exported,
                watermark.updated_at.format("%Y-%m-%d %H:%M:%S"),
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
    fn test_status_args_defaults() {
        let args = StatusArgs { survey_id: None };
        assert!(args.survey_id.is_none());
    }

    #[test]
    fn test_status_args_with_filter() {
        let args = StatusArgs {
            survey_id: Some("316084387".to_string()),
        };
        assert_eq!(args.survey_id, Some("316084387".to_string()));
    }
}
