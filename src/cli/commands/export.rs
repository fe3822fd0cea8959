//! Export command implementation
//!
//! This module implements the `export` command for exporting survey
//! responses from SurveyMonkey to the configured sink.

use crate::adapters::sink::create_sink;
use crate::adapters::state::FileWatermarkStore;
use crate::adapters::surveymonkey::client::SurveyMonkeyClient;
use crate::config::load_config;
use crate::config::schema::ExportMode;
use crate::core::export::{SurveyExportOrchestrator, SurveyOutcome};
use crate::core::state::manager::StateManager;
use clap::Args;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::watch;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Dry run mode - fetch and transform without storing or checkpointing
    #[arg(long)]
    pub dry_run: bool,

    /// Restrict the run to specific survey id(s) (comma-separated)
    #[arg(long)]
    pub survey_id: Option<String>,

    /// Override export mode (full or incremental)
    #[arg(long)]
    pub mode: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        // Load configuration
        let mut config = load_config(config_path)?;

        // Apply CLI overrides
        if let Some(mode) = &self.mode {
            match ExportMode::from_str(mode) {
                Ok(parsed) => {
                    tracing::info!(mode = %parsed, "Overriding export mode from CLI");
                    config.export.mode = parsed;
                }
                Err(e) => {
                    tracing::error!(error = %e, "Invalid export mode");
                    eprintln!("{e}");
                    return Ok(2); // Configuration error exit code
                }
            }
        }

        if let Some(survey_ids) = &self.survey_id {
            let ids: Vec<String> = survey_ids
                .split(',')
                .map(|s| s.trim().to_string())
                .collect();
            let unknown: Vec<&String> = ids
                .iter()
                .filter(|id| !config.surveys.iter().any(|s| &s.id == *id))
                .collect();
            if !unknown.is_empty() {
                tracing::error!(survey_ids = ?unknown, "Survey ids not present in configuration");
                eprintln!("Survey id(s) not present in configuration: {unknown:?}");
                return Ok(2);
            }
            tracing::info!(survey_ids = ?ids, "Restricting run to surveys from CLI");
            config.surveys.retain(|s| ids.contains(&s.id));
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.export.dry_run = true;
        }

        // Validate configuration
        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let schemas = match config.survey_schemas() {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Survey schema construction failed");
                eprintln!("Survey schema construction failed: {e}");
                return Ok(2);
            }
        };

        if config.export.dry_run {
            tracing::info!("Dry run mode enabled - no data will be written");
            println!("DRY RUN - responses are fetched and transformed but not stored");
            println!();
        }

        // Wire the pipeline
        let fetcher = match SurveyMonkeyClient::new(config.surveymonkey.clone()) {
            Ok(c) => Arc::new(c),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create SurveyMonkey client");
                eprintln!("Failed to create SurveyMonkey client: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        let sink = match create_sink(&config.sink) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create sink");
                eprintln!("Failed to create sink: {e}");
                return Ok(5);
            }
        };

        let store = match FileWatermarkStore::new(&config.state.state_dir) {
            Ok(s) => Arc::new(s),
            Err(e) => {
                tracing::error!(error = %e, "Failed to open state directory");
                eprintln!("Failed to open state directory: {e}");
                return Ok(5);
            }
        };
        let state = Arc::new(StateManager::new(store));

        let orchestrator = SurveyExportOrchestrator::new(
            fetcher,
            sink,
            state,
            config.export.mode,
            config.export.dry_run,
            shutdown_signal,
        );

        println!("Starting export of {} survey(s)...", schemas.len());
        println!();

        let summary = orchestrator.run(&schemas).await;

        // Display summary
        println!();
        println!("Export Summary:");
        for report in &summary.reports {
            let status = match &report.outcome {
                SurveyOutcome::Completed => "completed".to_string(),
                SurveyOutcome::RateLimited => "rate limited (resumable)".to_string(),
                SurveyOutcome::Interrupted => "interrupted (resumable)".to_string(),
                SurveyOutcome::Failed(e) => format!("FAILED: {e}"),
            };
            println!(
                "  {}: {} ({} pages, {} responses)",
                report.survey_id, status, report.pages_processed, report.responses_exported
            );
        }
        println!("  Total responses: {}", summary.total_responses());
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!();

        if summary.any_failed() {
            println!("Export completed with failures");
        } else {
            println!("Export completed");
        }

        Ok(summary.exit_code())
    }
}
