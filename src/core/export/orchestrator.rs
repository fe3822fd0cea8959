//! Multi-survey export orchestration
//!
//! Runs configured surveys one at a time so a single provider API budget is
//! never contended, isolates failures to the survey they occur in, and rolls
//! per-survey results into an [`ExportSummary`].

use crate::adapters::sink::ResponseSink;
use crate::adapters::surveymonkey::ResponseFetcher;
use crate::config::schema::ExportMode;
use crate::core::export::driver::{DriveOutcome, PaginationDriver};
use crate::core::export::summary::{ExportSummary, SurveyOutcome, SurveyReport};
use crate::core::state::manager::StateManager;
use crate::domain::schema::SurveySchema;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

/// Coordinates the export of all configured surveys
pub struct SurveyExportOrchestrator {
    fetcher: Arc<dyn ResponseFetcher>,
    sink: Arc<dyn ResponseSink>,
    state: Arc<StateManager>,
    mode: ExportMode,
    dry_run: bool,
    shutdown: watch::Receiver<bool>,
}

impl SurveyExportOrchestrator {
    /// Create an orchestrator over the given adapters
    pub fn new(
        fetcher: Arc<dyn ResponseFetcher>,
        sink: Arc<dyn ResponseSink>,
        state: Arc<StateManager>,
        mode: ExportMode,
        dry_run: bool,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            fetcher,
            sink,
            state,
            mode,
            dry_run,
            shutdown,
        }
    }

    /// Export every survey in order, one driver per survey
    ///
    /// A failed survey is reported and skipped, later surveys still run.
    /// A shutdown signal stops the run before the next survey starts.
    pub async fn run(&self, schemas: &[SurveySchema]) -> ExportSummary {
        let started = Instant::now();
        let mut summary = ExportSummary::new();

        tracing::info!(
            surveys = schemas.len(),
            mode = %self.mode,
            dry_run = self.dry_run,
            "Starting export run"
        );

        for schema in schemas {
            if *self.shutdown.borrow() {
                tracing::info!("Shutdown requested, skipping remaining surveys");
                break;
            }

            let driver = PaginationDriver::new(
                Arc::clone(&self.fetcher),
                Arc::clone(&self.sink),
                Arc::clone(&self.state),
                self.mode,
                self.dry_run,
                self.shutdown.clone(),
            );

            let report = match driver.drive(schema).await {
                Ok(result) => SurveyReport {
                    survey_id: schema.id.clone(),
                    outcome: match result.outcome {
                        DriveOutcome::Completed => SurveyOutcome::Completed,
                        DriveOutcome::RateLimited => SurveyOutcome::RateLimited,
                        DriveOutcome::Interrupted => SurveyOutcome::Interrupted,
                    },
                    pages_processed: result.stats.pages,
                    responses_exported: result.stats.responses,
                },
                Err(e) => {
                    tracing::error!(
                        survey_id = %schema.id,
                        error = %e,
                        "Survey export failed, continuing with remaining surveys"
                    );
                    SurveyReport {
                        survey_id: schema.id.clone(),
                        outcome: SurveyOutcome::Failed(e.to_string()),
                        pages_processed: 0,
                        responses_exported: 0,
                    }
                }
            };

            summary.add_report(report);
        }

        let summary = summary.with_duration(started.elapsed());
        summary.log_summary();
        summary
    }
}
