//! Page-by-page export driver
//!
//! Walks one survey's bulk response listing from the watermark forward.
//! Each page is fully transformed and stored before the watermark is
//! committed once with the page's maximum `date_modified`, so a crash or
//! rate-limit stop can only re-deliver the in-flight page, never skip one.

use crate::adapters::sink::ResponseSink;
use crate::adapters::surveymonkey::ResponseFetcher;
use crate::config::schema::ExportMode;
use crate::core::state::manager::StateManager;
use crate::core::transform::transformer::transform_response;
use crate::domain::errors::{ProviderError, SurveyorError};
use crate::domain::result::Result;
use crate::domain::schema::SurveySchema;
use std::sync::Arc;
use tokio::sync::watch;

/// How a driver run ended, short of a hard failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveOutcome {
    /// Followed `links.next` until the provider returned none
    Completed,
    /// Stopped because the provider's API budget is spent
    RateLimited,
    /// Stopped between pages on a shutdown signal
    Interrupted,
}

/// Counters for a single driver run
#[derive(Debug, Clone, Copy, Default)]
pub struct DriveStats {
    /// Pages fully processed and checkpointed
    pub pages: u64,
    /// Responses transformed and stored
    pub responses: u64,
}

/// Result of driving one survey to a terminal state
#[derive(Debug, Clone)]
pub struct DriveResult {
    pub outcome: DriveOutcome,
    pub stats: DriveStats,
}

/// Drives the fetch, transform, store, checkpoint loop for one survey
pub struct PaginationDriver {
    fetcher: Arc<dyn ResponseFetcher>,
    sink: Arc<dyn ResponseSink>,
    state: Arc<StateManager>,
    mode: ExportMode,
    dry_run: bool,
    shutdown: watch::Receiver<bool>,
}

impl PaginationDriver {
    /// Create a driver over the given adapters
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

    /// Export one survey until completion, rate limit, shutdown or error
    ///
    /// The watermark is never advanced past work that has not been stored,
    /// and a page that fails mid-store leaves the watermark where it was.
    pub async fn drive(&self, schema: &SurveySchema) -> Result<DriveResult> {
        let since = match self.mode {
            ExportMode::Incremental => self
                .state
                .load_watermark(&schema.id)
                .await?
                .map(|w| w.last_committed),
            ExportMode::Full => None,
        };

        match since {
            Some(ts) => tracing::info!(
                survey_id = %schema.id,
                since = %ts.to_rfc3339(),
                "Starting incremental export from watermark"
            ),
            None => tracing::info!(
                survey_id = %schema.id,
                "Starting export from the beginning"
            ),
        }

        let mut stats = DriveStats::default();
        let mut next_url = self.fetcher.bulk_url(&schema.id, since);

        loop {
            if *self.shutdown.borrow() {
                tracing::info!(survey_id = %schema.id, "Shutdown requested, stopping between pages");
                return Ok(DriveResult {
                    outcome: DriveOutcome::Interrupted,
                    stats,
                });
            }

            let page = match self.fetcher.fetch_page(&next_url).await {
                Ok(page) => page,
                Err(SurveyorError::Provider(ProviderError::RateLimitExhausted { retry_after })) => {
                    tracing::warn!(
                        survey_id = %schema.id,
                        retry_after = retry_after.as_deref().unwrap_or("unknown"),
                        "API budget exhausted, stopping at last committed watermark"
                    );
                    return Ok(DriveResult {
                        outcome: DriveOutcome::RateLimited,
                        stats,
                    });
                }
                Err(e) => return Err(e),
            };

            tracing::debug!(
                survey_id = %schema.id,
                responses = page.responses.len(),
                has_next = page.next_url.is_some(),
                "Fetched response page"
            );

            for raw in &page.responses {
                let record = transform_response(schema, raw)?;
                if !self.dry_run {
                    self.sink.store(&record).await?;
                }
                tracing::info!(
                    survey_id = %schema.id,
                    response_id = record.survey_response_id,
                    dry_run = self.dry_run,
                    "Exported survey response"
                );
                stats.responses += 1;
            }

            // An empty page carries no timestamps, so there is nothing to commit.
            if let Some(max_modified) = page.max_date_modified() {
                if !self.dry_run {
                    self.state
                        .commit_watermark(&schema.id, max_modified, page.responses.len() as u64)
                        .await?;
                }
                stats.pages += 1;
            }

            match page.next_url {
                Some(url) => next_url = url,
                None => {
                    return Ok(DriveResult {
                        outcome: DriveOutcome::Completed,
                        stats,
                    })
                }
            }
        }
    }
}
