//! State manager: the export cursor
//!
//! Wraps a [`WatermarkStore`] with the commit rules the export relies on:
//! idempotent re-commit of an equal timestamp, and loud rejection of any
//! attempt to move a watermark backwards.

use crate::adapters::state::WatermarkStore;
use crate::core::state::watermark::Watermark;
use crate::domain::ids::SurveyId;
use crate::domain::{Result, SurveyorError};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Export cursor over a watermark store
pub struct StateManager {
    storage: Arc<dyn WatermarkStore>,
}

impl StateManager {
    /// Create a new StateManager over a storage backend
    pub fn new(storage: Arc<dyn WatermarkStore>) -> Self {
        Self { storage }
    }

    /// Read the committed watermark for a survey
    ///
    /// `None` means the survey has never been exported; the caller should
    /// fetch the provider's full history (no time filter).
    pub async fn load_watermark(&self, survey_id: &SurveyId) -> Result<Option<Watermark>> {
        self.storage.load(survey_id).await
    }

    /// List all stored watermarks
    pub async fn all_watermarks(&self) -> Result<Vec<Watermark>> {
        self.storage.load_all().await
    }

    /// Commit a page checkpoint for a survey
    ///
    /// Idempotent for the stored timestamp: re-committing the same value (a
    /// crash-replayed page) is a no-op success. An older timestamp is a logic
    /// error and is rejected with [`SurveyorError::CheckpointRegression`]
    /// rather than silently applied.
    ///
    /// # Errors
    ///
    /// Returns `CheckpointRegression` for a backwards commit, or a state error
    /// if persistence fails.
    pub async fn commit_watermark(
        &self,
        survey_id: &SurveyId,
        timestamp: DateTime<Utc>,
        responses_in_page: u64,
    ) -> Result<Watermark> {
        let existing = self.storage.load(survey_id).await?;

        let mut watermark = match existing {
            Some(wm) => {
                if timestamp < wm.last_committed {
                    tracing::error!(
                        survey_id = %survey_id,
                        stored = %wm.last_committed,
                        attempted = %timestamp,
                        "Refusing to regress watermark"
                    );
                    return Err(SurveyorError::CheckpointRegression {
                        survey_id: survey_id.to_string(),
                        stored: wm.last_committed.to_rfc3339(),
                        attempted: timestamp.to_rfc3339(),
                    });
                }

                if timestamp == wm.last_committed {
                    tracing::debug!(
                        survey_id = %survey_id,
                        timestamp = %timestamp,
                        "Watermark already committed, skipping"
                    );
                    return Ok(wm);
                }

                wm
            }
            None => Watermark::new(survey_id.clone(), timestamp),
        };

        watermark.advance(timestamp, responses_in_page);
        self.storage.save(&watermark).await?;

        tracing::info!(
            survey_id = %survey_id,
            watermark = %watermark.last_committed,
            responses = responses_in_page,
            "Committed page checkpoint"
        );

        Ok(watermark)
    }
}
