//! File sink
//!
//! Writes each normalized record to
//! `<output_dir>/<survey_id>/<survey_response_id>.json`. Idempotent by
//! construction: re-storing a response overwrites the same path with the same
//! content.

use super::ResponseSink;
use crate::domain::{NormalizedRecord, Result, SurveyorError};
use async_trait::async_trait;
use std::path::PathBuf;

/// Sink writing one JSON document per response
pub struct FileSink {
    output_dir: PathBuf,
}

impl FileSink {
    /// Create a file sink rooted at `output_dir`, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir).map_err(|e| {
            SurveyorError::Sink(format!(
                "Failed to create output directory {}: {e}",
                output_dir.display()
            ))
        })?;
        Ok(Self { output_dir })
    }

    fn record_path(&self, record: &NormalizedRecord) -> PathBuf {
        self.output_dir
            .join(record.survey_id.to_string())
            .join(format!("{}.json", record.survey_response_id))
    }
}

#[async_trait]
impl ResponseSink for FileSink {
    async fn store(&self, record: &NormalizedRecord) -> Result<()> {
        let path = self.record_path(record);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                SurveyorError::Sink(format!(
                    "Failed to create survey directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let contents = serde_json::to_vec_pretty(record)?;
        tokio::fs::write(&path, contents).await.map_err(|e| {
            SurveyorError::Sink(format!("Failed to write record {}: {e}", path.display()))
        })?;

        Ok(())
    }
}
