//! File-backed watermark store
//!
//! Stores one JSON document per survey under the configured state directory:
//! `<state_dir>/<survey_id>.json`. Saves go through a temp-file rename so a
//! crash mid-write never leaves a torn document.

use super::WatermarkStore;
use crate::core::state::watermark::Watermark;
use crate::domain::ids::SurveyId;
use crate::domain::{Result, SurveyorError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Watermark store persisting JSON documents on the local filesystem
pub struct FileWatermarkStore {
    dir: PathBuf,
}

impl FileWatermarkStore {
    /// Create a store rooted at `dir`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            SurveyorError::State(format!(
                "Failed to create state directory {}: {e}",
                dir.display()
            ))
        })?;
        Ok(Self { dir })
    }

    fn document_path(&self, survey_id: &SurveyId) -> PathBuf {
        self.dir.join(format!("{survey_id}.json"))
    }
}

#[async_trait]
impl WatermarkStore for FileWatermarkStore {
    async fn load(&self, survey_id: &SurveyId) -> Result<Option<Watermark>> {
        let path = self.document_path(survey_id);

        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SurveyorError::State(format!(
                    "Failed to read watermark {}: {e}",
                    path.display()
                )))
            }
        };

        let watermark: Watermark = serde_json::from_str(&contents).map_err(|e| {
            SurveyorError::State(format!(
                "Corrupt watermark document {}: {e}",
                path.display()
            ))
        })?;

        Ok(Some(watermark))
    }

    async fn save(&self, watermark: &Watermark) -> Result<()> {
        let path = self.document_path(&watermark.survey_id);
        let tmp = path.with_extension("json.tmp");

        let contents = serde_json::to_string_pretty(watermark)?;

        tokio::fs::write(&tmp, contents.as_bytes())
            .await
            .map_err(|e| {
                SurveyorError::State(format!(
                    "Failed to write watermark {}: {e}",
                    tmp.display()
                ))
            })?;

        // Rename is atomic on the same filesystem
        tokio::fs::rename(&tmp, &path).await.map_err(|e| {
            SurveyorError::State(format!(
                "Failed to replace watermark {}: {e}",
                path.display()
            ))
        })?;

        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<Watermark>> {
        let mut watermarks = Vec::new();

        let mut entries = tokio::fs::read_dir(&self.dir).await.map_err(|e| {
            SurveyorError::State(format!(
                "Failed to list state directory {}: {e}",
                self.dir.display()
            ))
        })?;

        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            SurveyorError::State(format!("Failed to read state directory entry: {e}"))
        })? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(watermark) = load_document(&path).await? {
                watermarks.push(watermark);
            }
        }

        watermarks.sort_by(|a, b| a.survey_id.as_str().cmp(b.survey_id.as_str()));
        Ok(watermarks)
    }
}

async fn load_document(path: &Path) -> Result<Option<Watermark>> {
    let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
        SurveyorError::State(format!("Failed to read watermark {}: {e}", path.display()))
    })?;

    match serde_json::from_str(&contents) {
        Ok(watermark) => Ok(Some(watermark)),
        Err(e) => {
            // A foreign file in the state dir shouldn't abort a status listing
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Skipping unreadable watermark document"
            );
            Ok(None)
        }
    }
}
