//! Watermark persistence adapters
//!
//! Defines the [`WatermarkStore`] seam the state manager depends on, and the
//! file-backed implementation used in production.

pub mod file;

use crate::core::state::watermark::Watermark;
use crate::domain::ids::SurveyId;
use crate::domain::Result;
use async_trait::async_trait;

pub use file::FileWatermarkStore;

/// Durable key-value persistence for watermarks, keyed by survey id
///
/// Access for a given survey is externally serialized: the orchestrator runs
/// one driver per survey at a time, so implementations need not coordinate
/// concurrent writers for the same key.
#[async_trait]
pub trait WatermarkStore: Send + Sync {
    /// Load the watermark for a survey
    ///
    /// Returns `Ok(None)` on the first-ever export of the survey.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreadable or the stored document is
    /// corrupt.
    async fn load(&self, survey_id: &SurveyId) -> Result<Option<Watermark>>;

    /// Persist a watermark document
    ///
    /// Must be atomic: a crash mid-save leaves either the old or the new
    /// document, never a torn one.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written durably.
    async fn save(&self, watermark: &Watermark) -> Result<()>;

    /// Load all stored watermarks
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be enumerated.
    async fn load_all(&self) -> Result<Vec<Watermark>>;
}
