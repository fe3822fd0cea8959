//! SurveyMonkey provider adapter
//!
//! The [`ResponseFetcher`] trait is the seam the pagination driver depends
//! on; [`SurveyMonkeyClient`] is the production implementation over the v3
//! REST API.

pub mod client;
pub mod models;

use crate::domain::ids::SurveyId;
use crate::domain::{ResponsePage, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use client::SurveyMonkeyClient;

/// Fetch collaborator for paginated survey responses
#[async_trait]
pub trait ResponseFetcher: Send + Sync {
    /// Build the initial bulk-responses URL for a survey
    ///
    /// `since` filters to responses modified after the watermark; `None`
    /// requests the provider's full history.
    fn bulk_url(&self, survey_id: &SurveyId, since: Option<DateTime<Utc>>) -> String;

    /// Fetch one page of responses by absolute URL
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::RateLimitExhausted` when the API budget is
    /// spent, or another provider error after bounded retry.
    async fn fetch_page(&self, url: &str) -> Result<ResponsePage>;
}
