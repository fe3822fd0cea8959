//! Provider-native survey response models
//!
//! These types mirror the SurveyMonkey v3 bulk responses payload
//! (`/v3/surveys/{id}/responses/bulk`). A [`RawResponse`] is transient: the
//! pagination driver owns it for the duration of one transform call and
//! discards it afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One batch of responses returned by a single paginated fetch call
///
/// `next_url` carries the provider's absolute pagination link; `None` is the
/// terminal state for the survey's page walk.
#[derive(Debug, Clone)]
pub struct ResponsePage {
    /// Responses in the page, in provider order
    pub responses: Vec<RawResponse>,

    /// Absolute URL of the next page, if any
    pub next_url: Option<String>,
}

impl ResponsePage {
    /// Maximum `date_modified` across the page's responses
    ///
    /// `None` for an empty page: there is nothing to advance the watermark to.
    pub fn max_date_modified(&self) -> Option<DateTime<Utc>> {
        self.responses.iter().map(|r| r.date_modified).max()
    }
}

/// One complete survey response in the provider's native structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawResponse {
    /// Response id (decimal digit string)
    pub id: String,

    /// Last-modified timestamp, drives the incremental watermark
    pub date_modified: DateTime<Utc>,

    /// Survey pages, each holding the questions answered on it
    #[serde(default)]
    pub pages: Vec<RawResponsePage>,
}

impl RawResponse {
    /// Iterate all questions across the response's pages, in the given order
    pub fn questions(&self) -> impl Iterator<Item = &RawQuestion> {
        self.pages.iter().flat_map(|p| p.questions.iter())
    }
}

/// One page within a single response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawResponsePage {
    /// Page id
    #[serde(default)]
    pub id: Option<String>,

    /// Questions answered on this page, in provider order
    #[serde(default)]
    pub questions: Vec<RawQuestion>,
}

/// One answered question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawQuestion {
    /// Question id, the key into the schema's question→field mapping
    pub id: String,

    /// Question heading (informational)
    #[serde(default)]
    pub heading: Option<String>,

    /// Answers in the order the respondent gave them
    #[serde(default)]
    pub answers: Vec<RawAnswer>,
}

impl RawQuestion {
    /// Extract the trimmed raw answer texts for this question
    ///
    /// For an "other" option the respondent's free text (`text`) supersedes
    /// the fixed `simple_text` label; otherwise `simple_text` is used.
    /// Answers carrying neither are skipped.
    pub fn answer_texts(&self) -> Vec<String> {
        self.answers
            .iter()
            .filter_map(|a| a.raw_text())
            .map(|t| t.trim().to_string())
            .collect()
    }
}

/// One answer to a question
///
/// `other_id` marks the answer as an "other/free-text" option, in which case
/// `text` holds what the respondent typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAnswer {
    /// Choice id, when the answer is a fixed choice
    #[serde(default)]
    pub choice_id: Option<String>,

    /// Present when this answer is an "other" option
    #[serde(default)]
    pub other_id: Option<String>,

    /// Free text typed by the respondent (for "other" answers)
    #[serde(default)]
    pub text: Option<String>,

    /// Resolved display text of a fixed choice
    #[serde(default)]
    pub simple_text: Option<String>,
}

impl RawAnswer {
    /// The raw text of this answer, preferring "other" free text
    pub fn raw_text(&self) -> Option<&str> {
        if self.other_id.is_some() {
            self.text.as_deref()
        } else {
            self.simple_text.as_deref()
        }
    }
}
