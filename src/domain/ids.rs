//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for SurveyMonkey identifiers.
//! Each type ensures type safety and provides validation for format compliance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Survey identifier newtype wrapper
///
/// Represents a unique identifier for a survey. SurveyMonkey survey ids are
/// decimal digit strings, and the exporter relies on that to emit `survey_id`
/// as an integer in normalized records.
///
/// # Examples
///
/// ```
/// use surveyor::domain::ids::SurveyId;
/// use std::str::FromStr;
///
/// let survey_id = SurveyId::from_str("316084387").unwrap();
/// assert_eq!(survey_id.as_str(), "316084387");
/// assert_eq!(survey_id.as_i64(), 316084387);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SurveyId(String);

impl SurveyId {
    /// Creates a new SurveyId from a string
    ///
    /// # Arguments
    ///
    /// * `id` - The survey identifier string
    ///
    /// # Returns
    ///
    /// Returns `Ok(SurveyId)` if the ID is a non-empty digit string, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Survey ID cannot be empty".to_string());
        }
        if !id.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!(
                "Survey ID must be a decimal digit string, got: {id}"
            ));
        }
        if id.parse::<i64>().is_err() {
            return Err(format!("Survey ID is out of i64 range: {id}"));
        }
        Ok(Self(id))
    }

    /// Returns the survey ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the survey ID as an integer
    ///
    /// Infallible because construction validated the digit-string format and
    /// the i64 range.
    pub fn as_i64(&self) -> i64 {
        self.0.parse().unwrap_or(0)
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SurveyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SurveyId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for SurveyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Response identifier newtype wrapper
///
/// Represents a unique identifier for one survey response, as returned by the
/// bulk responses endpoint. Digit-string format, like [`SurveyId`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResponseId(String);

impl ResponseId {
    /// Creates a new ResponseId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Response ID cannot be empty".to_string());
        }
        if !id.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!(
                "Response ID must be a decimal digit string, got: {id}"
            ));
        }
        if id.parse::<i64>().is_err() {
            return Err(format!("Response ID is out of i64 range: {id}"));
        }
        Ok(Self(id))
    }

    /// Returns the response ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the response ID as an integer
    pub fn as_i64(&self) -> i64 {
        self.0.parse().unwrap_or(0)
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ResponseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ResponseId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ResponseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Question identifier newtype wrapper
///
/// Keys the per-survey question→field mapping. No digit restriction: question
/// ids come from configuration and the provider, and only need to match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a new QuestionId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Question ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the question ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for QuestionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
