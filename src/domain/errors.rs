//! Domain error types
//!
//! This module defines the error hierarchy for Surveyor. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Surveyor error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum SurveyorError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// SurveyMonkey provider errors
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Response transformation errors
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Storage sink errors
    #[error("Sink error: {0}")]
    Sink(String),

    /// State management errors
    #[error("State management error: {0}")]
    State(String),

    /// Watermark regression: a commit attempted to move a survey's watermark
    /// backwards. This is a caller/logic error, never applied silently.
    #[error(
        "Checkpoint regression for survey {survey_id}: stored watermark {stored} is newer than attempted {attempted}"
    )]
    CheckpointRegression {
        survey_id: String,
        stored: String,
        attempted: String,
    },

    /// Export process errors
    #[error("Export error: {0}")]
    Export(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// SurveyMonkey-specific errors
///
/// Errors that occur when talking to the SurveyMonkey API. These errors don't
/// expose the underlying HTTP client types.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The daily API call budget is spent. An expected, graceful stop: the
    /// export resumes from the last committed watermark on the next run.
    #[error("SurveyMonkey rate limit exhausted{}", retry_after.as_deref().map(|r| format!(", retry after: {r}")).unwrap_or_default())]
    RateLimitExhausted { retry_after: Option<String> },

    /// Failed to connect to the API
    #[error("Failed to connect to SurveyMonkey: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Authentication failed (401/403)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (other 4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Response body could not be decoded into the expected wire shape
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Whether a bounded retry may clear this error
    ///
    /// Rate-limit exhaustion and 4xx failures are never transient; the daily
    /// budget resets on the provider's schedule, not ours.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::Timeout(_) | Self::ServerError { .. }
        )
    }
}

/// Transformation-specific errors
///
/// Schema/data mismatches surfaced by the response transformer. Fatal to the
/// current page; the survey loop reports them and moves on.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A fetched response carried a question id the schema does not map
    #[error("Unknown question id {question_id} in survey {survey_id}")]
    UnknownQuestion {
        survey_id: String,
        question_id: String,
    },

    /// An answer could not be normalized to its declared shape
    #[error("Malformed answer for field '{field}': {reason}")]
    MalformedAnswer { field: String, reason: String },

    /// The raw response is structurally invalid (bad id, bad timestamp)
    #[error("Invalid raw response: {0}")]
    InvalidResponse(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for SurveyorError {
    fn from(err: std::io::Error) -> Self {
        SurveyorError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SurveyorError {
    fn from(err: serde_json::Error) -> Self {
        SurveyorError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SurveyorError {
    fn from(err: toml::de::Error) -> Self {
        SurveyorError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surveyor_error_display() {
        let err = SurveyorError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_provider_error_conversion() {
        let provider_err = ProviderError::ConnectionFailed("Network error".to_string());
        let err: SurveyorError = provider_err.into();
        assert!(matches!(err, SurveyorError::Provider(_)));
    }

    #[test]
    fn test_transform_error_conversion() {
        let transform_err = TransformError::UnknownQuestion {
            survey_id: "316084387".to_string(),
            question_id: "999".to_string(),
        };
        let err: SurveyorError = transform_err.into();
        assert!(matches!(err, SurveyorError::Transform(_)));
        assert!(err.to_string().contains("999"));
    }

    #[test]
    fn test_rate_limit_display_with_retry_after() {
        let err = ProviderError::RateLimitExhausted {
            retry_after: Some("86400".to_string()),
        };
        assert!(err.to_string().contains("retry after: 86400"));

        let err = ProviderError::RateLimitExhausted { retry_after: None };
        assert_eq!(err.to_string(), "SurveyMonkey rate limit exhausted");
    }

    #[test]
    fn test_transient_classification() {
        assert!(ProviderError::Timeout("30s".into()).is_transient());
        assert!(ProviderError::ServerError {
            status: 503,
            message: "unavailable".into()
        }
        .is_transient());
        assert!(!ProviderError::RateLimitExhausted { retry_after: None }.is_transient());
        assert!(!ProviderError::AuthenticationFailed("bad token".into()).is_transient());
        assert!(!ProviderError::ClientError {
            status: 404,
            message: "not found".into()
        }
        .is_transient());
    }

    #[test]
    fn test_checkpoint_regression_display() {
        let err = SurveyorError::CheckpointRegression {
            survey_id: "316084387".to_string(),
            stored: "2023-05-02T10:00:00Z".to_string(),
            attempted: "2023-05-01T10:00:00Z".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Checkpoint regression"));
        assert!(msg.contains("2023-05-02T10:00:00Z"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: SurveyorError = io_err.into();
        assert!(matches!(err, SurveyorError::Io(_)));
    }

    #[test]
    fn test_surveyor_error_implements_std_error() {
        let err = SurveyorError::Export("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
