//! Domain models and types for Surveyor.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`SurveyId`], [`ResponseId`], [`QuestionId`])
//! - **Provider models** ([`RawResponse`], [`ResponsePage`])
//! - **Normalized output** ([`NormalizedRecord`], [`FieldValue`])
//! - **Schema contract** ([`SurveySchema`], [`AnswerShape`])
//! - **Error types** ([`SurveyorError`], [`ProviderError`], [`TransformError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Surveyor uses the newtype pattern for identifiers to prevent mixing
//! different ID kinds:
//!
//! ```rust
//! use surveyor::domain::{SurveyId, ResponseId};
//!
//! # fn example() -> Result<(), String> {
//! let survey_id = SurveyId::new("316084387")?;
//! let response_id = ResponseId::new("5007154402")?;
//!
//! // This won't compile - type safety prevents mixing IDs
//! // let wrong: SurveyId = response_id;  // Compile error!
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod record;
pub mod response;
pub mod result;
pub mod schema;

// Re-export commonly used types for convenience
pub use errors::{ProviderError, SurveyorError, TransformError};
pub use ids::{QuestionId, ResponseId, SurveyId};
pub use record::{FieldValue, NormalizedRecord};
pub use response::{RawAnswer, RawQuestion, RawResponse, RawResponsePage, ResponsePage};
pub use result::Result;
pub use schema::{AnswerShape, SurveySchema};
