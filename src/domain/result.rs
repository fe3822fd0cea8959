//! Result type alias for Surveyor
//!
//! This module provides a convenient Result type alias that uses
//! SurveyorError as the error type.

use super::errors::SurveyorError;

/// Result type alias for Surveyor operations
///
/// # Examples
///
/// ```
/// use surveyor::domain::result::Result;
/// use surveyor::domain::errors::SurveyorError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SurveyorError::Export("page processing aborted".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SurveyorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::SurveyorError;

    #[test]
    fn test_result_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(SurveyorError::State("missing watermark dir".to_string()));
        assert!(result.is_err());
    }
}
