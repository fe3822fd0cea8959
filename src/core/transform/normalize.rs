//! Answer normalizers
//!
//! Pure functions mapping the ordered raw answer strings of one question to a
//! typed [`FieldValue`], selected by the field's declared [`AnswerShape`].
//!
//! Normalizers are total except for the documented rating-parse failure.
//! Blank or ambiguous input produces [`FieldValue::Absent`] rather than an
//! error: exports tolerate skipped questions, and an unmapped boolean answer
//! ("maybe") is a blank, not a data bug.

use crate::domain::{AnswerShape, FieldValue, TransformError};

/// Normalize a question's answers to the value for its declared shape
///
/// `answers` must already be trimmed (see `RawQuestion::answer_texts`).
///
/// # Errors
///
/// Returns [`TransformError::MalformedAnswer`] only for a non-numeric rating
/// answer. Every other input normalizes, possibly to `Absent`.
pub fn normalize_answer(
    field: &str,
    shape: AnswerShape,
    answers: &[String],
) -> Result<FieldValue, TransformError> {
    match shape {
        AnswerShape::Boolean => Ok(normalize_boolean(answers)),
        AnswerShape::SingleChoice => Ok(normalize_single_choice(answers)),
        AnswerShape::MultiChoice => Ok(normalize_multi_choice(answers)),
        AnswerShape::Rating => normalize_rating(field, answers),
    }
}

/// First answer mapped via the fixed yes/no table, case-insensitive
///
/// Anything outside the table is Absent, never an error.
fn normalize_boolean(answers: &[String]) -> FieldValue {
    match answers.first() {
        Some(first) => match first.to_lowercase().as_str() {
            "yes" => FieldValue::Bool(true),
            "no" => FieldValue::Bool(false),
            _ => FieldValue::Absent,
        },
        None => FieldValue::Absent,
    }
}

/// First answer verbatim
fn normalize_single_choice(answers: &[String]) -> FieldValue {
    match answers.first() {
        Some(first) => FieldValue::Text(first.clone()),
        None => FieldValue::Absent,
    }
}

/// Full ordered answer sequence verbatim
fn normalize_multi_choice(answers: &[String]) -> FieldValue {
    if answers.is_empty() {
        FieldValue::Absent
    } else {
        FieldValue::TextList(answers.to_vec())
    }
}

/// First answer parsed as an integer
fn normalize_rating(field: &str, answers: &[String]) -> Result<FieldValue, TransformError> {
    match answers.first() {
        Some(first) => first
            .parse::<i64>()
            .map(FieldValue::Integer)
            .map_err(|_| TransformError::MalformedAnswer {
                field: field.to_string(),
                reason: format!("expected an integer rating, got '{first}'"),
            }),
        None => Ok(FieldValue::Absent),
    }
}
