//! Response transformer
//!
//! Applies a survey's schema to one raw response, producing the flat
//! [`NormalizedRecord`] handed to the sink. Side-effect free: a fresh record
//! per call, identical input → identical output.

use crate::core::transform::normalize::normalize_answer;
use crate::domain::{
    NormalizedRecord, QuestionId, RawResponse, ResponseId, SurveySchema, TransformError,
};

/// Transform one raw response into a normalized record
///
/// For each question in the response, in the provider's order: resolve the
/// field name from the schema mapping, extract the trimmed answer texts
/// (preferring "other" free text over the fixed choice label), and dispatch to
/// the field's bound normalizer. `survey_id` and `survey_response_id` are
/// always set as integers.
///
/// # Errors
///
/// - [`TransformError::UnknownQuestion`] when the response carries a question
///   id absent from the schema mapping; the answers are never silently
///   dropped.
/// - [`TransformError::MalformedAnswer`] from the rating normalizer.
/// - [`TransformError::InvalidResponse`] when the response id is not numeric.
pub fn transform_response(
    schema: &SurveySchema,
    response: &RawResponse,
) -> Result<NormalizedRecord, TransformError> {
    let response_id = ResponseId::new(response.id.clone())
        .map_err(TransformError::InvalidResponse)?;

    let mut record = NormalizedRecord::new(schema.id.as_i64(), response_id.as_i64());

    for question in response.questions() {
        let question_id = QuestionId::new(question.id.clone())
            .map_err(TransformError::InvalidResponse)?;

        let field = schema.field_for(&question_id).ok_or_else(|| {
            TransformError::UnknownQuestion {
                survey_id: schema.id.to_string(),
                question_id: question_id.to_string(),
            }
        })?;

        // Present for every mapped field, enforced at schema load
        let shape = schema.shape_for(field).ok_or_else(|| {
            TransformError::InvalidResponse(format!("field '{field}' has no bound shape"))
        })?;

        let answers = question.answer_texts();
        let value = normalize_answer(field, shape, &answers)?;
        record.set(field, value);
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AnswerShape, FieldValue, RawAnswer, RawQuestion, RawResponsePage, SurveyId,
    };
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    fn schema() -> SurveySchema {
        let questions = BTreeMap::from([
            (
                QuestionId::new("116254887").unwrap(),
                "languages".to_string(),
            ),
            (
                QuestionId::new("116259286").unwrap(),
                "editor".to_string(),
            ),
            (
                QuestionId::new("116261474").unwrap(),
                "satisfaction".to_string(),
            ),
            (
                QuestionId::new("116261824").unwrap(),
                "would_recommend".to_string(),
            ),
        ]);
        let shapes = BTreeMap::from([
            ("languages".to_string(), AnswerShape::MultiChoice),
            ("editor".to_string(), AnswerShape::SingleChoice),
            ("satisfaction".to_string(), AnswerShape::Rating),
            ("would_recommend".to_string(), AnswerShape::Boolean),
        ]);
        SurveySchema::new(
            SurveyId::new("316084387").unwrap(),
            "Programming Trends in 2023",
            questions,
            shapes,
        )
        .unwrap()
    }

    fn simple(text: &str) -> RawAnswer {
        RawAnswer {
            choice_id: Some("1".to_string()),
            other_id: None,
            text: None,
            simple_text: Some(text.to_string()),
        }
    }

    fn question(id: &str, answers: Vec<RawAnswer>) -> RawQuestion {
        RawQuestion {
            id: id.to_string(),
            heading: None,
            answers,
        }
    }

    fn response(id: &str, questions: Vec<RawQuestion>) -> RawResponse {
        RawResponse {
            id: id.to_string(),
            date_modified: Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap(),
            pages: vec![RawResponsePage {
                id: None,
                questions,
            }],
        }
    }

    #[test]
    fn test_transform_full_response() {
        let raw = response(
            "5007154402",
            vec![
                question(
                    "116254887",
                    vec![simple("Rust"), simple("TypeScript")],
                ),
                question("116259286", vec![simple("Helix")]),
                question("116261474", vec![simple("4")]),
                question("116261824", vec![simple("Yes")]),
            ],
        );

        let record = transform_response(&schema(), &raw).unwrap();
        assert_eq!(record.survey_id, 316084387);
        assert_eq!(record.survey_response_id, 5007154402);
        assert_eq!(
            record.get("languages"),
            Some(&FieldValue::TextList(vec![
                "Rust".into(),
                "TypeScript".into()
            ]))
        );
        assert_eq!(record.get("editor"), Some(&FieldValue::Text("Helix".into())));
        assert_eq!(record.get("satisfaction"), Some(&FieldValue::Integer(4)));
        assert_eq!(record.get("would_recommend"), Some(&FieldValue::Bool(true)));
    }

    #[test]
    fn test_transform_prefers_other_free_text() {
        let other = RawAnswer {
            choice_id: None,
            other_id: Some("116259299".to_string()),
            text: Some(" Lapce ".to_string()),
            simple_text: Some("Other (please specify)".to_string()),
        };
        let raw = response("1", vec![question("116259286", vec![other])]);

        let record = transform_response(&schema(), &raw).unwrap();
        assert_eq!(record.get("editor"), Some(&FieldValue::Text("Lapce".into())));
    }

    #[test]
    fn test_unknown_question_fails_fast() {
        let raw = response("1", vec![question("999", vec![simple("Rust")])]);

        let err = transform_response(&schema(), &raw).unwrap_err();
        match err {
            TransformError::UnknownQuestion {
                survey_id,
                question_id,
            } => {
                assert_eq!(survey_id, "316084387");
                assert_eq!(question_id, "999");
            }
            other => panic!("expected UnknownQuestion, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_rating_propagates() {
        let raw = response("1", vec![question("116261474", vec![simple("four")])]);
        let err = transform_response(&schema(), &raw).unwrap_err();
        assert!(matches!(err, TransformError::MalformedAnswer { .. }));
    }

    #[test]
    fn test_non_numeric_response_id_rejected() {
        let mut raw = response("1", vec![]);
        raw.id = "resp-1".to_string();
        let err = transform_response(&schema(), &raw).unwrap_err();
        assert!(matches!(err, TransformError::InvalidResponse(_)));
    }

    #[test]
    fn test_skipped_question_is_absent_not_error() {
        let raw = response("1", vec![question("116261824", vec![])]);
        let record = transform_response(&schema(), &raw).unwrap();
        assert_eq!(record.get("would_recommend"), Some(&FieldValue::Absent));
    }

    #[test]
    fn test_transform_is_deterministic() {
        let raw = response(
            "42",
            vec![question("116254887", vec![simple("Rust")])],
        );
        let s = schema();
        let first = transform_response(&s, &raw).unwrap();
        let second = transform_response(&s, &raw).unwrap();
        assert_eq!(first, second);
    }
}
