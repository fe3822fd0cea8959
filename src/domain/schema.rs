//! Survey schema: the static per-survey transformation contract
//!
//! A [`SurveySchema`] maps provider question ids to normalized field names and
//! binds each field to the [`AnswerShape`] that selects its normalizer. Both
//! mappings are supplied in configuration and validated eagerly at load time:
//! a field without a bound shape fails startup, not the first matching
//! response.

use crate::domain::ids::{QuestionId, SurveyId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Answer-format category, determines which normalizer applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerShape {
    /// Yes/no answer mapped to a boolean
    Boolean,
    /// Single choice kept verbatim
    SingleChoice,
    /// Ordered multi-choice kept verbatim
    MultiChoice,
    /// Integer rating
    Rating,
}

impl fmt::Display for AnswerShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Boolean => "boolean",
            Self::SingleChoice => "single_choice",
            Self::MultiChoice => "multi_choice",
            Self::Rating => "rating",
        };
        write!(f, "{name}")
    }
}

impl FromStr for AnswerShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "boolean" => Ok(Self::Boolean),
            "single_choice" => Ok(Self::SingleChoice),
            "multi_choice" | "multichoice" => Ok(Self::MultiChoice),
            "rating" => Ok(Self::Rating),
            _ => Err(format!(
                "Invalid answer shape '{s}'. Must be one of: boolean, single_choice, multi_choice, rating"
            )),
        }
    }
}

/// Immutable per-survey schema
///
/// Invariant: every field named in `question_fields` has a shape bound in
/// `field_shapes`, enforced by [`SurveySchema::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveySchema {
    /// Survey id
    pub id: SurveyId,

    /// Survey title (informational)
    pub title: String,

    /// Question id → normalized field name
    pub question_fields: BTreeMap<QuestionId, String>,

    /// Field name → answer shape, resolved once at schema load
    pub field_shapes: BTreeMap<String, AnswerShape>,
}

impl SurveySchema {
    /// Build a schema, validating the field→shape bindings eagerly
    ///
    /// # Errors
    ///
    /// Returns an error if any mapped field lacks a bound shape, or if a
    /// shape is bound to a field no question maps to.
    pub fn new(
        id: SurveyId,
        title: impl Into<String>,
        question_fields: BTreeMap<QuestionId, String>,
        field_shapes: BTreeMap<String, AnswerShape>,
    ) -> Result<Self, String> {
        if question_fields.is_empty() {
            return Err(format!("survey {id}: question mapping cannot be empty"));
        }

        for field in question_fields.values() {
            if !field_shapes.contains_key(field) {
                return Err(format!(
                    "survey {id}: field '{field}' has no bound answer shape"
                ));
            }
        }

        for field in field_shapes.keys() {
            if !question_fields.values().any(|f| f == field) {
                return Err(format!(
                    "survey {id}: shape bound for '{field}' but no question maps to it"
                ));
            }
        }

        Ok(Self {
            id,
            title: title.into(),
            question_fields,
            field_shapes,
        })
    }

    /// Field name mapped to a question id, if any
    pub fn field_for(&self, question_id: &QuestionId) -> Option<&str> {
        self.question_fields.get(question_id).map(String::as_str)
    }

    /// Shape bound to a field
    ///
    /// Present for every mapped field by construction.
    pub fn shape_for(&self, field: &str) -> Option<AnswerShape> {
        self.field_shapes.get(field).copied()
    }
}
