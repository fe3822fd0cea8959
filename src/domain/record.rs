//! Normalized record model
//!
//! A [`NormalizedRecord`] is the flat, field-name-keyed output of the response
//! transformer. Produced once per raw response, immutable once built, handed
//! to the sink and then discarded.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A typed field value in a normalized record
///
/// `Absent` is deliberate: blank or ambiguous answers normalize to an explicit
/// absent value rather than an error, and exports tolerate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// No usable answer (empty input, or boolean text outside the yes/no table)
    Absent,
    /// Boolean answer
    Bool(bool),
    /// Integer answer (ratings, identifiers)
    Integer(i64),
    /// Single free-text or single-choice answer
    Text(String),
    /// Ordered multi-choice answers
    TextList(Vec<String>),
}

impl FieldValue {
    /// Whether this value is the explicit absent marker
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Flat normalized record: field name → typed value
///
/// Always carries integer `survey_id` and `survey_response_id` alongside the
/// per-question fields. Field iteration order is stable (sorted by name) so
/// serialized output is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Survey this record belongs to
    pub survey_id: i64,

    /// Provider response id
    pub survey_response_id: i64,

    /// Normalized per-question fields
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl NormalizedRecord {
    /// Create an empty record for a survey response
    pub fn new(survey_id: i64, survey_response_id: i64) -> Self {
        Self {
            survey_id,
            survey_response_id,
            fields: BTreeMap::new(),
        }
    }

    /// Set a normalized field value
    pub fn set(&mut self, field: impl Into<String>, value: FieldValue) {
        self.fields.insert(field.into(), value);
    }

    /// Get a field value by name
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }
}
