//! Watermark model for tracking export state
//!
//! A watermark records, per survey, the `date_modified` boundary up to which
//! responses are confirmed exported. It is read once when a survey's export
//! starts and advanced once per page, after every response on the page has
//! been stored.

use crate::domain::ids::SurveyId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-survey export watermark
///
/// Invariant: `last_committed` only moves forward. The state manager enforces
/// this on commit; the stored document is never rewritten with an older
/// timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Watermark {
    /// Survey this watermark tracks
    pub survey_id: SurveyId,

    /// Timestamp of the newest response confirmed exported
    pub last_committed: DateTime<Utc>,

    /// Number of page checkpoints committed over the survey's lifetime
    pub pages_committed: u64,

    /// Total responses exported for this survey
    pub responses_exported: u64,

    /// When this document was last written
    pub updated_at: DateTime<Utc>,
}

impl Watermark {
    /// Create a watermark at an initial committed timestamp
    pub fn new(survey_id: SurveyId, last_committed: DateTime<Utc>) -> Self {
        Self {
            survey_id,
            last_committed,
            pages_committed: 0,
            responses_exported: 0,
            updated_at: Utc::now(),
        }
    }

    /// Advance the watermark after a page's responses are durably stored
    ///
    /// Caller guarantees `timestamp >= self.last_committed`.
    pub fn advance(&mut self, timestamp: DateTime<Utc>, responses_in_page: u64) {
        self.last_committed = timestamp;
        self.pages_committed += 1;
        self.responses_exported += responses_in_page;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 5, 1, h, 0, 0).unwrap()
    }

    #[test]
    fn test_new_watermark() {
        let wm = Watermark::new(SurveyId::new("316084387").unwrap(), ts(9));
        assert_eq!(wm.last_committed, ts(9));
        assert_eq!(wm.pages_committed, 0);
        assert_eq!(wm.responses_exported, 0);
    }

    #[test]
    fn test_advance_accumulates() {
        let mut wm = Watermark::new(SurveyId::new("316084387").unwrap(), ts(9));
        wm.advance(ts(10), 100);
        wm.advance(ts(11), 37);

        assert_eq!(wm.last_committed, ts(11));
        assert_eq!(wm.pages_committed, 2);
        assert_eq!(wm.responses_exported, 137);
    }

    #[test]
    fn test_watermark_serialization_round_trip() {
        let wm = Watermark::new(SurveyId::new("316084387").unwrap(), ts(9));
        let json = serde_json::to_string(&wm).unwrap();
        assert!(json.contains("316084387"));

        let back: Watermark = serde_json::from_str(&json).unwrap();
        assert_eq!(back, wm);
    }
}
