//! SurveyMonkey wire models
//!
//! Deserialization targets for the bulk responses endpoint. Kept separate
//! from the domain types: the envelope carries paging metadata the rest of
//! the pipeline never sees.

use crate::domain::{RawResponse, ResponsePage};
use serde::Deserialize;

/// Envelope returned by `/v3/surveys/{id}/responses/bulk`
#[derive(Debug, Deserialize)]
pub struct BulkResponsesEnvelope {
    /// Responses in this page, in provider order
    #[serde(default)]
    pub data: Vec<RawResponse>,

    /// Pagination links
    #[serde(default)]
    pub links: PageLinks,

    /// Page size the provider applied
    #[serde(default)]
    pub per_page: Option<usize>,

    /// Total responses matching the query
    #[serde(default)]
    pub total: Option<usize>,
}

/// Pagination links block
#[derive(Debug, Default, Deserialize)]
pub struct PageLinks {
    /// Absolute URL of the next page; absent on the last page
    #[serde(default)]
    pub next: Option<String>,
}

impl BulkResponsesEnvelope {
    /// Convert the wire envelope into a domain page
    pub fn into_page(self) -> ResponsePage {
        ResponsePage {
            responses: self.data,
            next_url: self.links.next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_next_link() {
        let json = r#"{
            "data": [
                {"id": "1", "date_modified": "2023-05-01T10:00:00+00:00", "pages": []}
            ],
            "per_page": 100,
            "total": 250,
            "links": {
                "self": "https://api.surveymonkey.com/v3/surveys/316084387/responses/bulk?page=1",
                "next": "https://api.surveymonkey.com/v3/surveys/316084387/responses/bulk?page=2"
            }
        }"#;

        let envelope: BulkResponsesEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.total, Some(250));

        let page = envelope.into_page();
        assert_eq!(page.responses.len(), 1);
        assert!(page.next_url.unwrap().contains("page=2"));
    }

    #[test]
    fn test_envelope_last_page_has_no_next() {
        let json = r#"{"data": [], "links": {}}"#;
        let envelope: BulkResponsesEnvelope = serde_json::from_str(json).unwrap();
        let page = envelope.into_page();
        assert!(page.responses.is_empty());
        assert!(page.next_url.is_none());
    }

    #[test]
    fn test_envelope_tolerates_missing_links_block() {
        let json = r#"{"data": []}"#;
        let envelope: BulkResponsesEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.into_page().next_url.is_none());
    }
}
