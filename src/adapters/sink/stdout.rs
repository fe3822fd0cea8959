//! Stdout sink
//!
//! Prints each normalized record as a JSON line. Useful for piping exports
//! into other tools and for previewing a schema before wiring up a real sink.
//! Trivially idempotent in the at-least-once sense: replayed records are
//! printed again, and downstream consumers dedupe on `survey_response_id`.

use super::ResponseSink;
use crate::domain::{NormalizedRecord, Result};
use async_trait::async_trait;

/// Sink printing records to stdout as JSON lines
#[derive(Default)]
pub struct StdoutSink;

impl StdoutSink {
    /// Create a stdout sink
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResponseSink for StdoutSink {
    async fn store(&self, record: &NormalizedRecord) -> Result<()> {
        let line = serde_json::to_string(record)?;
        println!("{line}");
        Ok(())
    }
}
