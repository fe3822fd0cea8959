//! Storage sink adapters
//!
//! Defines the [`ResponseSink`] seam the pagination driver stores records
//! through, plus the file and stdout backends and their factory. Sinks must
//! be idempotent under at-least-once delivery: after a crash between
//! processing and checkpointing, the in-flight page is replayed.

pub mod file;
pub mod stdout;

use crate::config::{SinkConfig, SinkTarget};
use crate::domain::{NormalizedRecord, Result};
use async_trait::async_trait;
use std::sync::Arc;

pub use file::FileSink;
pub use stdout::StdoutSink;

/// Sink collaborator for normalized records
#[async_trait]
pub trait ResponseSink: Send + Sync {
    /// Store one normalized record
    ///
    /// Re-storing a record with the same `survey_response_id` must be safe.
    ///
    /// # Errors
    ///
    /// Returns a sink error if the record cannot be stored durably.
    async fn store(&self, record: &NormalizedRecord) -> Result<()>;
}

/// Create a sink from configuration
///
/// # Errors
///
/// Returns an error if the sink backend cannot be initialized.
pub fn create_sink(config: &SinkConfig) -> Result<Arc<dyn ResponseSink>> {
    match config.target {
        SinkTarget::File => {
            tracing::info!(output_dir = %config.output_dir, "Creating file sink");
            Ok(Arc::new(FileSink::new(&config.output_dir)?))
        }
        SinkTarget::Stdout => {
            tracing::info!("Creating stdout sink");
            Ok(Arc::new(StdoutSink::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_factory_creates_file_sink() {
        let dir = TempDir::new().unwrap();
        let config = SinkConfig {
            target: SinkTarget::File,
            output_dir: dir.path().to_string_lossy().to_string(),
        };
        assert!(create_sink(&config).is_ok());
    }

    #[test]
    fn test_factory_creates_stdout_sink() {
        let config = SinkConfig {
            target: SinkTarget::Stdout,
            output_dir: String::new(),
        };
        assert!(create_sink(&config).is_ok());
    }
}
