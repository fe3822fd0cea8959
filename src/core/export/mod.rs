//! Export pipeline
//!
//! The orchestrator runs one pagination driver per configured survey and
//! collects the results into a run summary.

pub mod driver;
pub mod orchestrator;
pub mod summary;

pub use driver::{DriveOutcome, DriveResult, DriveStats, PaginationDriver};
pub use orchestrator::SurveyExportOrchestrator;
pub use summary::{ExportSummary, SurveyOutcome, SurveyReport};
