//! Export summary and reporting
//!
//! Tracks per-survey outcomes across a run and decides the process exit code:
//! any `Failed` survey makes the run non-successful, while rate-limit and
//! shutdown stops are graceful (resumable from the committed watermark).

use crate::domain::ids::SurveyId;
use std::time::Duration;

/// Terminal state of one survey's export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyOutcome {
    /// All pages fetched, transformed, stored and checkpointed
    Completed,
    /// Stopped early because the provider's API budget is spent
    RateLimited,
    /// Stopped early by a shutdown signal, between pages
    Interrupted,
    /// Ended in an unrecoverable error
    Failed(String),
}

impl SurveyOutcome {
    /// Whether this outcome counts against the run's success
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Per-survey result line in the summary
#[derive(Debug, Clone)]
pub struct SurveyReport {
    /// Survey this report covers
    pub survey_id: SurveyId,

    /// How the survey's export ended
    pub outcome: SurveyOutcome,

    /// Pages fully processed this run
    pub pages_processed: u64,

    /// Responses stored this run
    pub responses_exported: u64,
}

/// Summary of an export run
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    /// Per-survey reports, in run order
    pub reports: Vec<SurveyReport>,

    /// Wall-clock duration of the run
    pub duration: Duration,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Add a survey report
    pub fn add_report(&mut self, report: SurveyReport) {
        self.reports.push(report);
    }

    /// Whether any survey ended in `Failed`
    pub fn any_failed(&self) -> bool {
        self.reports.iter().any(|r| r.outcome.is_failure())
    }

    /// Total responses stored this run
    pub fn total_responses(&self) -> u64 {
        self.reports.iter().map(|r| r.responses_exported).sum()
    }

    /// Process exit code for this run
    ///
    /// Rate-limit and shutdown stops are not failures.
    pub fn exit_code(&self) -> i32 {
        if self.any_failed() {
            4
        } else {
            0
        }
    }

    /// Log the summary at the end of a run
    pub fn log_summary(&self) {
        for report in &self.reports {
            match &report.outcome {
                SurveyOutcome::Completed => tracing::info!(
                    survey_id = %report.survey_id,
                    pages = report.pages_processed,
                    responses = report.responses_exported,
                    "Survey export completed"
                ),
                SurveyOutcome::RateLimited => tracing::info!(
                    survey_id = %report.survey_id,
                    pages = report.pages_processed,
                    responses = report.responses_exported,
                    "Survey export stopped on rate limit, resumable from watermark"
                ),
                SurveyOutcome::Interrupted => tracing::info!(
                    survey_id = %report.survey_id,
                    pages = report.pages_processed,
                    responses = report.responses_exported,
                    "Survey export interrupted by shutdown, resumable from watermark"
                ),
                SurveyOutcome::Failed(error) => tracing::error!(
                    survey_id = %report.survey_id,
                    pages = report.pages_processed,
                    responses = report.responses_exported,
                    error = %error,
                    "Survey export failed"
                ),
            }
        }

        tracing::info!(
            surveys = self.reports.len(),
            failed = self.reports.iter().filter(|r| r.outcome.is_failure()).count(),
            total_responses = self.total_responses(),
            duration_ms = self.duration.as_millis() as u64,
            "Export run finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: &str, outcome: SurveyOutcome) -> SurveyReport {
        SurveyReport {
            survey_id: SurveyId::new(id).unwrap(),
            outcome,
            pages_processed: 2,
            responses_exported: 150,
        }
    }

    #[test]
    fn test_all_completed_is_success() {
        let mut summary = ExportSummary::new();
        summary.add_report(report("1", SurveyOutcome::Completed));
        summary.add_report(report("2", SurveyOutcome::Completed));

        assert!(!summary.any_failed());
        assert_eq!(summary.exit_code(), 0);
        assert_eq!(summary.total_responses(), 300);
    }

    #[test]
    fn test_rate_limited_is_not_a_failure() {
        let mut summary = ExportSummary::new();
        summary.add_report(report("1", SurveyOutcome::RateLimited));
        assert_eq!(summary.exit_code(), 0);
    }

    #[test]
    fn test_any_failed_survey_fails_the_run() {
        let mut summary = ExportSummary::new();
        summary.add_report(report("1", SurveyOutcome::Completed));
        summary.add_report(report("2", SurveyOutcome::Failed("boom".to_string())));

        assert!(summary.any_failed());
        assert_eq!(summary.exit_code(), 4);
    }
}
