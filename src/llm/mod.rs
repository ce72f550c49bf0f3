//! Narrative commentary via an external language-model service.
//!
//! The service is an opaque collaborator at the pipeline boundary: it
//! receives a fixed instructional prompt plus the report rendered as
//! delimited text, and returns free-text prose. It is never required for
//! the financial tables to be valid, so any transport or service failure
//! degrades to a logged warning.

pub mod client;
pub mod prompts;
pub mod types;

pub use client::*;
pub use types::*;

use crate::error::Result;
use crate::schema::AnalysisReport;
use log::warn;

/// Single-call summarization capability. Implemented by [`OpenAiClient`]
/// in production and by simple mocks in tests.
pub trait Summarizer {
    fn summarize(&self, prompt: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Asks the summarizer for commentary on a finished report. Failures are
/// non-fatal: they are logged and the caller gets `None`, leaving the
/// computed tables untouched.
pub async fn narrate<S: Summarizer>(report: &AnalysisReport, summarizer: &S) -> Option<String> {
    let prompt = prompts::build_analysis_prompt(report);
    match summarizer.summarize(&prompt).await {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Narrative generation failed, continuing without commentary: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrialBalanceError;
    use crate::schema::LedgerRow;
    use crate::{analyze_trial_balance, AnalyzerConfig};

    struct CannedSummarizer(&'static str);

    impl Summarizer for CannedSummarizer {
        async fn summarize(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingSummarizer;

    impl Summarizer for FailingSummarizer {
        async fn summarize(&self, _prompt: &str) -> Result<String> {
            Err(TrialBalanceError::NarrativeFailed(
                "service unavailable".to_string(),
            ))
        }
    }

    fn sample_report() -> AnalysisReport {
        let rows = vec![
            LedgerRow::new("Cash", Some(1000.0), None, Some("Jan".to_string())),
            LedgerRow::new("Revenue", None, Some(1000.0), Some("Jan".to_string())),
        ];
        analyze_trial_balance(rows, &AnalyzerConfig::default())
    }

    #[tokio::test]
    async fn test_narrate_returns_summary_text() {
        let report = sample_report();
        let narrative = narrate(&report, &CannedSummarizer("Profit looks healthy.")).await;
        assert_eq!(narrative.as_deref(), Some("Profit looks healthy."));
    }

    #[tokio::test]
    async fn test_narrate_failure_is_non_fatal() {
        let report = sample_report();
        let narrative = narrate(&report, &FailingSummarizer).await;
        assert!(narrative.is_none());
        // The report itself is untouched by the failure.
        assert!(report.balance_check.is_balanced);
    }
}
