use crate::export::report_to_delimited;
use crate::schema::AnalysisReport;

pub const SYSTEM_PROMPT: &str = "You are a finance analyst for SMEs.";

/// Fixed instructional template followed by the full report rendered as
/// delimited text.
pub fn build_analysis_prompt(report: &AnalysisReport) -> String {
    format!(
        "You are a smart finance analyst. Here's the trial balance data:\n\n\
         {}\n\n\
         Summarize:\n\
         - Total Revenue and Expenses\n\
         - Net Profit\n\
         - Any unusual items\n\
         - Suggest 1-2 ways to improve\n",
        report_to_delimited(report)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::LedgerRow;
    use crate::{analyze_trial_balance, AnalyzerConfig};

    #[test]
    fn test_prompt_embeds_the_table() {
        let rows = vec![LedgerRow::new(
            "Cash",
            Some(500.0),
            None,
            Some("Jan".to_string()),
        )];
        let report = analyze_trial_balance(rows, &AnalyzerConfig::default());

        let prompt = build_analysis_prompt(&report);
        assert!(prompt.contains("trial balance data"));
        assert!(prompt.contains("Cash,500.00"));
        assert!(prompt.contains("Suggest 1-2 ways to improve"));
    }
}
