//! Output-formatting adapters.
//!
//! These render the engine's final tables as delimited text for the
//! presentation layer, the spreadsheet exporter and the narrative prompt.
//! They read the report and nothing else; no computed value depends on
//! anything in this module.

use crate::schema::{AccountNet, AnalysisReport, LedgerRow, MonthlySummary};

/// Deterministic download name for the serialized summary table. The
/// engine hands the rendered table to the external spreadsheet exporter
/// under this name; it does not produce the workbook bytes itself.
pub const SUMMARY_EXPORT_NAME: &str = "P&L_Summary.xlsx";

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Raw rows as delimited text, mirroring the input columns.
pub fn rows_to_csv(rows: &[LedgerRow]) -> String {
    let mut output = String::from("Account Name,Debit,Credit,Month,Net\n");
    for row in rows {
        output.push_str(&format!(
            "{},{:.2},{:.2},{},{:.2}\n",
            csv_field(&row.account),
            row.debit,
            row.credit,
            csv_field(row.month.as_deref().unwrap_or("")),
            row.net
        ));
    }
    output
}

/// A per-account statement table (balance sheet or P&L) as delimited text.
pub fn account_table_to_csv(lines: &[AccountNet]) -> String {
    let mut output = String::from("Account Name,Net\n");
    for line in lines {
        output.push_str(&format!("{},{:.2}\n", csv_field(&line.account), line.net));
    }
    output
}

/// The monthly summary table as delimited text; this is the payload
/// handed to the spreadsheet exporter as `SUMMARY_EXPORT_NAME`.
pub fn monthly_summary_to_csv(summaries: &[MonthlySummary]) -> String {
    let mut output = String::from("Month,Revenue,Expenses,Profit,Revenue MoM %,Profit MoM %\n");
    for summary in summaries {
        output.push_str(&format!(
            "{},{:.2},{:.2},{:.2},{:.2},{:.2}\n",
            csv_field(&summary.month),
            summary.revenue,
            summary.expenses,
            summary.profit,
            summary.revenue_mom_percent,
            summary.profit_mom_percent
        ));
    }
    output
}

/// The whole report as delimited sections, used as the tabular payload of
/// the narrative prompt.
pub fn report_to_delimited(report: &AnalysisReport) -> String {
    let mut output = String::new();

    output.push_str("== Trial Balance ==\n");
    output.push_str(&rows_to_csv(&report.rows));

    output.push_str("\n== Balance Sheet ==\n");
    output.push_str(&account_table_to_csv(&report.balance_sheet));

    output.push_str("\n== Profit & Loss ==\n");
    output.push_str(&account_table_to_csv(&report.profit_loss));

    if !report.monthly_summaries.is_empty() {
        output.push_str("\n== Monthly Summary ==\n");
        output.push_str(&monthly_summary_to_csv(&report.monthly_summaries));
    }

    output.push_str(&format!(
        "\nBalance check: {} (total {:.2})\n",
        if report.balance_check.is_balanced {
            "Balanced"
        } else {
            "Not Balanced"
        },
        report.balance_check.total
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analyze_trial_balance, AnalyzerConfig};

    fn sample_report() -> AnalysisReport {
        let rows = vec![
            LedgerRow::new("Cash", Some(1000.0), None, Some("Jan".to_string())),
            LedgerRow::new("Revenue, Net", None, Some(1000.0), Some("Jan".to_string())),
        ];
        analyze_trial_balance(rows, &AnalyzerConfig::default())
    }

    #[test]
    fn test_rows_to_csv_quotes_embedded_commas() {
        let report = sample_report();
        let csv = rows_to_csv(&report.rows);
        assert!(csv.starts_with("Account Name,Debit,Credit,Month,Net\n"));
        assert!(csv.contains("\"Revenue, Net\""));
        assert!(csv.contains("Cash,1000.00,0.00,Jan,1000.00"));
    }

    #[test]
    fn test_monthly_summary_to_csv() {
        let report = sample_report();
        let csv = monthly_summary_to_csv(&report.monthly_summaries);
        assert!(csv.contains("Month,Revenue,Expenses,Profit"));
        assert!(csv.contains("Jan,1000.00,0.00,1000.00"));
    }

    #[test]
    fn test_report_to_delimited_contains_all_sections() {
        let report = sample_report();
        let text = report_to_delimited(&report);
        assert!(text.contains("== Trial Balance =="));
        assert!(text.contains("== Balance Sheet =="));
        assert!(text.contains("== Profit & Loss =="));
        assert!(text.contains("== Monthly Summary =="));
        assert!(text.contains("Balanced"));
    }

    #[test]
    fn test_export_name_is_deterministic() {
        assert_eq!(SUMMARY_EXPORT_NAME, "P&L_Summary.xlsx");
    }
}
