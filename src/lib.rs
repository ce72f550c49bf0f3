//! # Trial Balance Engine
//!
//! A library for turning account-level trial-balance exports into
//! classified, netted, time-bucketed financial summaries.
//!
//! ## Core Concepts
//!
//! - **Ledger Row**: one trial-balance line with debit, credit, an optional
//!   month label and a derived `net = debit - credit`
//! - **Classification**: keyword rule tables assign each row a statement
//!   category (Balance Sheet vs P&L), a revenue flag and a descriptive tag
//! - **Aggregation**: pure grouping operations produce the balance-sheet
//!   composition, P&L breakdown, monthly trends and tagged activity
//! - **Integrity**: the sum of nets over a well-formed trial balance is
//!   zero within a fixed tolerance; violations are reported, not rejected
//!
//! The pipeline is a single synchronous pass: ingest → normalize →
//! classify → aggregate → metrics. Every output is recomputed in full for
//! each upload and nothing persists between uploads.
//!
//! ## Example
//!
//! ```rust
//! use trial_balance_engine::{analyze_csv, AnalyzerConfig};
//!
//! let data = "Account Name,Debit,Credit,Month\n\
//!             Cash,1000,0,Jan\n\
//!             Revenue - Sales,0,1000,Jan\n";
//!
//! let config = AnalyzerConfig { starting_cash: 50_000.0 };
//! let report = analyze_csv(data.as_bytes(), &config).unwrap();
//!
//! assert!(report.balance_check.is_balanced);
//! assert_eq!(report.monthly_summaries[0].profit, 1000.0);
//! ```

pub mod aggregator;
pub mod classifier;
pub mod error;
pub mod export;
pub mod ingestion;
pub mod metrics;
pub mod schema;

#[cfg(feature = "openai")]
pub mod llm;

pub use aggregator::{
    debit_credit_by_month, monthly_summary, net_by_account, ordered_months, tagged_activity,
};
pub use classifier::{category, is_revenue, tag};
pub use error::{Result, TrialBalanceError};
pub use export::*;
pub use ingestion::{read_trial_balance, validate_columns, REQUIRED_COLUMNS};
pub use metrics::{balance_check, monthly_burn, percent_change, runway_months, BALANCE_TOLERANCE};
pub use schema::*;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Analysis parameters supplied by the caller alongside the upload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Assumed cash on hand used for the runway estimate.
    pub starting_cash: f64,
}

pub struct TrialBalanceAnalyzer;

impl TrialBalanceAnalyzer {
    /// Runs the full classification and aggregation pipeline over
    /// normalized rows. Aggregation never fails: empty inputs and
    /// month-less data produce empty summaries, and an out-of-balance
    /// book is flagged in the report rather than rejected.
    pub fn analyze(rows: Vec<LedgerRow>, config: &AnalyzerConfig) -> AnalysisReport {
        info!("Analyzing trial balance with {} rows", rows.len());

        let balance_check = metrics::balance_check(&rows);
        if !balance_check.is_balanced {
            warn!(
                "Trial balance does not net to zero: total {:.2}",
                balance_check.total
            );
        }

        let balance_sheet = aggregator::net_by_account(&rows, Category::BalanceSheet);
        let profit_loss = aggregator::net_by_account(&rows, Category::ProfitAndLoss);
        let monthly_summaries = aggregator::monthly_summary(&rows);
        let debit_credit_trend = aggregator::debit_credit_by_month(&rows);
        let tagged_activity = aggregator::tagged_activity(&rows);

        debug!(
            "Derived {} balance sheet accounts, {} P&L accounts, {} months",
            balance_sheet.len(),
            profit_loss.len(),
            monthly_summaries.len()
        );

        let monthly_burn = metrics::monthly_burn(&monthly_summaries);
        let runway_months = metrics::runway_months(config.starting_cash, monthly_burn);

        AnalysisReport {
            rows,
            balance_sheet,
            profit_loss,
            monthly_summaries,
            debit_credit_trend,
            tagged_activity,
            balance_check,
            monthly_burn,
            runway_months,
        }
    }
}

/// Convenience wrapper around [`TrialBalanceAnalyzer::analyze`].
pub fn analyze_trial_balance(rows: Vec<LedgerRow>, config: &AnalyzerConfig) -> AnalysisReport {
    TrialBalanceAnalyzer::analyze(rows, config)
}

/// Parses a trial-balance CSV and runs the full pipeline. Validation
/// failures (missing required columns) halt processing before any table
/// is derived.
pub fn analyze_csv<R: Read>(reader: R, config: &AnalyzerConfig) -> Result<AnalysisReport> {
    let rows = ingestion::read_trial_balance(reader)?;
    Ok(TrialBalanceAnalyzer::analyze(rows, config))
}
