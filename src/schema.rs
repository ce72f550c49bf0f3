use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Category {
    /// Assets, liabilities and equity: point-in-time position accounts.
    BalanceSheet,
    /// Revenue and expense accounts: period activity.
    ProfitAndLoss,
}

/// Descriptive activity tag, independent of the statement category.
/// Declaration order is the tag rule priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Tag {
    Payroll,
    Facilities,
    Utilities,
    Financing,
    Revenue,
    FixedAsset,
    Other,
}

impl Tag {
    pub fn label(&self) -> &'static str {
        match self {
            Tag::Payroll => "Payroll",
            Tag::Facilities => "Facilities",
            Tag::Utilities => "Utilities",
            Tag::Financing => "Financing",
            Tag::Revenue => "Revenue",
            Tag::FixedAsset => "Fixed Asset",
            Tag::Other => "Other",
        }
    }
}

/// One trial-balance line after normalization.
///
/// Debit and credit default to zero when the export leaves them blank;
/// `net` is always `debit - credit`, so credit-heavy accounts (revenue,
/// liabilities, equity) carry a negative net.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerRow {
    pub account: String,
    pub debit: f64,
    pub credit: f64,
    /// Opaque period label from the export. Rows without one are excluded
    /// from month-bucketed views but still count toward overall totals.
    pub month: Option<String>,
    pub net: f64,
}

impl LedgerRow {
    pub fn new(
        account: impl Into<String>,
        debit: Option<f64>,
        credit: Option<f64>,
        month: Option<String>,
    ) -> Self {
        let debit = debit.unwrap_or(0.0);
        let credit = credit.unwrap_or(0.0);
        Self {
            account: account.into(),
            debit,
            credit,
            month,
            net: debit - credit,
        }
    }

    pub fn category(&self) -> Category {
        crate::classifier::category(&self.account)
    }

    pub fn tag(&self) -> Tag {
        crate::classifier::tag(&self.account)
    }

    pub fn is_revenue(&self) -> bool {
        crate::classifier::is_revenue(&self.account)
    }
}

/// One account's summed net within a statement category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountNet {
    pub account: String,
    pub net: f64,
}

/// Per-month debit and credit sums for the debit-vs-credit trend view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTotals {
    pub month: String,
    pub debit: f64,
    pub credit: f64,
}

/// Revenue, expenses and profit for one month, with month-over-month
/// percent changes against the previous month in first-seen order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month: String,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
    pub revenue_mom_percent: f64,
    pub profit_mom_percent: f64,
}

/// Net activity for one (month, tag) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedActivity {
    pub month: String,
    pub tag: Tag,
    pub net: f64,
}

/// Result of the net-zero integrity check over all rows.
///
/// An out-of-balance trial balance is reported, never rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceCheck {
    pub total: f64,
    pub is_balanced: bool,
}

/// Everything the engine derives from one upload. All fields are computed
/// in a single pass and never mutated afterwards; a new upload produces a
/// fresh report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Normalized input rows, passed through for raw display and export.
    pub rows: Vec<LedgerRow>,
    pub balance_sheet: Vec<AccountNet>,
    pub profit_loss: Vec<AccountNet>,
    pub monthly_summaries: Vec<MonthlySummary>,
    pub debit_credit_trend: Vec<MonthlyTotals>,
    pub tagged_activity: Vec<TaggedActivity>,
    pub balance_check: BalanceCheck,
    /// Magnitude of the latest month's expenses.
    pub monthly_burn: f64,
    /// Months of cash left at the current burn; infinite when burn is zero.
    pub runway_months: f64,
}

impl AnalysisReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
