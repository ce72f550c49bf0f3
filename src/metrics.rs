//! Balance-integrity check and liquidity estimates.

use crate::schema::{BalanceCheck, LedgerRow, MonthlySummary};

/// A well-formed trial balance nets to zero within this tolerance.
pub const BALANCE_TOLERANCE: f64 = 0.01;

/// Sums net over all rows and flags whether the book balances. An
/// out-of-balance total is a reported state, not an error.
pub fn balance_check(rows: &[LedgerRow]) -> BalanceCheck {
    let total: f64 = rows.iter().map(|r| r.net).sum();
    BalanceCheck {
        total,
        is_balanced: total.abs() < BALANCE_TOLERANCE,
    }
}

/// Monthly burn: magnitude of the latest month's expenses. Zero when
/// there is no month-bucketed data.
pub fn monthly_burn(summaries: &[MonthlySummary]) -> f64 {
    summaries.last().map(|s| s.expenses.abs()).unwrap_or(0.0)
}

/// Months of runway at the current burn. Zero burn means the cash is
/// never exhausted, so the runway is positive infinity rather than a
/// division error.
pub fn runway_months(assumed_cash: f64, monthly_burn: f64) -> f64 {
    if monthly_burn == 0.0 {
        f64::INFINITY
    } else {
        assumed_cash / monthly_burn
    }
}

/// Percent change versus the previous period; defined as 0 when there is
/// no usable previous value.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        0.0
    } else {
        (current - previous) / previous * 100.0
    }
}
