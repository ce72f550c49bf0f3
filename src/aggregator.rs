//! Grouping operations over the classified row set.
//!
//! All four operations are pure functions: they read the rows, never
//! mutate them, and return fresh tables. Month labels are opaque text,
//! so every month-bucketed view uses first-seen order from the input
//! instead of any calendar or lexicographic sort.

use crate::classifier;
use crate::metrics::percent_change;
use crate::schema::{
    AccountNet, Category, LedgerRow, MonthlySummary, MonthlyTotals, Tag, TaggedActivity,
};
use std::collections::BTreeMap;

/// Distinct month labels in the order they first appear in the input.
pub fn ordered_months(rows: &[LedgerRow]) -> Vec<String> {
    let mut months = Vec::new();
    for row in rows {
        if let Some(month) = &row.month {
            if !months.iter().any(|m| m == month) {
                months.push(month.clone());
            }
        }
    }
    months
}

/// Per-account summed net within one statement category, ordered by
/// account name. Feeds the balance-sheet composition and P&L breakdown.
pub fn net_by_account(rows: &[LedgerRow], category: Category) -> Vec<AccountNet> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for row in rows {
        if classifier::category(&row.account) == category {
            *totals.entry(row.account.clone()).or_insert(0.0) += row.net;
        }
    }

    totals
        .into_iter()
        .map(|(account, net)| AccountNet { account, net })
        .collect()
}

/// Per-month debit and credit sums for the debit-vs-credit trend view.
/// Rows without a month label are excluded.
pub fn debit_credit_by_month(rows: &[LedgerRow]) -> Vec<MonthlyTotals> {
    ordered_months(rows)
        .into_iter()
        .map(|month| {
            let (debit, credit) = rows
                .iter()
                .filter(|r| r.month.as_deref() == Some(month.as_str()))
                .fold((0.0, 0.0), |(d, c), r| (d + r.debit, c + r.credit));
            MonthlyTotals {
                month,
                debit,
                credit,
            }
        })
        .collect()
}

/// Revenue contribution of a row under the signed convention: revenue
/// accounts are credit-heavy under debit-minus-credit, so a normal
/// revenue row (negative net) contributes `-net > 0` and a debit-heavy
/// revenue row (e.g. a refund) subtracts from the month.
fn revenue_contribution(row: &LedgerRow) -> f64 {
    if classifier::is_revenue(&row.account) {
        -row.net
    } else {
        0.0
    }
}

/// Expense contribution of a row: magnitude of net for P&L rows that are
/// not revenue-flagged. Balance-sheet rows contribute nothing.
fn expense_contribution(row: &LedgerRow) -> f64 {
    if !classifier::is_revenue(&row.account)
        && classifier::category(&row.account) == Category::ProfitAndLoss
    {
        row.net.abs()
    } else {
        0.0
    }
}

/// Monthly revenue/expense/profit summaries with month-over-month percent
/// changes, in first-seen month order. The first month's changes are 0,
/// as is any change against a zero previous value.
pub fn monthly_summary(rows: &[LedgerRow]) -> Vec<MonthlySummary> {
    let mut summaries: Vec<MonthlySummary> = Vec::new();

    for month in ordered_months(rows) {
        let month_rows = rows
            .iter()
            .filter(|r| r.month.as_deref() == Some(month.as_str()));

        let (revenue, expenses) = month_rows.fold((0.0, 0.0), |(rev, exp), row| {
            (
                rev + revenue_contribution(row),
                exp + expense_contribution(row),
            )
        });
        let profit = revenue - expenses;

        let (revenue_mom_percent, profit_mom_percent) = match summaries.last() {
            Some(prev) => (
                percent_change(revenue, prev.revenue),
                percent_change(profit, prev.profit),
            ),
            None => (0.0, 0.0),
        };

        summaries.push(MonthlySummary {
            month,
            revenue,
            expenses,
            profit,
            revenue_mom_percent,
            profit_mom_percent,
        });
    }

    summaries
}

/// Net summed by (month, tag) pair, months in first-seen order and tags
/// in rule-priority order within each month. Shaped for stacked-bar
/// consumption by the presentation layer.
pub fn tagged_activity(rows: &[LedgerRow]) -> Vec<TaggedActivity> {
    let mut activity = Vec::new();

    for month in ordered_months(rows) {
        let mut by_tag: BTreeMap<Tag, f64> = BTreeMap::new();
        for row in rows
            .iter()
            .filter(|r| r.month.as_deref() == Some(month.as_str()))
        {
            *by_tag.entry(classifier::tag(&row.account)).or_insert(0.0) += row.net;
        }

        for (tag, net) in by_tag {
            activity.push(TaggedActivity {
                month: month.clone(),
                tag,
                net,
            });
        }
    }

    activity
}
