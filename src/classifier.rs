//! Keyword classification of account names.
//!
//! Every rule is a static, ordered table of (keyword set, result) pairs
//! matched case-insensitively as substrings. The functions are pure and
//! total: an empty or garbage account name falls through to the defaults
//! (ProfitAndLoss, not revenue, Tag::Other) rather than failing.

use crate::schema::{Category, Tag};

/// Any of these in an account name puts the row on the balance sheet.
pub const BALANCE_SHEET_KEYWORDS: &[&str] = &[
    "receivable",
    "payable",
    "cash",
    "asset",
    "liability",
    "equity",
    "loan",
    "equipment",
];

/// Marks a row as revenue regardless of its statement category.
pub const REVENUE_KEYWORDS: &[&str] = &["revenue", "sales", "turnover"];

/// Tag rules in priority order; the first matching set wins, so
/// "Salary Loan Repayment" is Payroll, not Financing.
pub const TAG_RULES: &[(&[&str], Tag)] = &[
    (&["salary", "wages"], Tag::Payroll),
    (&["rent"], Tag::Facilities),
    (&["utilities", "electric"], Tag::Utilities),
    (&["loan"], Tag::Financing),
    (&["revenue", "sales"], Tag::Revenue),
    (&["equipment", "asset"], Tag::FixedAsset),
];

fn contains_any(name_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| name_lower.contains(k))
}

/// Statement category for an account name.
pub fn category(account: &str) -> Category {
    if contains_any(&account.to_lowercase(), BALANCE_SHEET_KEYWORDS) {
        Category::BalanceSheet
    } else {
        Category::ProfitAndLoss
    }
}

/// Whether the account name looks like a revenue line.
pub fn is_revenue(account: &str) -> bool {
    contains_any(&account.to_lowercase(), REVENUE_KEYWORDS)
}

/// Descriptive tag for an account name, first matching rule wins.
pub fn tag(account: &str) -> Tag {
    let name_lower = account.to_lowercase();
    for (keywords, tag) in TAG_RULES {
        if contains_any(&name_lower, keywords) {
            return *tag;
        }
    }
    Tag::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_sheet_keywords() {
        assert_eq!(category("Cash at Bank"), Category::BalanceSheet);
        assert_eq!(category("Accounts Receivable"), Category::BalanceSheet);
        assert_eq!(category("ACCOUNTS PAYABLE"), Category::BalanceSheet);
        assert_eq!(category("Share Equity"), Category::BalanceSheet);
        assert_eq!(category("Bank Loan"), Category::BalanceSheet);
        assert_eq!(category("Office Equipment"), Category::BalanceSheet);
    }

    #[test]
    fn test_default_category_is_profit_and_loss() {
        assert_eq!(category("Consulting Income"), Category::ProfitAndLoss);
        assert_eq!(category("Marketing"), Category::ProfitAndLoss);
        assert_eq!(category(""), Category::ProfitAndLoss);
    }

    #[test]
    fn test_revenue_flag_is_independent_of_category() {
        assert!(is_revenue("Revenue - Sales"));
        assert!(is_revenue("Turnover"));
        assert!(is_revenue("SALES RETURNS"));
        assert!(!is_revenue("Office Rent"));
        // Substring match, not whole-word.
        assert!(is_revenue("Presales Support"));
    }

    #[test]
    fn test_tag_rules_per_rule() {
        assert_eq!(tag("Salaries and Wages"), Tag::Payroll);
        assert_eq!(tag("Office Rent"), Tag::Facilities);
        assert_eq!(tag("Electric Bill"), Tag::Utilities);
        assert_eq!(tag("Bank Loan Interest"), Tag::Financing);
        assert_eq!(tag("Revenue - Consulting"), Tag::Revenue);
        assert_eq!(tag("Plant Equipment"), Tag::FixedAsset);
        assert_eq!(tag("Travel"), Tag::Other);
    }

    #[test]
    fn test_tag_priority_first_match_wins() {
        // Matches both Payroll (rule 1) and Financing (rule 4).
        assert_eq!(tag("Salary Loan Repayment"), Tag::Payroll);
        // Matches both Financing (rule 4) and FixedAsset (rule 6).
        assert_eq!(tag("Equipment Loan"), Tag::Financing);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let name = "Loan Interest Expense";
        assert_eq!(category(name), category(name));
        assert_eq!(tag(name), tag(name));
        assert_eq!(is_revenue(name), is_revenue(name));
    }

    #[test]
    fn test_empty_name_never_fails() {
        assert_eq!(category(""), Category::ProfitAndLoss);
        assert_eq!(tag(""), Tag::Other);
        assert!(!is_revenue(""));
    }
}
