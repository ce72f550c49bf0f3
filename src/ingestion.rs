//! Parsing and validation of trial-balance exports.
//!
//! The input is a delimited table with named columns. `Account Name`,
//! `Debit` and `Credit` are required; `Month` is optional. Validation
//! failures name every missing column and stop processing before any
//! statement is derived.

use crate::error::{Result, TrialBalanceError};
use crate::schema::LedgerRow;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use std::io::Read;

pub const COLUMN_ACCOUNT: &str = "Account Name";
pub const COLUMN_DEBIT: &str = "Debit";
pub const COLUMN_CREDIT: &str = "Credit";
pub const COLUMN_MONTH: &str = "Month";

pub const REQUIRED_COLUMNS: &[&str] = &[COLUMN_ACCOUNT, COLUMN_DEBIT, COLUMN_CREDIT];

/// Checks that every required column is present, reporting all missing
/// names at once rather than the first one found.
pub fn validate_columns(headers: &StringRecord) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(TrialBalanceError::MissingColumns(missing))
    }
}

/// Reads a trial-balance CSV into normalized ledger rows.
///
/// Blank or unparseable debit/credit cells default to zero and a blank
/// month cell means the row carries no period label. Rows shorter than
/// the header are tolerated; absent cells are treated as blank.
pub fn read_trial_balance<R: Read>(reader: R) -> Result<Vec<LedgerRow>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    validate_columns(&headers)?;

    let column_index = |name: &str| headers.iter().position(|h| h == name);

    // validate_columns guarantees the required indices exist.
    let account_idx = column_index(COLUMN_ACCOUNT).unwrap_or(0);
    let debit_idx = column_index(COLUMN_DEBIT).unwrap_or(0);
    let credit_idx = column_index(COLUMN_CREDIT).unwrap_or(0);
    let month_idx = column_index(COLUMN_MONTH);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;

        let account = record.get(account_idx).unwrap_or("").to_string();
        let debit = parse_amount(record.get(debit_idx));
        let credit = parse_amount(record.get(credit_idx));
        let month = month_idx
            .and_then(|idx| record.get(idx))
            .filter(|cell| !cell.is_empty())
            .map(|cell| cell.to_string());

        rows.push(LedgerRow::new(account, debit, credit, month));
    }

    debug!("Parsed {} trial balance rows", rows.len());
    Ok(rows)
}

/// Lenient amount parsing: exports routinely leave cells blank and format
/// thousands with commas. Anything that still fails to parse is treated
/// as absent, never as an error.
fn parse_amount(cell: Option<&str>) -> Option<f64> {
    let cell = cell?.trim();
    if cell.is_empty() {
        return None;
    }
    cell.replace(',', "").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_well_formed_csv() {
        let data = "Account Name,Debit,Credit,Month\n\
                    Cash,1000,0,Jan\n\
                    Revenue - Sales,0,1000,Jan\n";

        let rows = read_trial_balance(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].account, "Cash");
        assert_eq!(rows[0].net, 1000.0);
        assert_eq!(rows[1].net, -1000.0);
        assert_eq!(rows[0].month.as_deref(), Some("Jan"));
    }

    #[test]
    fn test_missing_columns_are_all_reported() {
        let data = "Account Name,Amount\nCash,1000\n";

        let err = read_trial_balance(data.as_bytes()).unwrap_err();
        match err {
            TrialBalanceError::MissingColumns(cols) => {
                assert_eq!(cols, vec!["Debit".to_string(), "Credit".to_string()]);
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_month_column_is_optional() {
        let data = "Account Name,Debit,Credit\nCash,500,\n";

        let rows = read_trial_balance(data.as_bytes()).unwrap();
        assert_eq!(rows[0].month, None);
        assert_eq!(rows[0].credit, 0.0);
    }

    #[test]
    fn test_blank_and_garbage_amounts_default_to_zero() {
        let data = "Account Name,Debit,Credit,Month\n\
                    Cash,\"1,250.50\",,Jan\n\
                    Mystery,n/a,abc,\n";

        let rows = read_trial_balance(data.as_bytes()).unwrap();
        assert_eq!(rows[0].debit, 1250.50);
        assert_eq!(rows[0].credit, 0.0);
        assert_eq!(rows[1].net, 0.0);
        assert_eq!(rows[1].month, None);
    }

    #[test]
    fn test_short_records_are_tolerated() {
        let data = "Account Name,Debit,Credit,Month\nCash,100\n";

        let rows = read_trial_balance(data.as_bytes()).unwrap();
        assert_eq!(rows[0].debit, 100.0);
        assert_eq!(rows[0].credit, 0.0);
        assert_eq!(rows[0].month, None);
    }

    #[test]
    fn test_empty_account_name_is_kept() {
        let data = "Account Name,Debit,Credit\n,100,0\n";

        let rows = read_trial_balance(data.as_bytes()).unwrap();
        assert_eq!(rows[0].account, "");
    }
}
