//! CSV import and export of transactions
//!
//! Columns: `Date,Type,Category,Description,Amount`, with the amount in major
//! units ("12.50"). Import skips bad rows instead of failing the whole file
//! and reports why each one was skipped.

use std::fmt;
use std::io::{Read, Write};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Money, Transaction, TransactionKind};

/// Header row shared by export and import
pub const CSV_COLUMNS: [&str; 5] = ["Date", "Type", "Category", "Description", "Amount"];

#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Amount")]
    amount: String,
}

impl From<&Transaction> for CsvRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date.format("%Y-%m-%d").to_string(),
            kind: txn.kind.to_string(),
            category: txn.category.to_string(),
            description: txn.description.clone(),
            amount: txn.amount.to_string(),
        }
    }
}

/// Write transactions as CSV, returning how many rows were written
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> TrackerResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if transactions.is_empty() {
        csv_writer.write_record(CSV_COLUMNS)?;
    }
    for txn in transactions {
        csv_writer.serialize(CsvRow::from(txn))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(transactions.len())
}

/// Why an imported row was not taken
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Malformed(String),
    InvalidDate(String),
    InvalidAmount(String),
    UnknownType(String),
    UnknownCategory(String),
    Invalid(String),
    /// Same date, type, category and amount as an existing transaction
    Duplicate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(e) => write!(f, "malformed row: {}", e),
            Self::InvalidDate(s) => write!(f, "invalid date '{}'", s),
            Self::InvalidAmount(s) => write!(f, "invalid amount '{}'", s),
            Self::UnknownType(s) => write!(f, "unknown type '{}'", s),
            Self::UnknownCategory(s) => write!(f, "unknown category '{}'", s),
            Self::Invalid(e) => write!(f, "{}", e),
            Self::Duplicate => write!(f, "duplicate of an existing transaction"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based data row number, not counting the header
    pub row: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvImport {
    pub transactions: Vec<Transaction>,
    pub skipped: Vec<SkippedRow>,
}

/// Parse a transaction CSV
///
/// Rows matching an entry in `existing`, or an earlier row of the same file,
/// are skipped as duplicates. A file missing one of the required columns is
/// rejected outright.
pub fn import_transactions_csv<R: Read>(
    reader: R,
    existing: &[Transaction],
) -> TrackerResult<CsvImport> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let missing: Vec<&str> = CSV_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(TrackerError::Import(format!(
            "missing column(s): {}",
            missing.join(", ")
        )));
    }

    let mut result = CsvImport::default();
    for (index, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let parsed = row
            .map_err(|e| SkipReason::Malformed(e.to_string()))
            .and_then(parse_row);

        let outcome = parsed.and_then(|txn| {
            let duplicate = existing
                .iter()
                .chain(result.transactions.iter())
                .any(|t| is_duplicate(t, &txn));
            if duplicate {
                Err(SkipReason::Duplicate)
            } else {
                Ok(txn)
            }
        });

        match outcome {
            Ok(txn) => result.transactions.push(txn),
            Err(reason) => result.skipped.push(SkippedRow {
                row: index + 1,
                reason,
            }),
        }
    }

    Ok(result)
}

fn parse_row(row: CsvRow) -> Result<Transaction, SkipReason> {
    let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
        .map_err(|_| SkipReason::InvalidDate(row.date.clone()))?;
    let kind: TransactionKind = row
        .kind
        .parse()
        .map_err(|_| SkipReason::UnknownType(row.kind.clone()))?;
    let category: Category = row
        .category
        .parse()
        .map_err(|_| SkipReason::UnknownCategory(row.category.clone()))?;
    let amount =
        Money::parse(&row.amount).map_err(|_| SkipReason::InvalidAmount(row.amount.clone()))?;

    let txn = Transaction::new(date, kind, category, row.description, amount);
    txn.validate()
        .map_err(|e| SkipReason::Invalid(e.to_string()))?;
    Ok(txn)
}

fn is_duplicate(a: &Transaction, b: &Transaction) -> bool {
    a.date == b.date && a.kind == b.kind && a.category == b.category && a.amount == b.amount
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn test_export_format() {
        let txns = vec![
            Transaction::income(d(1), Category::Salary, "January pay", Money::from_minor(500_000)),
            Transaction::expense(d(3), Category::Food, "Pizza, large", Money::from_minor(1250)),
        ];
        let mut out = Vec::new();
        let written = export_transactions_csv(&txns, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(written, 2);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Date,Type,Category,Description,Amount");
        assert_eq!(lines[1], "2025-01-01,Income,Salary,January pay,5000.00");
        assert_eq!(lines[2], "2025-01-03,Expense,Food,\"Pizza, large\",12.50");
    }

    #[test]
    fn test_export_empty_still_has_header() {
        let mut out = Vec::new();
        export_transactions_csv(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim(), "Date,Type,Category,Description,Amount");
    }

    #[test]
    fn test_import_reads_exported_file() {
        let txns = vec![
            Transaction::income(d(1), Category::Salary, "pay", Money::from_minor(500_000)),
            Transaction::expense(d(3), Category::Food, "", Money::from_minor(1250)),
        ];
        let mut out = Vec::new();
        export_transactions_csv(&txns, &mut out).unwrap();

        let imported = import_transactions_csv(out.as_slice(), &[]).unwrap();
        assert_eq!(imported.transactions, txns);
        assert!(imported.skipped.is_empty());
    }

    #[test]
    fn test_import_skips_bad_rows_with_reasons() {
        let data = "\
Date,Type,Category,Description,Amount
2025-01-05,Expense,Food,ok,10.5
2025-13-01,Expense,Food,bad date,1
2025-01-06,Transfer,Food,bad type,1
2025-01-06,Expense,Groceries,bad category,1
2025-01-06,Expense,Food,bad amount,ten
2025-01-06,Income,Food,wrong kind,1
2025-01-05,Expense,Food,dupe of row 1,10.50
2025-01-07,Expense,Transport,existing,3
";
        let existing = vec![Transaction::expense(
            d(7),
            Category::Transport,
            "bus",
            Money::from_minor(300),
        )];
        let imported = import_transactions_csv(data.as_bytes(), &existing).unwrap();

        assert_eq!(imported.transactions.len(), 1);
        assert_eq!(imported.transactions[0].amount.minor(), 1050);

        let reasons: Vec<_> = imported.skipped.iter().map(|s| (s.row, s.reason.clone())).collect();
        assert_eq!(reasons[0], (2, SkipReason::InvalidDate("2025-13-01".into())));
        assert_eq!(reasons[1], (3, SkipReason::UnknownType("Transfer".into())));
        assert_eq!(reasons[2], (4, SkipReason::UnknownCategory("Groceries".into())));
        assert_eq!(reasons[3], (5, SkipReason::InvalidAmount("ten".into())));
        assert!(matches!(reasons[4], (6, SkipReason::Invalid(_))));
        assert_eq!(reasons[5], (7, SkipReason::Duplicate));
        assert_eq!(reasons[6], (8, SkipReason::Duplicate));
    }

    #[test]
    fn test_import_missing_column_fails() {
        let data = "Date,Type,Category,Amount\n2025-01-05,Expense,Food,1\n";
        let err = import_transactions_csv(data.as_bytes(), &[]).unwrap_err();
        assert!(matches!(err, TrackerError::Import(_)));
        assert!(err.to_string().contains("Description"));
    }
}
