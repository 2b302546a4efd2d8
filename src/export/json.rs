//! JSON export
//!
//! Transactions are written as a plain array; the monthly report is wrapped
//! with a schema version and the date it was generated for.

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::analytics::{BudgetStatus, MonthlyReport};
use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Write transactions as a pretty-printed JSON array
pub fn export_transactions_json<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> TrackerResult<usize> {
    serde_json::to_writer_pretty(writer, transactions)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(transactions.len())
}

/// Monthly report export structure
#[derive(Debug, Clone, Serialize)]
pub struct ReportExport<'a> {
    pub schema_version: &'static str,
    pub app_version: &'static str,
    /// Reference date the report was computed for
    pub reference_date: NaiveDate,
    /// Current-month transactions behind the report
    pub transactions: Vec<&'a Transaction>,
    pub budgets: &'a [BudgetStatus],
    pub report: &'a MonthlyReport,
}

impl<'a> ReportExport<'a> {
    pub fn new(
        reference_date: NaiveDate,
        transactions: &'a [Transaction],
        budgets: &'a [BudgetStatus],
        report: &'a MonthlyReport,
    ) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            app_version: env!("CARGO_PKG_VERSION"),
            reference_date,
            transactions: transactions
                .iter()
                .filter(|t| report.window.contains(t.date))
                .collect(),
            budgets,
            report,
        }
    }
}

pub fn export_report_json<W: Write>(export: &ReportExport<'_>, writer: W) -> TrackerResult<()> {
    serde_json::to_writer_pretty(writer, export).map_err(|e| TrackerError::Export(e.to_string()))
}
