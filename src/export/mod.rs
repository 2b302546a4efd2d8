//! Export module for the finance tracker
//!
//! - CSV: transactions in a spreadsheet-friendly layout, plus import
//! - JSON: transactions and the monthly report for other tools

pub mod csv;
pub mod json;

pub use self::csv::{
    export_transactions_csv, import_transactions_csv, CsvImport, SkipReason, SkippedRow,
};
pub use json::{export_report_json, export_transactions_json, ReportExport, EXPORT_SCHEMA_VERSION};
