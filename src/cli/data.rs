//! CLI commands for data export, import and validation
//!
//! Exports are written atomically so an interrupted export never leaves a
//! half-written file behind.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;
use tracing::warn;

use crate::error::{TrackerError, TrackerResult};
use crate::export::{
    export_report_json, export_transactions_csv, export_transactions_json,
    import_transactions_csv, ReportExport,
};
use crate::ledger::find_issues;
use crate::services::{AnalyticsService, LedgerService};
use crate::storage::{write_atomic, Storage};

/// Data subcommands
#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Export all transactions to CSV
    ExportCsv {
        /// Output file path
        output: PathBuf,
    },

    /// Export all transactions to JSON
    ExportJson {
        /// Output file path
        output: PathBuf,
    },

    /// Export the monthly report, budget table and the month's transactions
    ExportReport {
        /// Output file path
        output: PathBuf,
    },

    /// Import transactions from a CSV file (Date,Type,Category,Description,Amount)
    ImportCsv {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Check stored transactions, budgets and goals, listing every problem
    Validate,
}

/// Handle data commands
pub fn handle_data_command(
    storage: &Storage,
    reference: NaiveDate,
    cmd: DataCommands,
) -> TrackerResult<()> {
    match cmd {
        DataCommands::ExportCsv { output } => {
            let txns = storage.transactions.get_all()?;
            let mut count = 0;
            write_atomic(&output, "csv", |writer| {
                count = export_transactions_csv(&txns, writer)?;
                Ok(())
            })?;
            println!("Exported {} transactions to: {}", count, output.display());
        }

        DataCommands::ExportJson { output } => {
            let txns = storage.transactions.get_all()?;
            let mut count = 0;
            write_atomic(&output, "json", |writer| {
                count = export_transactions_json(&txns, writer)?;
                Ok(())
            })?;
            println!("Exported {} transactions to: {}", count, output.display());
        }

        DataCommands::ExportReport { output } => {
            let service = AnalyticsService::new(storage);
            let report = service.monthly_report(reference)?;
            let budgets = service.budget_status(reference)?;
            let txns = storage.transactions.get_all()?;

            let export = ReportExport::new(reference, &txns, &budgets, &report);
            write_atomic(&output, "json", |writer| export_report_json(&export, writer))?;
            println!(
                "Report for {} exported to: {}",
                report.window.month_label(),
                output.display()
            );
        }

        DataCommands::ImportCsv { file } => {
            let handle = File::open(&file).map_err(|e| {
                TrackerError::Import(format!("Failed to open {}: {}", file.display(), e))
            })?;

            let existing = storage.transactions.get_all()?;
            let parsed = import_transactions_csv(BufReader::new(handle), &existing)?;

            for skipped in &parsed.skipped {
                warn!(row = skipped.row, reason = %skipped.reason, "skipping CSV row");
                println!("  Row {}: skipped ({})", skipped.row, skipped.reason);
            }

            let imported = if parsed.transactions.is_empty() {
                0
            } else {
                LedgerService::new(storage).import_transactions(parsed.transactions)?
            };

            println!(
                "Imported {} transactions, skipped {} rows",
                imported,
                parsed.skipped.len()
            );
        }

        DataCommands::Validate => {
            let txns = storage.transactions.get_all()?;
            let budgets = storage.budgets.get_all()?;
            let goals = storage.goals.get_all()?;

            let issues = find_issues(&txns, &budgets, &goals);
            if !issues.is_empty() {
                println!("Data validation found {} issue(s):", issues.len());
                for issue in &issues {
                    warn!(%issue, "invalid ledger entry");
                    println!("  - {}", issue);
                }
                return Err(TrackerError::Validation(format!(
                    "{} invalid ledger entries",
                    issues.len()
                )));
            }

            println!(
                "Data validation complete: no issues found ({} transactions, {} budgets, {} goals)",
                txns.len(),
                budgets.len(),
                goals.len()
            );
        }
    }

    Ok(())
}
