//! Transaction CLI commands
//!
//! Implements CLI commands for recording and listing transactions.

use chrono::NaiveDate;
use clap::Subcommand;

use super::{parse_amount, parse_category, parse_date, parse_kind};
use crate::config::settings::Settings;
use crate::display::transaction::{
    format_balance, format_transaction_register, format_transaction_short,
};
use crate::error::TrackerResult;
use crate::models::{DateWindow, Transaction};
use crate::services::{AnalyticsService, LedgerService, TransactionFilter};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an income or expense
    Add {
        /// "income" or "expense"
        kind: String,
        /// Amount (e.g., "50" or "12.50")
        amount: String,
        /// Category name (e.g., "Food", "Salary")
        category: String,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to the reference date
        #[arg(long)]
        on: Option<String>,
    },
    /// List recent transactions, newest first
    List {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Only show "income" or "expense" transactions
        #[arg(short, long)]
        kind: Option<String>,
        /// Only show the last N days, ending on the reference date
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        days: Option<u32>,
    },
    /// Show income minus expenses
    Balance {
        /// Cover every transaction instead of the reference month
        #[arg(long)]
        all: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    reference: NaiveDate,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            description,
            on,
        } => {
            let kind = parse_kind(&kind)?;
            let amount = parse_amount(&amount)?;
            let category = parse_category(&category)?;
            let date = match on {
                Some(s) => parse_date(&s)?,
                None => reference,
            };

            let description = description.unwrap_or_default();
            let txn = Transaction::new(date, kind, category, description, amount);
            let txn = LedgerService::new(storage).add_transaction(txn)?;

            println!("Recorded: {}", format_transaction_short(&txn, symbol));
        }

        TransactionCommands::List { limit, kind, days } => {
            let mut filter =
                TransactionFilter::new().limit(limit.unwrap_or(settings.recent_transactions_limit));
            if let Some(kind) = kind {
                filter = filter.kind(parse_kind(&kind)?);
            }
            if let Some(days) = days {
                filter = filter.last_days(reference, days);
            }

            let txns = LedgerService::new(storage).list_transactions(&filter)?;
            print!("{}", format_transaction_register(&txns, symbol));
        }

        TransactionCommands::Balance { all } => {
            let window = if all {
                DateWindow::unbounded()
            } else {
                DateWindow::month_containing(reference)
            };
            let totals = AnalyticsService::new(storage).balance(window)?;
            print!("{}", format_balance(&totals, symbol));
        }
    }

    Ok(())
}
