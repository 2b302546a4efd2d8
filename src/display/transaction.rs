//! Transaction display formatting
//!
//! Formats the transaction register and balance summaries for terminal output.

use super::report::{format_percentage, separator, truncate};
use crate::analytics::PeriodTotals;
use crate::models::{Transaction, TransactionKind};

/// Format a transaction register, one row per entry
pub fn format_transaction_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();

    output.push_str(&format!(
        "{:10}  {:7}  {:13}  {:24}  {:>14}\n",
        "Date", "Type", "Category", "Description", "Amount"
    ));
    output.push_str(&separator(76));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    output
}

/// Format a single register row
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    let signed = match txn.kind {
        TransactionKind::Income => txn.amount,
        TransactionKind::Expense => -txn.amount,
    };

    format!(
        "{}  {:7}  {:13}  {:24}  {:>14}",
        txn.date.format("%Y-%m-%d"),
        txn.kind,
        txn.category,
        truncate(&txn.description, 24),
        signed.format_with_symbol(symbol)
    )
}

/// One line confirmation after recording a transaction
pub fn format_transaction_short(txn: &Transaction, symbol: &str) -> String {
    let description = if txn.description.is_empty() {
        String::new()
    } else {
        format!(" ({})", txn.description)
    };

    format!(
        "{} of {} in '{}' on {}{}",
        txn.kind,
        txn.amount.format_with_symbol(symbol),
        txn.category,
        txn.date.format("%Y-%m-%d"),
        description
    )
}

/// Format income, expenses and the balance for a window
pub fn format_balance(totals: &PeriodTotals, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Balance for {}\n", totals.window));
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!(
        "{:<22} {:>17}\n",
        "Total Income:",
        totals.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<22} {:>17}\n",
        "Total Expenses:",
        totals.expenses.format_with_symbol(symbol)
    ));
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!(
        "{:<22} {:>17}\n",
        "Balance:",
        totals.savings().format_with_symbol(symbol)
    ));

    if let Some(rate) = totals.savings_rate() {
        output.push_str(&format!("{:<22} {:>17}\n", "Savings Rate:", format_percentage(rate)));
    }

    output
}
