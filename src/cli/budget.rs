//! Budget CLI commands
//!
//! Implements CLI commands for monthly category budgets.

use chrono::NaiveDate;
use clap::Subcommand;

use super::{parse_amount, parse_category};
use crate::config::settings::Settings;
use crate::display::budget::{format_budget_bars, format_budget_table};
use crate::error::TrackerResult;
use crate::models::DateWindow;
use crate::services::{AnalyticsService, LedgerService};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set or replace the monthly budget for an expense category
    Set {
        /// Category name
        category: String,
        /// Monthly amount (e.g., "300" or "300.00")
        amount: String,
    },

    /// Show budgets against this month's spending
    List {
        /// Also draw utilization bars
        #[arg(long)]
        bars: bool,
    },

    /// Remove a category's budget
    Remove {
        /// Category name
        category: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    reference: NaiveDate,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let service = LedgerService::new(storage);

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let category = parse_category(&category)?;
            let amount = parse_amount(&amount)?;
            let budget = service.set_budget(category, amount)?;
            println!(
                "Budget for '{}' set to {}",
                budget.category,
                budget.monthly_amount.format_with_symbol(symbol)
            );
        }

        BudgetCommands::List { bars } => {
            let rows = AnalyticsService::new(storage).budget_status(reference)?;
            println!("Budgets for {}", DateWindow::month_containing(reference));
            println!("{}", "=".repeat(76));
            print!("{}", format_budget_table(&rows, symbol));
            if bars && !rows.is_empty() {
                println!();
                print!("{}", format_budget_bars(&rows));
            }
        }

        BudgetCommands::Remove { category } => {
            let category = parse_category(&category)?;
            let removed = service.remove_budget(category)?;
            println!("Removed budget for '{}'", removed.category);
        }
    }

    Ok(())
}
