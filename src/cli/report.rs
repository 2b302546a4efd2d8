//! CLI commands for reports
//!
//! Spending, income, savings, health and the comprehensive monthly summary.

use chrono::NaiveDate;
use clap::Subcommand;

use super::parse_date;
use crate::config::settings::Settings;
use crate::display::analytics::{
    format_health_score, format_income_report, format_monthly_report, format_savings_report,
    format_spending_report,
};
use crate::error::{TrackerError, TrackerResult};
use crate::models::DateWindow;
use crate::services::AnalyticsService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Spending by category
    Spending {
        /// Month to report on (e.g., "2025-01"), defaults to the reference month
        #[arg(short, long, conflicts_with_all = ["all", "start", "end"])]
        month: Option<String>,

        /// Cover every transaction
        #[arg(short, long)]
        all: bool,

        /// Start date (YYYY-MM-DD)
        #[arg(short, long, requires = "end", conflicts_with = "all")]
        start: Option<String>,

        /// End date, inclusive (YYYY-MM-DD)
        #[arg(short, long, requires = "start")]
        end: Option<String>,

        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,
    },

    /// Income sources for the reference month
    Income,

    /// Savings, savings rate and recent trend
    Savings,

    /// Financial health score
    Health,

    /// Comprehensive monthly report
    #[command(alias = "monthly")]
    Summary,
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    reference: NaiveDate,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let service = AnalyticsService::new(storage);

    match cmd {
        ReportCommands::Spending {
            month,
            all,
            start,
            end,
            top,
        } => {
            let window = spending_window(reference, month, all, start, end)?;
            let report = service.spending(window, reference)?;
            print!("{}", format_spending_report(&report, top, symbol));
        }
        ReportCommands::Income => {
            print!("{}", format_income_report(&service.income(reference)?, symbol));
        }
        ReportCommands::Savings => {
            print!("{}", format_savings_report(&service.savings(reference)?, symbol));
        }
        ReportCommands::Health => {
            print!("{}", format_health_score(&service.health(reference)?));
        }
        ReportCommands::Summary => {
            print!("{}", format_monthly_report(&service.monthly_report(reference)?, symbol));
        }
    }

    Ok(())
}

fn spending_window(
    reference: NaiveDate,
    month: Option<String>,
    all: bool,
    start: Option<String>,
    end: Option<String>,
) -> TrackerResult<DateWindow> {
    if all {
        return Ok(DateWindow::unbounded());
    }

    if let Some(month) = month {
        return DateWindow::parse_month(&month).map_err(|e| {
            TrackerError::Validation(format!(
                "Invalid month format: {}. Use YYYY-MM (e.g., 2025-01)",
                e
            ))
        });
    }

    match (start, end) {
        (Some(start), Some(end)) => {
            let start = parse_date(&start)?;
            let last = parse_date(&end)?;
            let end = last
                .succ_opt()
                .ok_or_else(|| TrackerError::Validation(format!("Date out of range: {}", last)))?;
            DateWindow::new(start, end)
                .map_err(|e| TrackerError::Validation(e.to_string()))
        }
        _ => Ok(DateWindow::month_containing(reference)),
    }
}
