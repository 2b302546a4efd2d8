//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod assistant;
pub mod budget;
pub mod data;
pub mod goal;
pub mod report;
pub mod transaction;

pub use assistant::{handle_assistant_command, AssistantCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use data::{handle_data_command, DataCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, GoalType, Money, TransactionKind};

pub(crate) fn parse_amount(s: &str) -> TrackerResult<Money> {
    Money::parse(s).map_err(|e| {
        TrackerError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '50' or '12.50'. Error: {}",
            s, e
        ))
    })
}

pub(crate) fn parse_category(s: &str) -> TrackerResult<Category> {
    s.parse::<Category>()
        .map_err(|e| TrackerError::Validation(e.to_string()))
}

pub(crate) fn parse_kind(s: &str) -> TrackerResult<TransactionKind> {
    s.parse::<TransactionKind>()
        .map_err(|e| TrackerError::Validation(e.to_string()))
}

pub(crate) fn parse_goal_type(s: &str) -> TrackerResult<GoalType> {
    s.parse::<GoalType>()
        .map_err(|e| TrackerError::Validation(e.to_string()))
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(s: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}
