//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data and analytics results for
//! terminal display, including tables, bars, and change indicators.

pub mod analytics;
pub mod budget;
pub mod report;
pub mod transaction;

pub use analytics::{
    format_alerts, format_goal_progress, format_health_score, format_income_report,
    format_monthly_report, format_opportunities, format_recommendations, format_savings_report,
    format_spending_report,
};
pub use budget::{format_budget_bars, format_budget_table, format_daily_check, format_goal_list};
pub use transaction::{format_balance, format_transaction_register, format_transaction_short};
