//! Finance Tracker - personal finance analytics from the command line
//!
//! This library records income and expenses against a closed set of
//! categories, tracks monthly category budgets and goals, and derives
//! reports from the ledger: category breakdowns, period comparisons, a
//! financial health score, budget alerts and recommendations.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data models (money, categories, transactions, budgets, goals)
//! - `ledger`: The `LedgerSource` boundary and validated snapshots
//! - `analytics`: Pure analytics over a snapshot and a reference date
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `storage`: JSON file storage layer
//! - `services`: Recording and query services
//! - `export`: CSV and JSON import/export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `fintrack` binary
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use finance_tracker::analytics::score;
//! use finance_tracker::models::{BudgetMap, Category, Money, Transaction};
//!
//! let day = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
//! let ledger = vec![
//!     Transaction::income(day, Category::Salary, "", Money::from_minor(100_000)),
//!     Transaction::expense(day, Category::Food, "", Money::from_minor(30_000)),
//! ];
//! let health = score(&ledger, &BudgetMap::new(), day);
//! assert!(health.total_score <= 100);
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod services;
pub mod storage;

pub use error::TrackerError;
