//! Core data models for the finance tracker
//!
//! This module contains the data structures the rest of the crate works on:
//! transactions, categories, budgets, goals, money and date windows.

pub mod budget;
pub mod category;
pub mod goal;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{Budget, BudgetMap, BudgetValidationError};
pub use category::{Category, CategoryParseError};
pub use goal::{Goal, GoalMap, GoalType, GoalValidationError};
pub use money::{Money, MoneyParseError};
pub use period::{DateWindow, PeriodParseError};
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
