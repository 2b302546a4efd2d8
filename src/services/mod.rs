//! Service layer for the finance tracker
//!
//! `LedgerService` validates and records entries on top of storage;
//! `AnalyticsService` answers read-only questions about a ledger source.

pub mod analytics;
pub mod ledger;

pub use analytics::AnalyticsService;
pub use ledger::{LedgerService, TransactionFilter};
