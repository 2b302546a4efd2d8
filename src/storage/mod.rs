//! Storage layer for the finance tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. `Storage` is also the ledger source the CLI hands to analytics.

pub mod budget;
pub mod file_io;
pub mod goals;
pub mod transactions;

pub use budget::BudgetRepository;
pub use file_io::{read_json, write_atomic, write_json_atomic};
pub use goals::GoalRepository;
pub use transactions::TransactionRepository;

use tracing::debug;

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::ledger::LedgerSource;
use crate::models::{BudgetMap, GoalMap, Transaction};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TrackerPaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
    pub goals: GoalRepository,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: TrackerPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            goals: GoalRepository::new(paths.goals_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), TrackerError> {
        self.transactions.load()?;
        self.budgets.load()?;
        self.goals.load()?;
        debug!(
            transactions = self.transactions.count()?,
            budgets = self.budgets.count()?,
            "storage loaded"
        );
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), TrackerError> {
        self.transactions.save()?;
        self.budgets.save()?;
        self.goals.save()?;
        Ok(())
    }
}

impl LedgerSource for Storage {
    fn transactions(&self) -> Result<Vec<Transaction>, TrackerError> {
        self.transactions.get_all()
    }

    fn budgets(&self) -> Result<BudgetMap, TrackerError> {
        self.budgets.get_all()
    }

    fn goals(&self) -> Result<GoalMap, TrackerError> {
        self.goals.get_all()
    }
}
