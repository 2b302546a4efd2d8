//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json. Entries
//! keep the order they were recorded in.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::models::Transaction;

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TransactionData {
    #[serde(default)]
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), TrackerError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data.transactions;

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = TransactionData {
            transactions: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// All transactions in recording order
    pub fn get_all(&self) -> Result<Vec<Transaction>, TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    /// All transactions, newest date first
    pub fn newest_first(&self) -> Result<Vec<Transaction>, TrackerError> {
        let mut transactions = self.get_all()?;
        // Stable sort keeps later-recorded entries first within a day
        transactions.reverse();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    /// Append a transaction
    pub fn insert(&self, txn: Transaction) -> Result<(), TrackerError> {
        self.extend(std::iter::once(txn)).map(|_| ())
    }

    /// Append several transactions, returning how many were added
    pub fn extend<I>(&self, txns: I) -> Result<usize, TrackerError>
    where
        I: IntoIterator<Item = Transaction>,
    {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let before = data.len();
        data.extend(txns);
        Ok(data.len() - before)
    }

    pub fn count(&self) -> Result<usize, TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
