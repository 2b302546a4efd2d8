//! Budget repository for JSON storage
//!
//! Budgets are stored as a list in budgets.json and held in memory keyed by
//! category. A category listed twice keeps its last entry.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::TrackerError;
use crate::models::{Budget, BudgetMap, Category};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<Budget>,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<BudgetMap>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BudgetMap::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), TrackerError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for budget in file_data.budgets {
            if data.insert(budget.category, budget).is_some() {
                warn!(category = %budget.category, "duplicate budget entry, keeping the last one");
            }
        }

        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = BudgetData {
            budgets: data.values().copied().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, category: Category) -> Result<Option<Budget>, TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.get(&category).copied())
    }

    /// Every budget, keyed by category
    pub fn get_all(&self) -> Result<BudgetMap, TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    /// Insert or replace the budget for its category, returning the old one
    pub fn upsert(&self, budget: Budget) -> Result<Option<Budget>, TrackerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        Ok(data.insert(budget.category, budget))
    }

    /// Remove a category's budget, returning it if there was one
    pub fn delete(&self, category: Category) -> Result<Option<Budget>, TrackerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        Ok(data.remove(&category))
    }

    pub fn count(&self) -> Result<usize, TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
