//! Goal repository for JSON storage

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::models::{Goal, GoalMap, GoalType};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct GoalData {
    #[serde(default)]
    goals: Vec<Goal>,
}

/// Repository for goal persistence, one goal per type
pub struct GoalRepository {
    path: PathBuf,
    data: RwLock<GoalMap>,
}

impl GoalRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(GoalMap::new()),
        }
    }

    pub fn load(&self) -> Result<(), TrackerError> {
        let file_data: GoalData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data
            .goals
            .into_iter()
            .map(|goal| (goal.goal_type, goal))
            .collect();

        Ok(())
    }

    pub fn save(&self) -> Result<(), TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = GoalData {
            goals: data.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get_all(&self) -> Result<GoalMap, TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    /// Insert or replace the goal of this type
    pub fn upsert(&self, goal: Goal) -> Result<Option<Goal>, TrackerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        Ok(data.insert(goal.goal_type, goal))
    }

    pub fn delete(&self, goal_type: GoalType) -> Result<Option<Goal>, TrackerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        Ok(data.remove(&goal_type))
    }
}
