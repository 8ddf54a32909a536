//! Budget repository for JSON storage
//!
//! Manages loading and saving per-category monthly limits to
//! budgets.json.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{FinsightError, FinsightResult};
use crate::models::{BudgetTracker, Money};

use super::file_io::{read_json, write_json_atomic};

/// Repository for budget limit persistence
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<BudgetTracker>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BudgetTracker::default()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> FinsightResult<()> {
        let loaded: BudgetTracker = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = loaded;

        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> FinsightResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Validate and set a category limit, returning the previous one
    ///
    /// Runs under a single write lock so the read of the old limit and
    /// the replacement are one atomic step.
    pub fn set(&self, category: &str, limit: Money) -> FinsightResult<Option<Money>> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let previous = data.limit(category.trim());
        data.set_budget(category, limit)?;
        Ok(previous)
    }

    /// The limit for one category, if set
    pub fn get(&self, category: &str) -> FinsightResult<Option<Money>> {
        let data = self
            .data
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.limit(category))
    }

    /// All (category, limit) pairs in category order
    pub fn entries(&self) -> FinsightResult<Vec<(String, Money)>> {
        let data = self
            .data
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .entries()
            .map(|(category, limit)| (category.to_string(), limit))
            .collect())
    }

    /// A consistent copy of the whole tracker
    pub fn snapshot(&self) -> FinsightResult<BudgetTracker> {
        let data = self
            .data
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Number of budgeted categories
    pub fn count(&self) -> FinsightResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
