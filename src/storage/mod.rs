//! Storage layer for finsight
//!
//! Provides JSON file storage with atomic writes, one lock per store,
//! and automatic directory creation.

pub mod budgets;
pub mod file_io;
pub mod ledger;
pub mod profile;

pub use budgets::BudgetRepository;
pub use file_io::{json_file_valid, read_json, write_json_atomic};
pub use ledger::LedgerRepository;
pub use profile::ProfileRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::FinsightPaths;
use crate::error::FinsightResult;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinsightPaths,
    pub ledger: LedgerRepository,
    pub budgets: BudgetRepository,
    pub profile: ProfileRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FinsightPaths) -> FinsightResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.ledger_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            profile: ProfileRepository::new(paths.profile_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinsightPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&self) -> FinsightResult<()> {
        self.ledger.load()?;
        self.budgets.load()?;
        self.profile.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> FinsightResult<()> {
        self.ledger.save()?;
        self.budgets.save()?;
        self.profile.save()?;
        Ok(())
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> FinsightResult<()> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update operation in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> FinsightResult<()> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(temp_dir.path().join("exports").exists());
        assert!(!storage.audit().exists());
    }

    #[test]
    fn test_load_and_save_all() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path().to_path_buf());

        let storage = Storage::new(paths.clone()).unwrap();
        storage.load_all().unwrap();
        storage
            .ledger
            .add(
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                Money::from_dollars(100),
                TransactionKind::Expense,
                "Food",
                "",
            )
            .unwrap();
        storage.budgets.set("Food", Money::from_dollars(400)).unwrap();
        storage.save_all().unwrap();

        let storage2 = Storage::new(paths).unwrap();
        storage2.load_all().unwrap();
        assert_eq!(storage2.ledger.count().unwrap(), 1);
        assert_eq!(storage2.budgets.count().unwrap(), 1);
    }

    #[test]
    fn test_audit_helpers_append() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage
            .log_create(
                EntityType::Budget,
                "Food",
                None,
                &serde_json::json!({"limit": 40000}),
            )
            .unwrap();

        assert_eq!(storage.audit().entry_count().unwrap(), 1);
    }
}
