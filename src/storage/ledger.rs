//! Ledger repository for JSON storage
//!
//! Manages loading and saving the transaction ledger to ledger.json.
//! All access goes through a single RwLock, so validate-then-insert is
//! atomic with respect to concurrent callers.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::{FinsightError, FinsightResult};
use crate::models::{Ledger, Money, Transaction, TransactionKind};

use super::file_io::{read_json, write_json_atomic};

/// Repository for ledger persistence
pub struct LedgerRepository {
    path: PathBuf,
    data: RwLock<Ledger>,
}

impl LedgerRepository {
    /// Create a new ledger repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Ledger::default()),
        }
    }

    /// Load the ledger from disk
    pub fn load(&self) -> FinsightResult<()> {
        let loaded: Ledger = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = loaded;

        Ok(())
    }

    /// Save the ledger to disk
    pub fn save(&self) -> FinsightResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Validate and append a transaction
    ///
    /// Validation and the insert run under the same write lock, so a
    /// rejected transaction can never partially mutate the ledger and
    /// concurrent appends serialize cleanly.
    pub fn add(
        &self,
        date: NaiveDate,
        amount: Money,
        kind: TransactionKind,
        category: &str,
        description: &str,
    ) -> FinsightResult<Transaction> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.add_transaction(date, amount, kind, category, description)
    }

    /// All transactions in insertion order
    pub fn get_all(&self) -> FinsightResult<Vec<Transaction>> {
        let data = self
            .data
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.transactions().to_vec())
    }

    /// A consistent copy of the whole ledger
    pub fn snapshot(&self) -> FinsightResult<Ledger> {
        let data = self
            .data
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Number of recorded transactions
    pub fn count(&self) -> FinsightResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, LedgerRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        let repo = LedgerRepository::new(path);
        (temp_dir, repo)
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_add_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let txn = repo
            .add(
                date(15),
                Money::from_dollars(45),
                TransactionKind::Expense,
                "Food",
                "groceries",
            )
            .unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, txn.id);
        assert_eq!(all[0].amount, Money::from_dollars(45));
    }

    #[test]
    fn test_rejected_add_leaves_store_unchanged() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let err = repo
            .add(
                date(15),
                Money::from_cents(-100),
                TransactionKind::Expense,
                "Food",
                "",
            )
            .unwrap_err();
        assert!(matches!(err, FinsightError::InvalidAmount(_)));
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let txn = repo
            .add(
                date(1),
                Money::from_dollars(5000),
                TransactionKind::Income,
                "Income",
                "salary",
            )
            .unwrap();
        repo.save().unwrap();

        let repo2 = LedgerRepository::new(temp_dir.path().join("ledger.json"));
        repo2.load().unwrap();

        let all = repo2.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, txn.id);
        assert_eq!(all[0].kind, TransactionKind::Income);
    }

    #[test]
    fn test_insertion_order_preserved_across_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        // Out of date order on purpose
        for (day, desc) in [(20, "first"), (5, "second"), (12, "third")] {
            repo.add(
                date(day),
                Money::from_dollars(10),
                TransactionKind::Expense,
                "Other",
                desc,
            )
            .unwrap();
        }
        repo.save().unwrap();

        let repo2 = LedgerRepository::new(temp_dir.path().join("ledger.json"));
        repo2.load().unwrap();

        let descriptions: Vec<String> = repo2
            .get_all()
            .unwrap()
            .iter()
            .map(|t| t.description.clone())
            .collect();
        assert_eq!(descriptions, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_snapshot_is_independent_copy() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let snapshot = repo.snapshot().unwrap();
        repo.add(
            date(2),
            Money::from_dollars(1),
            TransactionKind::Expense,
            "Other",
            "",
        )
        .unwrap();

        assert!(snapshot.is_empty());
        assert_eq!(repo.count().unwrap(), 1);
    }
}
