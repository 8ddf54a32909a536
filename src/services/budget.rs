//! Budget service
//!
//! Business logic for setting monthly category limits and computing
//! budget status against the ledger.

use crate::audit::EntityType;
use crate::error::FinsightResult;
use crate::models::{BudgetStatus, Money, Period};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the monthly limit for a category
    ///
    /// Replaces any existing limit. The audit log records a create for
    /// a new category and an update (with the old limit) otherwise.
    pub fn set_budget(&self, category: &str, limit: Money) -> FinsightResult<Money> {
        let previous = self.storage.budgets.set(category, limit)?;
        self.storage.budgets.save()?;

        let category = category.trim();
        match previous {
            None => {
                self.storage.log_create(
                    EntityType::Budget,
                    category,
                    Some(category.to_string()),
                    &limit,
                )?;
            }
            Some(old_limit) => {
                self.storage.log_update(
                    EntityType::Budget,
                    category,
                    Some(category.to_string()),
                    &old_limit,
                    &limit,
                    Some(format!("limit: {} -> {}", old_limit, limit)),
                )?;
            }
        }

        Ok(limit)
    }

    /// The limit for one category, if set
    pub fn limit(&self, category: &str) -> FinsightResult<Option<Money>> {
        self.storage.budgets.get(category)
    }

    /// Status of every budgeted category for a period
    ///
    /// One row per budgeted category in ascending category order,
    /// including categories with no spending and categories with a zero
    /// limit.
    pub fn status(&self, period: Period) -> FinsightResult<Vec<BudgetStatus>> {
        let ledger = self.storage.ledger.snapshot()?;
        let tracker = self.storage.budgets.snapshot()?;
        Ok(tracker.status(&ledger, period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FinsightPaths;
    use crate::error::FinsightError;
    use crate::models::TransactionKind;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_set_budget_persists_and_audits() {
        let (temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set_budget("Food", Money::from_dollars(400)).unwrap();
        assert_eq!(storage.audit().entry_count().unwrap(), 1);

        let paths = FinsightPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage2 = Storage::new(paths).unwrap();
        storage2.load_all().unwrap();
        assert_eq!(
            storage2.budgets.get("Food").unwrap(),
            Some(Money::from_dollars(400))
        );
    }

    #[test]
    fn test_replacing_limit_logs_update() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set_budget("Food", Money::from_dollars(400)).unwrap();
        service.set_budget("Food", Money::from_dollars(450)).unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, crate::audit::Operation::Create);
        assert_eq!(entries[1].operation, crate::audit::Operation::Update);
        assert!(entries[1]
            .diff_summary
            .as_deref()
            .unwrap()
            .contains("$400.00 -> $450.00"));
    }

    #[test]
    fn test_set_budget_rejects_invalid() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let err = service
            .set_budget("Food", Money::from_cents(-1))
            .unwrap_err();
        assert!(matches!(err, FinsightError::InvalidAmount(_)));

        let err = service.set_budget("", Money::from_dollars(1)).unwrap_err();
        assert!(matches!(err, FinsightError::InvalidCategory(_)));

        assert_eq!(storage.budgets.count().unwrap(), 0);
        assert_eq!(storage.audit().entry_count().unwrap(), 0);
    }

    #[test]
    fn test_status_against_ledger() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        storage
            .ledger
            .add(
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                Money::from_dollars(3000),
                TransactionKind::Expense,
                "Housing",
                "rent",
            )
            .unwrap();
        service
            .set_budget("Housing", Money::from_dollars(2500))
            .unwrap();

        let period = Period::new(2025, 3).unwrap();
        let status = service.status(period).unwrap();

        assert_eq!(status.len(), 1);
        assert_eq!(status[0].spent, Money::from_dollars(3000));
        assert_eq!(status[0].remaining, Money::from_dollars(-500));
        assert!(status[0].over_budget);
    }

    #[test]
    fn test_status_empty_without_budgets() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let period = Period::new(2025, 3).unwrap();
        assert!(service.status(period).unwrap().is_empty());
    }
}
