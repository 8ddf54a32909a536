//! Transaction service
//!
//! Business logic for recording and listing ledger transactions. Every
//! accepted mutation is persisted and audit-logged before it is
//! acknowledged.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::FinsightResult;
use crate::models::{Money, Period, Transaction, TransactionKind};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    ///
    /// Validation, the ledger append, the save, and the audit entry all
    /// happen here; a validation failure leaves the ledger untouched.
    pub fn record(
        &self,
        date: NaiveDate,
        amount: Money,
        kind: TransactionKind,
        category: &str,
        description: &str,
    ) -> FinsightResult<Transaction> {
        let txn = self
            .storage
            .ledger
            .add(date, amount, kind, category, description)?;

        self.storage.ledger.save()?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(format!("{} {}", txn.date, txn.category)),
            &txn,
        )?;

        Ok(txn)
    }

    /// List transactions, most recent first
    ///
    /// Optionally restricted to one period and capped at `limit` rows.
    pub fn list(
        &self,
        period: Option<Period>,
        limit: Option<usize>,
    ) -> FinsightResult<Vec<Transaction>> {
        let mut transactions = self.storage.ledger.get_all()?;

        if let Some(period) = period {
            transactions.retain(|t| period.contains(t.date));
        }

        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        if let Some(limit) = limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Total income and expenses for a period
    pub fn totals(&self, period: Period) -> FinsightResult<(Money, Money)> {
        let ledger = self.storage.ledger.snapshot()?;
        Ok((
            ledger.total_income(period),
            ledger.total_expenses(period),
        ))
    }
}
