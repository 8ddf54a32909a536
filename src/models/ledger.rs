//! Transaction ledger
//!
//! The ledger is the single source of transactional truth: an append-only
//! collection of validated transactions, queryable by month. Budget status,
//! tax estimates, and investment advice all read from it and never write.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FinsightError, FinsightResult};

use super::money::Money;
use super::period::Period;
use super::transaction::{Transaction, TransactionKind};

/// Append-only collection of transactions for all time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a transaction
    ///
    /// Fails with `InvalidAmount` for a negative amount and
    /// `InvalidCategory` for an empty category; on failure nothing is
    /// recorded. Returns a clone of the stored record.
    pub fn add_transaction(
        &mut self,
        date: NaiveDate,
        amount: Money,
        kind: TransactionKind,
        category: &str,
        description: &str,
    ) -> FinsightResult<Transaction> {
        if amount.is_negative() {
            return Err(FinsightError::negative_amount(amount));
        }
        let category = category.trim();
        if category.is_empty() {
            return Err(FinsightError::empty_category());
        }

        let txn = Transaction::new(date, amount, kind, category, description);
        self.transactions.push(txn.clone());
        Ok(txn)
    }

    /// All transactions, oldest insertion first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of recorded transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the ledger has no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Transactions dated inside the given month, insertion order preserved
    pub fn transactions_in_period(&self, period: Period) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| period.contains(t.date))
            .collect()
    }

    /// Sum of income-kind amounts in the period (zero if none)
    pub fn total_income(&self, period: Period) -> Money {
        self.total_of_kind(period, TransactionKind::Income)
    }

    /// Sum of expense-kind amounts in the period (zero if none)
    pub fn total_expenses(&self, period: Period) -> Money {
        self.total_of_kind(period, TransactionKind::Expense)
    }

    fn total_of_kind(&self, period: Period, kind: TransactionKind) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind && period.contains(t.date))
            .map(|t| t.amount)
            .sum()
    }

    /// Sum of expense amounts in one category for the period
    pub fn spent_in_category(&self, category: &str, period: Period) -> Money {
        self.transactions
            .iter()
            .filter(|t| {
                t.kind.is_expense() && t.category == category && period.contains(t.date)
            })
            .map(|t| t.amount)
            .sum()
    }

    /// Expense totals per category for the period, category-ascending
    pub fn expenses_by_category(&self, period: Period) -> Vec<(String, Money)> {
        let mut totals = std::collections::BTreeMap::new();
        for t in &self.transactions {
            if t.kind.is_expense() && period.contains(t.date) {
                *totals.entry(t.category.clone()).or_insert(Money::zero()) += t.amount;
            }
        }
        totals.into_iter().collect()
    }
}
