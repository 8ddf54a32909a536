//! Budget tracking
//!
//! Per-category monthly spending limits and the derived status of spending
//! against them. Limits have no history: setting a category again replaces
//! its previous limit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{FinsightError, FinsightResult};

use super::ledger::Ledger;
use super::money::Money;
use super::period::Period;

/// Per-category budget limits
///
/// Entries are keyed by category name; the map keeps them sorted so status
/// output is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetTracker {
    entries: BTreeMap<String, Money>,
}

impl BudgetTracker {
    /// Create a tracker with no entries
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the monthly limit for a category
    ///
    /// Fails with `InvalidAmount` for a negative limit and
    /// `InvalidCategory` for an empty category; on failure the entry map is
    /// untouched.
    pub fn set_budget(&mut self, category: &str, limit: Money) -> FinsightResult<()> {
        if limit.is_negative() {
            return Err(FinsightError::negative_amount(limit));
        }
        let category = category.trim();
        if category.is_empty() {
            return Err(FinsightError::empty_category());
        }

        self.entries.insert(category.to_string(), limit);
        Ok(())
    }

    /// The limit set for a category, if any
    pub fn limit(&self, category: &str) -> Option<Money> {
        self.entries.get(category).copied()
    }

    /// All entries, category-ascending
    pub fn entries(&self) -> impl Iterator<Item = (&str, Money)> {
        self.entries.iter().map(|(c, m)| (c.as_str(), *m))
    }

    /// Number of budgeted categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any category has a budget
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Spending status for every budgeted category in the period
    ///
    /// Categories without an entry are omitted; output is ordered by
    /// category name ascending.
    pub fn status(&self, ledger: &Ledger, period: Period) -> Vec<BudgetStatus> {
        self.entries
            .iter()
            .map(|(category, limit)| {
                let spent = ledger.spent_in_category(category, period);
                BudgetStatus::new(category.clone(), *limit, spent)
            })
            .collect()
    }
}

/// Spending measured against one category's limit (derived, never stored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
    /// limit − spent; negative when over budget
    pub remaining: Money,
    pub over_budget: bool,
}

impl BudgetStatus {
    pub fn new(category: String, limit: Money, spent: Money) -> Self {
        Self {
            category,
            limit,
            spent,
            remaining: limit - spent,
            over_budget: spent > limit,
        }
    }

    /// Spent as a percentage of the limit; `None` when the limit is zero
    pub fn percent_used(&self) -> Option<f64> {
        if self.limit.is_zero() {
            None
        } else {
            Some(self.spent.cents() as f64 / self.limit.cents() as f64 * 100.0)
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} ({} remaining)",
            self.category, self.spent, self.limit, self.remaining
        )
    }
}
