//! Transaction model
//!
//! A transaction records one income or expense event. Records are immutable
//! once the ledger accepts them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Whether a transaction adds to or draws from the household's funds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    /// Default when the CLI is given no kind
    #[default]
    Expense,
}

impl TransactionKind {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("expected 'income' or 'expense', got '{}'", other)),
        }
    }
}

/// One recorded income or expense event
///
/// The amount is always non-negative; direction comes from `kind`. The
/// ledger validates fields before a record is constructed, so an existing
/// `Transaction` is always well-formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Date the transaction occurred
    pub date: NaiveDate,

    /// Non-negative amount
    pub amount: Money,

    /// Income or expense
    #[serde(default)]
    pub kind: TransactionKind,

    /// Category name (never empty)
    pub category: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction record
    ///
    /// Callers go through `Ledger::add_transaction`, which validates the
    /// amount and category first.
    pub fn new(
        date: NaiveDate,
        amount: Money,
        kind: TransactionKind,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            amount,
            kind,
            category: category.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.kind {
            TransactionKind::Income => "+",
            TransactionKind::Expense => "-",
        };
        write!(
            f,
            "{} {} {}{} ({})",
            self.date.format("%Y-%m-%d"),
            self.category,
            sign,
            self.amount,
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            sample_date(),
            Money::from_cents(150_000),
            TransactionKind::Expense,
            "Housing",
            "Rent",
        );
        assert_eq!(txn.date, sample_date());
        assert_eq!(txn.amount.cents(), 150_000);
        assert!(txn.kind.is_expense());
        assert_eq!(txn.category, "Housing");
        assert_eq!(txn.description, "Rent");
    }

    #[test]
    fn test_kind_default_is_expense() {
        assert_eq!(TransactionKind::default(), TransactionKind::Expense);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("Expense".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert_eq!(" INCOME ".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert!("savings".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(
            sample_date(),
            Money::from_cents(5000),
            TransactionKind::Expense,
            "Food",
            "Groceries",
        );
        assert_eq!(
            format!("{}", txn),
            "2025-01-15 Food -$50.00 (Groceries)"
        );

        let income = Transaction::new(
            sample_date(),
            Money::from_cents(500_000),
            TransactionKind::Income,
            "Income",
            "Monthly Salary",
        );
        assert!(format!("{}", income).contains("+$5000.00"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let txn = Transaction::new(
            sample_date(),
            Money::from_cents(4200),
            TransactionKind::Income,
            "Income",
            "Refund",
        );
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"kind\":\"income\""));

        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, back);
    }
}
