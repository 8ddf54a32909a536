//! Transaction display formatting

use tabled::settings::{object::Columns, Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Transaction;

use super::format::truncate;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date.to_string(),
            category: txn.category.clone(),
            amount: txn.amount.to_string(),
            kind: txn.kind.to_string(),
            description: truncate(&txn.description, 40),
        }
    }
}

/// Format a list of transactions as a table
pub fn format_transaction_list(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.".to_string();
    }

    let rows: Vec<TransactionRow> = transactions.iter().map(TransactionRow::from).collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()));

    table.to_string()
}

/// One-line confirmation after recording a transaction
pub fn format_transaction_confirmation(txn: &Transaction) -> String {
    let mut line = format!(
        "Recorded {} {} of {} on {}",
        txn.kind, txn.category, txn.amount, txn.date
    );
    if !txn.description.is_empty() {
        line.push_str(&format!(" ({})", txn.description));
    }
    line.push_str(&format!(" [{}]", txn.id));
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;

    fn sample_transaction() -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            Money::from_dollars(45),
            TransactionKind::Expense,
            "Food",
            "weekly groceries",
        )
    }

    #[test]
    fn test_format_list() {
        let transactions = vec![sample_transaction()];
        let output = format_transaction_list(&transactions);

        assert!(output.contains("Date"));
        assert!(output.contains("2025-03-15"));
        assert!(output.contains("Food"));
        assert!(output.contains("$45.00"));
        assert!(output.contains("expense"));
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_transaction_list(&[]);
        assert!(output.contains("No transactions recorded"));
    }

    #[test]
    fn test_confirmation_line() {
        let txn = sample_transaction();
        let line = format_transaction_confirmation(&txn);

        assert!(line.contains("Recorded expense Food of $45.00 on 2025-03-15"));
        assert!(line.contains("weekly groceries"));
        assert!(line.contains("txn-"));
    }

    #[test]
    fn test_long_description_truncated() {
        let mut txn = sample_transaction();
        txn.description = "x".repeat(100);
        let output = format_transaction_list(&[txn]);
        assert!(!output.contains(&"x".repeat(50)));
    }
}
