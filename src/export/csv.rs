//! CSV export functionality
//!
//! Exports the transaction ledger in spreadsheet-compatible form. Budgets
//! and the profile only exist in the JSON/YAML full exports.

use crate::error::{FinsightError, FinsightResult};
use crate::storage::Storage;
use std::io::Write;

/// Export all transactions to CSV, insertion order
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: &mut W) -> FinsightResult<()> {
    let transactions = storage.ledger.get_all()?;

    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["ID", "Date", "Kind", "Category", "Description", "Amount"])
        .map_err(|e| FinsightError::Export(e.to_string()))?;

    for txn in transactions {
        wtr.write_record([
            txn.id.to_string(),
            txn.date.to_string(),
            txn.kind.to_string(),
            txn.category.clone(),
            txn.description.clone(),
            format!("{:.2}", txn.amount.cents() as f64 / 100.0),
        ])
        .map_err(|e| FinsightError::Export(e.to_string()))?;
    }

    wtr.flush()
        .map_err(|e| FinsightError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FinsightPaths;
    use crate::models::{Money, TransactionKind};
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
    fn test_export_transactions_csv() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .ledger
            .add(
                NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
                Money::from_cents(12_34),
                TransactionKind::Expense,
                "Food",
                "lunch",
            )
            .unwrap();

        let mut csv_output = Vec::new();
        export_transactions_csv(&storage, &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.starts_with("ID,Date,Kind,Category,Description,Amount"));
        assert!(csv_string.contains("2025-01-15"));
        assert!(csv_string.contains("expense"));
        assert!(csv_string.contains("12.34"));
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .ledger
            .add(
                NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
                Money::from_cents(500),
                TransactionKind::Expense,
                "Food",
                "bread, milk, eggs",
            )
            .unwrap();

        let mut csv_output = Vec::new();
        export_transactions_csv(&storage, &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.contains("\"bread, milk, eggs\""));
    }

    #[test]
    fn test_empty_ledger_writes_header_only() {
        let (_temp_dir, storage) = create_test_storage();

        let mut csv_output = Vec::new();
        export_transactions_csv(&storage, &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert_eq!(csv_string.lines().count(), 1);
    }
}
