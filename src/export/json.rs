//! JSON export functionality
//!
//! Exports the complete data set to JSON with schema versioning.

use crate::error::{FinsightError, FinsightResult};
use crate::models::{InvestmentProfile, Money, Transaction};
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data set export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All transactions, insertion order
    pub transactions: Vec<Transaction>,

    /// Budget limits keyed by category
    pub budgets: BTreeMap<String, Money>,

    /// Investment profile, if one has been set
    pub profile: Option<InvestmentProfile>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of transactions
    pub transaction_count: usize,

    /// Number of budgeted categories
    pub budget_count: usize,

    /// Whether an investment profile is included
    pub has_profile: bool,

    /// Date of the earliest transaction
    pub earliest_transaction: Option<String>,

    /// Date of the latest transaction
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> FinsightResult<Self> {
        let transactions = storage.ledger.get_all()?;
        let budgets: BTreeMap<String, Money> =
            storage.budgets.entries()?.into_iter().collect();
        let profile = storage.profile.get()?;

        let earliest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .min()
            .map(|d| d.to_string());

        let latest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            budget_count: budgets.len(),
            has_profile: profile.is_some(),
            earliest_transaction,
            latest_transaction,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            budgets,
            profile,
            metadata,
        })
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        // The ledger only ever holds validated entries; a file that fails
        // these checks was edited by hand or truncated.
        for txn in &self.transactions {
            if txn.amount.is_negative() {
                return Err(format!(
                    "Transaction {} has a negative amount {}",
                    txn.id, txn.amount
                ));
            }
            if txn.category.trim().is_empty() {
                return Err(format!("Transaction {} has an empty category", txn.id));
            }
        }

        for (category, limit) in &self.budgets {
            if limit.is_negative() {
                return Err(format!(
                    "Budget for '{}' has a negative limit {}",
                    category, limit
                ));
            }
        }

        Ok(())
    }
}

/// Export the full data set to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> FinsightResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| FinsightError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a JSON export (for verification/restore)
pub fn import_from_json(json_str: &str) -> FinsightResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| FinsightError::Export(e.to_string()))?;

    export.validate().map_err(FinsightError::Export)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FinsightPaths;
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

    fn seed(storage: &Storage) {
        storage
            .ledger
            .add(
                NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
                Money::from_cents(50_00),
                TransactionKind::Expense,
                "Food",
                "groceries",
            )
            .unwrap();
        storage.ledger.save().unwrap();
        storage.budgets.set("Food", Money::from_cents(400_00)).unwrap();
        storage.budgets.save().unwrap();
    }

    #[test]
    fn test_full_export() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);

        let export = FullExport::from_storage(&storage).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.transactions.len(), 1);
        assert_eq!(export.budgets.get("Food"), Some(&Money::from_cents(400_00)));
        assert!(export.profile.is_none());
        assert_eq!(export.metadata.transaction_count, 1);
        assert_eq!(export.metadata.budget_count, 1);
        assert!(!export.metadata.has_profile);
        assert_eq!(
            export.metadata.earliest_transaction.as_deref(),
            Some("2025-01-15")
        );
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);

        let mut json_output = Vec::new();
        export_full_json(&storage, &mut json_output, true).unwrap();

        let json_string = String::from_utf8(json_output).unwrap();
        let imported = import_from_json(&json_string).unwrap();

        assert_eq!(imported.transactions.len(), 1);
        assert_eq!(imported.transactions[0].category, "Food");
        assert_eq!(imported.budgets.len(), 1);
    }

    #[test]
    fn test_empty_export_metadata() {
        let (_temp_dir, storage) = create_test_storage();

        let export = FullExport::from_storage(&storage).unwrap();

        assert_eq!(export.metadata.transaction_count, 0);
        assert!(export.metadata.earliest_transaction.is_none());
        assert!(export.metadata.latest_transaction.is_none());
    }

    #[test]
    fn test_validate_rejects_wrong_schema() {
        let (_temp_dir, storage) = create_test_storage();
        let mut export = FullExport::from_storage(&storage).unwrap();
        export.schema_version = "0.9.0".to_string();

        let err = export.validate().unwrap_err();
        assert!(err.contains("Schema version mismatch"));
    }
}
