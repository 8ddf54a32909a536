//! Export module for finsight
//!
//! Provides complete data export functionality in multiple formats:
//! - CSV: For transaction data (spreadsheet-compatible)
//! - JSON: For machine-readable full data export
//! - YAML: For human-readable full data export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_transactions_csv;
pub use json::{export_full_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};
