//! YAML export functionality
//!
//! Exports the complete data set to YAML for human-readable backup.

use crate::error::{FinsightError, FinsightResult};
use crate::export::json::FullExport;
use crate::storage::Storage;
use std::io::Write;

/// Export the full data set to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> FinsightResult<()> {
    let export = FullExport::from_storage(storage)?;

    writeln!(writer, "# finsight full data export")
        .map_err(|e| FinsightError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| FinsightError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| FinsightError::Export(e.to_string()))?;
    writeln!(writer, "#").map_err(|e| FinsightError::Export(e.to_string()))?;
    writeln!(writer, "# Keep this file secure. It contains your financial data.")
        .map_err(|e| FinsightError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinsightError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FinsightError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a YAML export
pub fn import_from_yaml(yaml_str: &str) -> FinsightResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| FinsightError::Export(e.to_string()))?;

    export.validate().map_err(FinsightError::Export)?;

    Ok(export)
}
