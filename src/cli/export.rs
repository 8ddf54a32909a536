//! Data export CLI command

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::error::{FinsightError, FinsightResult};
use crate::export::{export_full_json, export_full_yaml, export_transactions_csv};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (full data set, machine-readable)
    Json,
    /// CSV format (transactions only)
    Csv,
    /// YAML format (full data set, human-readable)
    Yaml,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Yaml => "yaml",
        }
    }
}

/// Arguments for the export command
#[derive(Args)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (defaults to a timestamped file in the export
    /// directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> FinsightResult<()> {
    let output = match args.output {
        Some(path) => path,
        None => {
            let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
            storage
                .paths()
                .export_dir()
                .join(format!("finsight-{}.{}", stamp, args.format.extension()))
        }
    };

    let file = File::create(&output).map_err(|e| {
        FinsightError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Json => {
            export_full_json(storage, &mut writer, true)?;
            println!("Full data exported to: {}", output.display());
        }
        ExportFormat::Csv => {
            export_transactions_csv(storage, &mut writer)?;
            let count = storage.ledger.count()?;
            println!("Exported {} transaction(s) to: {}", count, output.display());
            println!("Note: CSV covers transactions only. Use json or yaml for the full data set.");
        }
        ExportFormat::Yaml => {
            export_full_yaml(storage, &mut writer)?;
            println!("Full data exported to: {}", output.display());
        }
    }

    Ok(())
}
