//! User settings for finsight
//!
//! Display and report preferences persisted in config.json. Every field
//! has a serde default so older files keep loading after new fields are
//! added.

use serde::{Deserialize, Serialize};

use super::paths::FinsightPaths;
use crate::error::{FinsightError, FinsightResult};

/// User settings for finsight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether to colorize amounts in terminal output
    #[serde(default = "default_use_color")]
    pub use_color: bool,

    /// Row cap for a bare `transaction list` (a period or --limit lifts it)
    #[serde(default = "default_list_limit")]
    pub transaction_list_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_use_color() -> bool {
    true
}

fn default_list_limit() -> usize {
    25
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            use_color: default_use_color(),
            transaction_list_limit: default_list_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file
    /// doesn't exist yet
    pub fn load_or_create(paths: &FinsightPaths) -> FinsightResult<Self> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FinsightError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| FinsightError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinsightPaths) -> FinsightResult<()> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinsightError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| FinsightError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
