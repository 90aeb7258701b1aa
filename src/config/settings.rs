//! User settings for FINA
//!
//! The only state that survives a session: presentation preferences, the
//! goal-estimate savings rate, and the tutorial/subscription flags. The
//! ledger itself is deliberately not persisted.

use serde::{Deserialize, Serialize};

use super::paths::FinaPaths;
use crate::analytics::DEFAULT_SAVINGS_RATE;
use crate::error::FinaError;

/// User settings for FINA
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in rendered output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Assumed share of monthly income saved per month, used by the goal
    /// completion estimate (heuristic, not a forecast)
    #[serde(default = "default_savings_rate")]
    pub savings_rate: f64,

    /// Whether the first-run tips have been shown
    #[serde(default)]
    pub has_seen_tutorial: bool,

    /// Whether the user subscribed to the premium plan
    #[serde(default)]
    pub is_subscribed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "R$".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_savings_rate() -> f64 {
    DEFAULT_SAVINGS_RATE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            savings_rate: default_savings_rate(),
            has_seen_tutorial: false,
            is_subscribed: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinaPaths) -> Result<Self, FinaError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FinaError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| FinaError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinaPaths) -> Result<(), FinaError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinaError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| FinaError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
