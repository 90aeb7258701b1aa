//! Path management for FINA
//!
//! Provides platform-appropriate path resolution for the configuration
//! directory. Only the small settings file lives on disk; the ledger itself
//! is never persisted.
//!
//! ## Path Resolution Order
//!
//! 1. `FINA_DATA_DIR` environment variable (if set)
//! 2. The platform config directory via `directories`
//!    (`~/.config/fina` on Linux, `%APPDATA%\fina` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinaError;

/// Manages all paths used by FINA
#[derive(Debug, Clone)]
pub struct FinaPaths {
    /// Base directory for all FINA data
    base_dir: PathBuf,
}

impl FinaPaths {
    /// Create a new FinaPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FinaError> {
        let base_dir = if let Ok(custom) = std::env::var("FINA_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "fina").ok_or_else(|| {
                FinaError::Config("Could not determine a home directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create FinaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FinaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinaError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }
}
