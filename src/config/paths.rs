//! Path management for the budget ledger
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_MANAGER_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory for `budget-manager`
//!    (`~/.config/budget-manager` on Linux, `~/Library/Application Support/budget-manager`
//!    on macOS, `%APPDATA%\budget-manager\config` on Windows)
//!
//! The data file can also be pointed somewhere else entirely with
//! [`LedgerPaths::with_data_file`]; its backup then lives next to it.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::LedgerError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "BUDGET_MANAGER_DATA_DIR";

/// File name of the ledger inside the base directory
pub const DATA_FILE_NAME: &str = "budget_data.json";

/// Suffix appended to the ledger file name to form the backup path
pub const BACKUP_SUFFIX: &str = ".bak";

/// Manages all paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Directory holding settings and the audit log
    base_dir: PathBuf,
    /// The ledger file itself
    data_file: PathBuf,
}

impl LedgerPaths {
    /// Resolve paths from the environment or the platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self::with_base_dir(base_dir))
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        let data_file = base_dir.join(DATA_FILE_NAME);
        Self {
            base_dir,
            data_file,
        }
    }

    /// Use an explicit ledger file; settings and the audit log sit beside it
    pub fn with_data_file(data_file: PathBuf) -> Self {
        let base_dir = match data_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self {
            base_dir,
            data_file,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The ledger file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// The backup file: the ledger path with `.bak` appended
    pub fn backup_file(&self) -> PathBuf {
        let mut name: OsString = self.data_file.as_os_str().to_owned();
        name.push(BACKUP_SUFFIX);
        PathBuf::from(name)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory and the ledger file's directory exist
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create base directory: {}", e)))?;

        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    LedgerError::Io(format!("Failed to create data directory: {}", e))
                })?;
            }
        }

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    ProjectDirs::from("", "", "budget-manager")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| LedgerError::Config("Could not determine home directory".into()))
}
