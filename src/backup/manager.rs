//! Backup manager for the ledger file
//!
//! A backup is the ledger file moved aside to `<ledger>.bak`. There is only
//! ever one backup; creating a new one replaces the previous one.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::storage::file_io::json_file_valid;

/// Metadata about the current backup file
#[derive(Debug, Clone)]
pub struct BackupInfo {
    /// Full path to backup
    pub path: PathBuf,
    /// When the backup file was last written
    pub modified_at: Option<DateTime<Utc>>,
    /// Size in bytes
    pub size_bytes: u64,
    /// Whether the backup parses as JSON
    pub is_valid: bool,
}

/// Result of a backup request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupOutcome {
    /// The ledger file was moved to this backup path
    Created(PathBuf),
    /// There was no ledger file to back up
    NothingToBackUp,
}

impl BackupOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

impl fmt::Display for BackupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created(path) => write!(f, "Backup created: {}", path.display()),
            Self::NothingToBackUp => write!(f, "No data found to back up."),
        }
    }
}

/// Result of a restore request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// The backup was moved back over the ledger file
    Restored(PathBuf),
    /// There was no backup file
    NoBackupFound,
}

impl RestoreOutcome {
    pub fn is_restored(&self) -> bool {
        matches!(self, Self::Restored(_))
    }
}

impl fmt::Display for RestoreOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Restored(path) => write!(f, "Data restored from backup {}", path.display()),
            Self::NoBackupFound => write!(f, "No backup found."),
        }
    }
}

/// Moves the ledger file to and from its backup location
pub struct BackupManager {
    paths: LedgerPaths,
}

impl BackupManager {
    pub fn new(paths: LedgerPaths) -> Self {
        Self { paths }
    }

    pub fn backup_path(&self) -> PathBuf {
        self.paths.backup_file()
    }

    /// Move the ledger file to the backup path, replacing any older backup
    pub fn create_backup(&self) -> LedgerResult<BackupOutcome> {
        let data_file = self.paths.data_file();
        if !data_file.exists() {
            tracing::info!(path = %data_file.display(), "no ledger file to back up");
            return Ok(BackupOutcome::NothingToBackUp);
        }

        let backup_path = self.backup_path();
        fs::rename(data_file, &backup_path).map_err(|e| {
            LedgerError::Storage(format!("Failed to create backup: {}", e))
        })?;

        tracing::info!(path = %backup_path.display(), "backup created");
        Ok(BackupOutcome::Created(backup_path))
    }

    /// Move the backup back over the ledger file
    pub fn restore(&self) -> LedgerResult<RestoreOutcome> {
        let backup_path = self.backup_path();
        if !backup_path.exists() {
            tracing::info!(path = %backup_path.display(), "no backup to restore");
            return Ok(RestoreOutcome::NoBackupFound);
        }

        fs::rename(&backup_path, self.paths.data_file()).map_err(|e| {
            LedgerError::Storage(format!("Failed to restore backup: {}", e))
        })?;

        tracing::info!(path = %backup_path.display(), "backup restored");
        Ok(RestoreOutcome::Restored(backup_path))
    }

    /// Describe the current backup, if there is one
    pub fn backup_info(&self) -> LedgerResult<Option<BackupInfo>> {
        let path = self.backup_path();
        if !path.exists() {
            return Ok(None);
        }

        let metadata = fs::metadata(&path)
            .map_err(|e| LedgerError::Io(format!("Failed to read backup metadata: {}", e)))?;

        Ok(Some(BackupInfo {
            modified_at: metadata.modified().ok().map(DateTime::<Utc>::from),
            size_bytes: metadata.len(),
            is_valid: json_file_valid(&path),
            path,
        }))
    }
}
