//! Storage layer for the budget ledger
//!
//! The whole budget document lives in one JSON file. Every save rewrites the
//! file atomically; loading never fails, it falls back to an empty document
//! and reports why.

pub mod file_io;

pub use file_io::{read_json_required, write_json_atomic};

use crate::audit::{AuditEntry, AuditLogger};
use crate::backup::{BackupManager, BackupOutcome, RestoreOutcome};
use crate::config::paths::LedgerPaths;
use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::BudgetDocument;

/// A document read from disk, plus the error that forced a fresh start, if any
#[derive(Debug)]
pub struct Loaded {
    pub document: BudgetDocument,
    /// Set when the ledger file existed but could not be read or parsed
    pub recovered_from: Option<LedgerError>,
}

/// Proof that the user explicitly agreed to wipe the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearConfirmation(());

impl ClearConfirmation {
    /// Accept only an explicit "yes" (case-insensitive)
    pub fn from_answer(answer: &str) -> Option<Self> {
        if answer.trim().eq_ignore_ascii_case("yes") {
            Some(Self(()))
        } else {
            None
        }
    }

    /// Confirmation given up front, e.g. through a `--force` flag
    pub fn confirmed() -> Self {
        Self(())
    }
}

/// Result of clearing the ledger
#[derive(Debug)]
pub struct ClearOutcome {
    /// The fresh document now on disk
    pub document: BudgetDocument,
    /// What happened to the previous ledger file
    pub backup: BackupOutcome,
}

/// Owns the location of the ledger file, its backup and the audit log
pub struct LedgerStore {
    paths: LedgerPaths,
    backups: BackupManager,
    audit: Option<AuditLogger>,
}

impl LedgerStore {
    /// Create a store without audit logging
    pub fn new(paths: LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            backups: BackupManager::new(paths.clone()),
            paths,
            audit: None,
        })
    }

    /// Create a store configured from user settings
    pub fn open(paths: LedgerPaths, settings: &Settings) -> LedgerResult<Self> {
        let store = Self::new(paths)?;
        if settings.audit_enabled {
            let logger = AuditLogger::new(store.paths.audit_log());
            Ok(store.with_audit(logger))
        } else {
            Ok(store)
        }
    }

    /// Record mutations in the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    pub fn backups(&self) -> &BackupManager {
        &self.backups
    }

    pub fn audit_log(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Whether a ledger file is present on disk
    pub fn exists(&self) -> bool {
        self.paths.data_file().exists()
    }

    /// Read the ledger file
    ///
    /// A missing file yields a fresh document. An unreadable or corrupt file
    /// also yields a fresh document, with the cause in `recovered_from`.
    pub fn load(&self) -> Loaded {
        let path = self.paths.data_file();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no ledger file, starting fresh");
            return Loaded {
                document: BudgetDocument::new(),
                recovered_from: None,
            };
        }

        match read_json_required::<BudgetDocument, _>(path) {
            Ok(mut document) => {
                document.ensure_currency();
                tracing::debug!(path = %path.display(), "ledger loaded");
                Loaded {
                    document,
                    recovered_from: None,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not load ledger, starting with an empty budget");
                Loaded {
                    document: BudgetDocument::new(),
                    recovered_from: Some(err),
                }
            }
        }
    }

    /// Overwrite the ledger file with the full document
    pub fn save(&self, document: &BudgetDocument) -> LedgerResult<()> {
        write_json_atomic(self.paths.data_file(), document)?;
        tracing::debug!(path = %self.paths.data_file().display(), "ledger saved");
        Ok(())
    }

    /// Move the ledger file to its backup path
    pub fn backup(&self) -> LedgerResult<BackupOutcome> {
        self.backups.create_backup()
    }

    /// Move the backup back over the ledger file
    ///
    /// Callers should reload afterwards; any document already in memory is
    /// now stale.
    pub fn restore(&self) -> LedgerResult<RestoreOutcome> {
        let outcome = self.backups.restore()?;
        if let RestoreOutcome::Restored(from) = &outcome {
            self.record(AuditEntry::ledger_restored(from));
        }
        Ok(outcome)
    }

    /// Back up the current ledger, then replace it with an empty one
    pub fn clear_all(&self, _confirmation: ClearConfirmation) -> LedgerResult<ClearOutcome> {
        let backup = self.backup()?;
        let document = BudgetDocument::new();
        self.save(&document)?;

        let backup_path = match &backup {
            BackupOutcome::Created(path) => Some(path.as_path()),
            BackupOutcome::NothingToBackUp => None,
        };
        self.record(AuditEntry::ledger_cleared(backup_path));

        tracing::info!("ledger cleared");
        Ok(ClearOutcome { document, backup })
    }

    /// Append an entry to the audit log, if enabled
    ///
    /// The mutation is already on disk at this point, so a failed audit write
    /// is only logged.
    pub(crate) fn record(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(err) = logger.log(&entry) {
                tracing::warn!(error = %err, "failed to write audit entry");
            }
        }
    }
}
