//! Backup and restore for the ledger file
//!
//! `BackupManager` moves the ledger file to a sibling `.bak` path and back.
//! Each backup replaces the previous one, and restoring consumes it.
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_manager::backup::{BackupManager, BackupOutcome};
//! use budget_manager::config::LedgerPaths;
//!
//! let manager = BackupManager::new(LedgerPaths::new()?);
//! match manager.create_backup()? {
//!     BackupOutcome::Created(path) => println!("saved to {}", path.display()),
//!     BackupOutcome::NothingToBackUp => println!("nothing to do"),
//! }
//! ```

mod manager;

pub use manager::{BackupInfo, BackupManager, BackupOutcome, RestoreOutcome};
