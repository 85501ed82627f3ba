//! Configuration module
//!
//! This module provides configuration management including:
//! - Ledger, backup, settings and audit log path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
