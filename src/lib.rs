//! Budget Manager - personal budget ledger
//!
//! This library provides the core functionality behind the `budget` command:
//! a single JSON ledger of income, expenses and savings contributions, with
//! an optional spending limit and a display currency.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: The budget document, its entries and the money type
//! - `storage`: Loading and atomically saving the ledger file
//! - `backup`: Moving the ledger to and from its backup file
//! - `services`: Validated ledger mutations
//! - `reports`: The budget summary report
//! - `audit`: Audit logging of every mutation
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_manager::config::LedgerPaths;
//! use budget_manager::services::LedgerService;
//! use budget_manager::storage::LedgerStore;
//!
//! let store = LedgerStore::new(LedgerPaths::new()?)?;
//! let mut doc = store.load().document;
//! LedgerService::new(&store).add_income(&mut doc, "1000", "Salary", "2024-01-05")?;
//! ```

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
