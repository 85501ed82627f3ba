//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger entries and audit history for
//! the terminal.

pub mod entry;
pub mod format;

pub use entry::format_entry_list;
pub use format::{labeled, separator, truncate};
