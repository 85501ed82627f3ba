//! Reports for the budget ledger
//!
//! Reports are derived from a document and never modify it.

pub mod summary;

pub use summary::{SectionSummary, SummaryReport};
