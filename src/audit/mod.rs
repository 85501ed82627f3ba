//! Audit logging
//!
//! Records every ledger mutation with before/after values in an append-only
//! audit log next to the ledger file.
//!
//! - `AuditEntry`: a single record with timestamp, operation, the subject
//!   that changed and its JSON before and after the change.
//! - `AuditLogger`: appends entries to the log as JSON lines (JSONL).

mod diff;
mod entry;
mod logger;

pub use entry::{AuditEntry, Operation, Subject};
pub use logger::AuditLogger;
