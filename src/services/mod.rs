//! Service layer for the budget ledger
//!
//! The service layer validates input on top of the storage layer and keeps
//! the audit log in step with every persisted change.

pub mod ledger;

pub use ledger::{
    parse_position, BudgetWarning, EditOutcome, ExpenseAdded, LedgerService, RejectedField,
};
