//! Core data models for the budget ledger
//!
//! This module contains the data structures persisted in the ledger file:
//! the budget document, its income/expense/savings entries, the money type
//! and the per-section field schema used for validated edits.

pub mod document;
pub mod entry;
pub mod field;
pub mod money;
pub mod section;

pub use document::{BudgetDocument, DEFAULT_CURRENCY};
pub use entry::{Entry, ExpenseEntry, IncomeEntry, SavingsEntry};
pub use field::{parse_amount, parse_date, FieldKind, FieldSpec, FieldValue, DATE_FORMAT};
pub use money::{Money, MoneyParseError};
pub use section::Section;
