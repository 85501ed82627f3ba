//! Typed field schema for ledger entries
//!
//! Each section declares its fields up front, so edits are parsed according
//! to the declared kind rather than by looking at whatever value happens to
//! be stored.

use chrono::NaiveDate;

use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Date format used for entry dates, both in the ledger file and on input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The kind of value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A non-negative monetary amount
    Amount,
    /// Free text
    Text,
    /// A calendar date (YYYY-MM-DD)
    Date,
}

impl FieldKind {
    /// Parse raw user input into a value of this kind
    pub fn parse(&self, raw: &str) -> LedgerResult<FieldValue> {
        match self {
            FieldKind::Amount => parse_amount(raw).map(FieldValue::Amount),
            FieldKind::Text => Ok(FieldValue::Text(raw.trim().to_string())),
            FieldKind::Date => parse_date(raw).map(FieldValue::Date),
        }
    }
}

/// A named field in a section's schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// A parsed field value, ready to be applied to an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Amount(Money),
    Text(String),
    Date(NaiveDate),
}

/// Parse a non-negative monetary amount
pub fn parse_amount(raw: &str) -> LedgerResult<Money> {
    let amount = Money::parse(raw).map_err(|e| {
        LedgerError::Validation(format!("Invalid amount '{}': {}", raw.trim(), e))
    })?;

    if amount.is_negative() {
        return Err(LedgerError::Validation(format!(
            "Invalid amount '{}': amount cannot be negative",
            raw.trim()
        )));
    }

    Ok(amount)
}

/// Parse a calendar date in YYYY-MM-DD form
pub fn parse_date(raw: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid date '{}': expected YYYY-MM-DD",
            raw.trim()
        ))
    })
}
