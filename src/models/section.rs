//! Ledger sections and their field schemas

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::field::{FieldKind, FieldSpec};
use crate::error::LedgerError;

const INCOME_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("amount", FieldKind::Amount),
    FieldSpec::new("source", FieldKind::Text),
    FieldSpec::new("date", FieldKind::Date),
];

const EXPENSE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("amount", FieldKind::Amount),
    FieldSpec::new("category", FieldKind::Text),
    FieldSpec::new("date", FieldKind::Date),
];

const SAVINGS_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("goal", FieldKind::Text),
    FieldSpec::new("amount", FieldKind::Amount),
];

/// One of the three entry lists in a budget document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Income,
    Expenses,
    Savings,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Income, Section::Expenses, Section::Savings];

    /// Key of this section in the ledger file
    pub fn key(&self) -> &'static str {
        match self {
            Section::Income => "income",
            Section::Expenses => "expenses",
            Section::Savings => "savings",
        }
    }

    /// The field schema for entries in this section
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Section::Income => INCOME_FIELDS,
            Section::Expenses => EXPENSE_FIELDS,
            Section::Savings => SAVINGS_FIELDS,
        }
    }

    /// Look up a field by name (case-insensitive)
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        let name = name.trim();
        self.fields()
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Section::Income),
            "expense" | "expenses" => Ok(Section::Expenses),
            "saving" | "savings" => Ok(Section::Savings),
            other => Err(LedgerError::Validation(format!(
                "Unknown section '{}': expected income, expenses or savings",
                other
            ))),
        }
    }
}
