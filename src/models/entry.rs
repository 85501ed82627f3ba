//! Income, expense and savings entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::field::FieldValue;
use super::money::Money;
use super::section::Section;
use crate::error::{LedgerError, LedgerResult};

/// Money received
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeEntry {
    pub amount: Money,
    #[serde(default)]
    pub source: String,
    pub date: NaiveDate,
}

impl IncomeEntry {
    pub fn new(amount: Money, source: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            source: source.into(),
            date,
        }
    }
}

/// Money spent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub amount: Money,
    #[serde(default)]
    pub category: String,
    pub date: NaiveDate,
}

impl ExpenseEntry {
    pub fn new(amount: Money, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            category: category.into(),
            date,
        }
    }
}

/// A contribution set aside toward a savings goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsEntry {
    #[serde(default)]
    pub goal: String,
    pub amount: Money,
}

impl SavingsEntry {
    pub fn new(goal: impl Into<String>, amount: Money) -> Self {
        Self {
            goal: goal.into(),
            amount,
        }
    }
}

/// An entry from any section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Income(IncomeEntry),
    Expense(ExpenseEntry),
    Savings(SavingsEntry),
}

impl Entry {
    /// The section this entry belongs to
    pub fn section(&self) -> Section {
        match self {
            Entry::Income(_) => Section::Income,
            Entry::Expense(_) => Section::Expenses,
            Entry::Savings(_) => Section::Savings,
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            Entry::Income(e) => e.amount,
            Entry::Expense(e) => e.amount,
            Entry::Savings(e) => e.amount,
        }
    }

    /// The descriptive text of the entry: source, category or goal
    pub fn label(&self) -> &str {
        match self {
            Entry::Income(e) => &e.source,
            Entry::Expense(e) => &e.category,
            Entry::Savings(e) => &e.goal,
        }
    }

    /// The entry date, if the section has one
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Entry::Income(e) => Some(e.date),
            Entry::Expense(e) => Some(e.date),
            Entry::Savings(_) => None,
        }
    }

    /// Assign a parsed value to the named field
    ///
    /// The field name must come from this entry's section schema and the
    /// value must match its declared kind.
    pub fn set_field(&mut self, name: &str, value: FieldValue) -> LedgerResult<()> {
        match (self, name, value) {
            (Entry::Income(e), "amount", FieldValue::Amount(v)) => e.amount = v,
            (Entry::Income(e), "source", FieldValue::Text(v)) => e.source = v,
            (Entry::Income(e), "date", FieldValue::Date(v)) => e.date = v,
            (Entry::Expense(e), "amount", FieldValue::Amount(v)) => e.amount = v,
            (Entry::Expense(e), "category", FieldValue::Text(v)) => e.category = v,
            (Entry::Expense(e), "date", FieldValue::Date(v)) => e.date = v,
            (Entry::Savings(e), "goal", FieldValue::Text(v)) => e.goal = v,
            (Entry::Savings(e), "amount", FieldValue::Amount(v)) => e.amount = v,
            (entry, name, _) => {
                return Err(LedgerError::Validation(format!(
                    "Field '{}' cannot be set on {} entries",
                    name,
                    entry.section()
                )))
            }
        }
        Ok(())
    }

    /// One-line description used in confirmations, e.g. "2024-01-06 - Rent: 200.00 USD"
    pub fn describe(&self, currency: &str) -> String {
        let amount = self.amount().format_with_currency(currency);
        match self.date() {
            Some(date) => format!("{} - {}: {}", date, self.label(), amount),
            None => format!("{} - {}", self.label(), amount),
        }
    }
}
