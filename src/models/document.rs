//! The budget document: the root object persisted to the ledger file

use serde::{Deserialize, Serialize};

use super::entry::{Entry, ExpenseEntry, IncomeEntry, SavingsEntry};
use super::money::Money;
use super::section::Section;
use crate::error::{LedgerError, LedgerResult};

/// Currency used when a document does not name one
pub const DEFAULT_CURRENCY: &str = "USD";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// All income, expense and savings entries plus ledger settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetDocument {
    #[serde(default)]
    pub income: Vec<IncomeEntry>,

    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,

    #[serde(default)]
    pub savings: Vec<SavingsEntry>,

    /// Advisory ceiling on total expenses; `None` means no limit
    #[serde(default)]
    pub budget_limit: Option<Money>,

    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for BudgetDocument {
    fn default() -> Self {
        Self {
            income: Vec::new(),
            expenses: Vec::new(),
            savings: Vec::new(),
            budget_limit: None,
            currency: default_currency(),
        }
    }
}

impl BudgetDocument {
    /// Create an empty document in the default currency
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill in the default currency if the stored one is blank
    pub fn ensure_currency(&mut self) {
        if self.currency.trim().is_empty() {
            self.currency = default_currency();
        }
    }

    /// Number of entries in a section
    pub fn len(&self, section: Section) -> usize {
        match section {
            Section::Income => self.income.len(),
            Section::Expenses => self.expenses.len(),
            Section::Savings => self.savings.len(),
        }
    }

    /// Whether the document holds no entries at all
    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.len(*s) == 0)
    }

    /// All entries of a section, in stored order
    pub fn entries(&self, section: Section) -> Vec<Entry> {
        match section {
            Section::Income => self.income.iter().cloned().map(Entry::Income).collect(),
            Section::Expenses => self.expenses.iter().cloned().map(Entry::Expense).collect(),
            Section::Savings => self.savings.iter().cloned().map(Entry::Savings).collect(),
        }
    }

    /// Get the entry at a zero-based index
    pub fn entry(&self, section: Section, index: usize) -> Option<Entry> {
        match section {
            Section::Income => self.income.get(index).cloned().map(Entry::Income),
            Section::Expenses => self.expenses.get(index).cloned().map(Entry::Expense),
            Section::Savings => self.savings.get(index).cloned().map(Entry::Savings),
        }
    }

    /// Replace the entry at a zero-based index
    pub fn replace(&mut self, index: usize, entry: Entry) -> LedgerResult<()> {
        let section = entry.section();
        let len = self.len(section);
        if index >= len {
            return Err(LedgerError::position_out_of_range(
                section.key(),
                index + 1,
                len,
            ));
        }

        match entry {
            Entry::Income(e) => self.income[index] = e,
            Entry::Expense(e) => self.expenses[index] = e,
            Entry::Savings(e) => self.savings[index] = e,
        }
        Ok(())
    }

    /// Remove and return the entry at a zero-based index
    pub fn remove(&mut self, section: Section, index: usize) -> LedgerResult<Entry> {
        let len = self.len(section);
        if index >= len {
            return Err(LedgerError::position_out_of_range(
                section.key(),
                index + 1,
                len,
            ));
        }

        Ok(match section {
            Section::Income => Entry::Income(self.income.remove(index)),
            Section::Expenses => Entry::Expense(self.expenses.remove(index)),
            Section::Savings => Entry::Savings(self.savings.remove(index)),
        })
    }

    /// Sum of the amounts in a section, in stored order
    pub fn total(&self, section: Section) -> LedgerResult<Money> {
        let sum = match section {
            Section::Income => Money::checked_sum(self.income.iter().map(|e| e.amount)),
            Section::Expenses => Money::checked_sum(self.expenses.iter().map(|e| e.amount)),
            Section::Savings => Money::checked_sum(self.savings.iter().map(|e| e.amount)),
        };
        sum.ok_or_else(|| LedgerError::total_out_of_range(&format!("{} total", section.key())))
    }

    /// Income minus expenses minus savings contributions
    pub fn remaining_balance(&self) -> LedgerResult<Money> {
        let income = self.total(Section::Income)?;
        let expenses = self.total(Section::Expenses)?;
        let savings = self.total(Section::Savings)?;
        income
            .checked_sub(expenses)
            .and_then(|m| m.checked_sub(savings))
            .ok_or_else(|| LedgerError::total_out_of_range("remaining balance"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> BudgetDocument {
        let mut doc = BudgetDocument::new();
        doc.income.push(IncomeEntry::new(
            Money::from_cents(100000),
            "Salary",
            date(2024, 1, 5),
        ));
        doc.expenses.push(ExpenseEntry::new(
            Money::from_cents(20000),
            "Rent",
            date(2024, 1, 6),
        ));
        doc.expenses.push(ExpenseEntry::new(
            Money::from_cents(1550),
            "Food",
            date(2024, 1, 7),
        ));
        doc.savings
            .push(SavingsEntry::new("Emergency", Money::from_cents(10000)));
        doc
    }

    #[test]
    fn test_new_document() {
        let doc = BudgetDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.currency, "USD");
        assert!(doc.budget_limit.is_none());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let doc: BudgetDocument = serde_json::from_str(r#"{"income": []}"#).unwrap();
        assert_eq!(doc, BudgetDocument::new());
    }

    #[test]
    fn test_null_budget_limit_is_unset_and_zero_is_set() {
        let unset: BudgetDocument = serde_json::from_str(r#"{"budget_limit": null}"#).unwrap();
        assert_eq!(unset.budget_limit, None);

        let zero: BudgetDocument = serde_json::from_str(r#"{"budget_limit": 0}"#).unwrap();
        assert_eq!(zero.budget_limit, Some(Money::zero()));
    }

    #[test]
    fn test_ensure_currency() {
        let mut doc: BudgetDocument = serde_json::from_str(r#"{"currency": " "}"#).unwrap();
        doc.ensure_currency();
        assert_eq!(doc.currency, "USD");
    }

    #[test]
    fn test_totals() {
        let doc = sample();
        assert_eq!(doc.total(Section::Income).unwrap().cents(), 100000);
        assert_eq!(doc.total(Section::Expenses).unwrap().cents(), 21550);
        assert_eq!(doc.total(Section::Savings).unwrap().cents(), 10000);
        assert_eq!(doc.remaining_balance().unwrap().cents(), 68450);
    }

    #[test]
    fn test_totals_report_overflow_instead_of_wrapping() {
        let mut doc = BudgetDocument::new();
        // Enough maximal expenses to exceed i64 cents
        for _ in 0..9300 {
            doc.expenses
                .push(ExpenseEntry::new(Money::MAX, "Yacht", date(2024, 1, 1)));
        }
        assert!(doc.total(Section::Expenses).unwrap_err().is_validation());
        assert!(doc.remaining_balance().unwrap_err().is_validation());
        assert_eq!(doc.total(Section::Income).unwrap(), Money::zero());

        // Balance can overflow even when each total fits
        let mut doc = BudgetDocument::new();
        doc.expenses
            .push(ExpenseEntry::new(Money::from_cents(i64::MAX), "Big", date(2024, 1, 1)));
        doc.savings
            .push(SavingsEntry::new("Bigger", Money::from_cents(i64::MAX)));
        assert!(doc.remaining_balance().is_err());
    }

    #[test]
    fn test_remove_shifts_entries() {
        let mut doc = sample();
        let removed = doc.remove(Section::Expenses, 0).unwrap();
        assert_eq!(removed.label(), "Rent");
        assert_eq!(doc.expenses.len(), 1);
        assert_eq!(doc.expenses[0].category, "Food");

        let err = doc.remove(Section::Expenses, 5).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(doc.expenses.len(), 1);
    }

    #[test]
    fn test_replace() {
        let mut doc = sample();
        let mut entry = doc.entry(Section::Savings, 0).unwrap();
        if let Entry::Savings(ref mut s) = entry {
            s.goal = "Vacation".into();
        }
        doc.replace(0, entry).unwrap();
        assert_eq!(doc.savings[0].goal, "Vacation");

        let extra = Entry::Savings(SavingsEntry::new("Car", Money::zero()));
        assert!(doc.replace(3, extra).is_err());
    }
}
