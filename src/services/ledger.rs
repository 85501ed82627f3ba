//! Ledger service
//!
//! Validates user input, applies it to the budget document and persists the
//! result. A mutation is only visible in the caller's document once it has
//! been written to disk.

use std::fmt;

use crate::audit::AuditEntry;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    parse_amount, parse_date, BudgetDocument, Entry, ExpenseEntry, IncomeEntry, Money,
    SavingsEntry, Section,
};
use crate::storage::LedgerStore;

/// Non-blocking notice that total expenses now exceed the budget limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetWarning {
    pub limit: Money,
    pub total_expenses: Money,
    pub overage: Money,
    pub currency: String,
}

impl fmt::Display for BudgetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning: you have exceeded your budget limit of {} (total expenses {}, over by {})",
            self.limit.format_with_currency(&self.currency),
            self.total_expenses.format_with_currency(&self.currency),
            self.overage.format_with_currency(&self.currency),
        )
    }
}

/// Result of adding an expense
#[derive(Debug, Clone)]
pub struct ExpenseAdded {
    pub entry: ExpenseEntry,
    pub warning: Option<BudgetWarning>,
}

/// A field update that could not be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedField {
    pub field: String,
    pub reason: String,
}

/// Result of editing an entry
#[derive(Debug, Clone)]
pub struct EditOutcome {
    pub before: Entry,
    pub after: Entry,
    /// Fields that were changed, in the order given
    pub applied: Vec<&'static str>,
    pub rejected: Vec<RejectedField>,
}

impl EditOutcome {
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// Convert a 1-based position typed by the user
pub fn parse_position(text: &str) -> LedgerResult<usize> {
    text.trim().parse::<usize>().map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid selection '{}': expected a number",
            text.trim()
        ))
    })
}

/// Service for ledger mutations
pub struct LedgerService<'a> {
    store: &'a LedgerStore,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(store: &'a LedgerStore) -> Self {
        Self { store }
    }

    /// Set the display currency
    pub fn set_currency(&self, doc: &mut BudgetDocument, code: &str) -> LedgerResult<()> {
        let code = code.trim();
        if code.is_empty() {
            return Err(LedgerError::Validation(
                "Currency code cannot be empty".into(),
            ));
        }

        let before = doc.currency.clone();
        let mut updated = doc.clone();
        updated.currency = code.to_uppercase();
        self.commit(doc, updated)?;

        self.store
            .record(AuditEntry::currency_changed(&before, &doc.currency));
        Ok(())
    }

    /// Set the budget limit on total expenses
    pub fn set_budget_limit(&self, doc: &mut BudgetDocument, limit: &str) -> LedgerResult<Money> {
        let limit = parse_amount(limit)?;

        let before = doc.budget_limit;
        let mut updated = doc.clone();
        updated.budget_limit = Some(limit);
        self.commit(doc, updated)?;

        self.store
            .record(AuditEntry::budget_limit_changed(before, doc.budget_limit));
        Ok(limit)
    }

    /// Remove the budget limit, returning the previous one
    pub fn remove_budget_limit(&self, doc: &mut BudgetDocument) -> LedgerResult<Option<Money>> {
        let Some(previous) = doc.budget_limit else {
            return Ok(None);
        };

        let mut updated = doc.clone();
        updated.budget_limit = None;
        self.commit(doc, updated)?;

        self.store
            .record(AuditEntry::budget_limit_changed(Some(previous), None));
        Ok(Some(previous))
    }

    /// Record income
    pub fn add_income(
        &self,
        doc: &mut BudgetDocument,
        amount: &str,
        source: &str,
        date: &str,
    ) -> LedgerResult<IncomeEntry> {
        let entry = IncomeEntry::new(parse_amount(amount)?, source.trim(), parse_date(date)?);

        let mut updated = doc.clone();
        updated.income.push(entry.clone());
        self.commit(doc, updated)?;

        self.record_create(Entry::Income(entry.clone()), doc.income.len());
        Ok(entry)
    }

    /// Record an expense, warning if it takes total expenses over the limit
    pub fn add_expense(
        &self,
        doc: &mut BudgetDocument,
        amount: &str,
        category: &str,
        date: &str,
    ) -> LedgerResult<ExpenseAdded> {
        let entry = ExpenseEntry::new(parse_amount(amount)?, category.trim(), parse_date(date)?);

        let total_expenses = doc
            .total(Section::Expenses)?
            .checked_add(entry.amount)
            .ok_or_else(|| LedgerError::total_out_of_range("expenses total"))?;
        let warning = doc
            .budget_limit
            .filter(|limit| total_expenses > *limit)
            .and_then(|limit| {
                Some(BudgetWarning {
                    limit,
                    total_expenses,
                    overage: total_expenses.checked_sub(limit)?,
                    currency: doc.currency.clone(),
                })
            });

        let mut updated = doc.clone();
        updated.expenses.push(entry.clone());
        self.commit(doc, updated)?;

        if let Some(warning) = &warning {
            tracing::info!(overage = %warning.overage, "budget limit exceeded");
        }

        self.record_create(Entry::Expense(entry.clone()), doc.expenses.len());
        Ok(ExpenseAdded { entry, warning })
    }

    /// Record a savings contribution
    pub fn add_savings(
        &self,
        doc: &mut BudgetDocument,
        goal: &str,
        amount: &str,
    ) -> LedgerResult<SavingsEntry> {
        let entry = SavingsEntry::new(goal.trim(), parse_amount(amount)?);

        let mut updated = doc.clone();
        updated.savings.push(entry.clone());
        self.commit(doc, updated)?;

        self.record_create(Entry::Savings(entry.clone()), doc.savings.len());
        Ok(entry)
    }

    /// Edit fields of the entry at a 1-based position
    ///
    /// Each `(field, value)` pair is parsed against the section's schema.
    /// Blank values are skipped; bad fields are rejected one by one while the
    /// others are still applied.
    pub fn edit_entry(
        &self,
        doc: &mut BudgetDocument,
        section: Section,
        position: usize,
        updates: &[(&str, &str)],
    ) -> LedgerResult<EditOutcome> {
        let before = entry_at(doc, section, position)?;
        let mut after = before.clone();
        let mut applied = Vec::new();
        let mut rejected = Vec::new();

        for (name, raw) in updates {
            if raw.trim().is_empty() {
                continue;
            }

            let Some(spec) = section.field(name) else {
                rejected.push(RejectedField {
                    field: name.to_string(),
                    reason: format!("{} entries have no field '{}'", section, name),
                });
                continue;
            };

            match spec
                .kind
                .parse(raw)
                .and_then(|value| after.set_field(spec.name, value))
            {
                Ok(()) => {
                    if !applied.contains(&spec.name) {
                        applied.push(spec.name);
                    }
                }
                Err(err) => rejected.push(RejectedField {
                    field: spec.name.to_string(),
                    reason: err.to_string(),
                }),
            }
        }

        if !applied.is_empty() {
            let mut updated = doc.clone();
            updated.replace(position - 1, after.clone())?;
            self.commit(doc, updated)?;

            self.store
                .record(AuditEntry::entry_edited(position, &before, &after));
        }

        Ok(EditOutcome {
            before,
            after,
            applied,
            rejected,
        })
    }

    /// Delete the entry at a 1-based position
    pub fn delete_entry(
        &self,
        doc: &mut BudgetDocument,
        section: Section,
        position: usize,
    ) -> LedgerResult<Entry> {
        entry_at(doc, section, position)?;

        let mut updated = doc.clone();
        let removed = updated.remove(section, position - 1)?;
        self.commit(doc, updated)?;

        self.store
            .record(AuditEntry::entry_deleted(position, &removed));
        Ok(removed)
    }

    /// Persist `updated`, then make it the caller's document
    ///
    /// A document whose totals no longer fit in `Money` is refused before
    /// anything is written.
    fn commit(&self, doc: &mut BudgetDocument, updated: BudgetDocument) -> LedgerResult<()> {
        updated.remaining_balance()?;
        self.store.save(&updated)?;
        *doc = updated;
        Ok(())
    }

    fn record_create(&self, entry: Entry, position: usize) {
        self.store.record(AuditEntry::entry_added(position, &entry));
    }
}

/// Look up an entry by 1-based position
fn entry_at(doc: &BudgetDocument, section: Section, position: usize) -> LedgerResult<Entry> {
    position
        .checked_sub(1)
        .and_then(|index| doc.entry(section, index))
        .ok_or_else(|| LedgerError::position_out_of_range(section.key(), position, doc.len(section)))
}
