//! Budget Summary Report
//!
//! Lists every entry per section with section totals, the remaining balance
//! and the state of the budget limit.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetDocument, Entry, Money, Section};

/// Entries and total for one section
#[derive(Debug, Clone)]
pub struct SectionSummary {
    pub section: Section,
    /// Entries in stored order
    pub entries: Vec<Entry>,
    pub total: Money,
}

impl SectionSummary {
    fn from_document(doc: &BudgetDocument, section: Section) -> LedgerResult<Self> {
        Ok(Self {
            section,
            entries: doc.entries(section),
            total: doc.total(section)?,
        })
    }

    fn heading(&self) -> &'static str {
        match self.section {
            Section::Income => "Income Transactions",
            Section::Expenses => "Expense Transactions",
            Section::Savings => "Savings Contributions",
        }
    }

    fn empty_message(&self) -> &'static str {
        match self.section {
            Section::Income => "No income records found.",
            Section::Expenses => "No expense records found.",
            Section::Savings => "No savings records found.",
        }
    }

    fn total_label(&self) -> &'static str {
        match self.section {
            Section::Income => "Total Income",
            Section::Expenses => "Total Expenses",
            Section::Savings => "Total Savings",
        }
    }
}

/// Budget Summary Report
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub currency: String,
    /// Income, expenses and savings, in that order
    pub sections: Vec<SectionSummary>,
    pub total_income: Money,
    pub total_expenses: Money,
    pub total_savings: Money,
    /// Income minus expenses minus savings
    pub remaining_balance: Money,
    pub budget_limit: Option<Money>,
    /// How far total expenses are strictly above the budget limit
    pub over_limit_by: Option<Money>,
}

impl SummaryReport {
    /// Generate a summary report for a document
    ///
    /// Fails with a validation error if a total does not fit in `Money`.
    pub fn generate(doc: &BudgetDocument) -> LedgerResult<Self> {
        let sections = Section::ALL
            .iter()
            .map(|section| SectionSummary::from_document(doc, *section))
            .collect::<LedgerResult<Vec<_>>>()?;

        let total_income = doc.total(Section::Income)?;
        let total_expenses = doc.total(Section::Expenses)?;
        let total_savings = doc.total(Section::Savings)?;

        let over_limit_by = match doc.budget_limit {
            Some(limit) if total_expenses > limit => Some(
                total_expenses
                    .checked_sub(limit)
                    .ok_or_else(|| LedgerError::total_out_of_range("budget overage"))?,
            ),
            _ => None,
        };

        Ok(Self {
            currency: doc.currency.clone(),
            sections,
            total_income,
            total_expenses,
            total_savings,
            remaining_balance: doc.remaining_balance()?,
            budget_limit: doc.budget_limit,
            over_limit_by,
        })
    }

    fn amount(&self, money: Money) -> String {
        money.format_with_currency(&self.currency)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!("Budget Summary Report ({})\n", self.currency));
        output.push_str(&"-".repeat(40));
        output.push('\n');

        for summary in &self.sections {
            output.push_str(&format!("\n{}:\n", summary.heading()));

            if summary.entries.is_empty() {
                output.push_str(&format!("  {}\n", summary.empty_message()));
                continue;
            }

            for entry in &summary.entries {
                output.push_str(&format!("  {}\n", entry.describe(&self.currency)));
            }
            output.push_str(&format!(
                "  {}: {}\n",
                summary.total_label(),
                self.amount(summary.total)
            ));
        }

        output.push('\n');
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>18}\n",
            "Total Income:",
            self.amount(self.total_income)
        ));
        output.push_str(&format!(
            "{:<20} {:>18}\n",
            "Total Expenses:",
            self.amount(self.total_expenses)
        ));
        output.push_str(&format!(
            "{:<20} {:>18}\n",
            "Total Savings:",
            self.amount(self.total_savings)
        ));
        output.push_str(&format!(
            "{:<20} {:>18}\n",
            "Remaining Balance:",
            self.amount(self.remaining_balance)
        ));

        if let Some(limit) = self.budget_limit {
            output.push_str(&format!("{:<20} {:>18}\n", "Budget Limit:", self.amount(limit)));
            if let Some(overage) = self.over_limit_by {
                output.push_str(&format!(
                    "\n* Expenses exceed the budget limit by {}\n",
                    self.amount(overage)
                ));
            }
        }

        output
    }

    /// Export the report to CSV: one row per entry, then total rows
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["section", "date", "label", "amount", "currency"])?;

        for summary in &self.sections {
            for entry in &summary.entries {
                let date = entry.date().map(|d| d.to_string()).unwrap_or_default();
                csv_writer.write_record([
                    summary.section.key(),
                    date.as_str(),
                    entry.label(),
                    entry.amount().to_string().as_str(),
                    self.currency.as_str(),
                ])?;
            }
        }

        let totals = [
            ("total_income", self.total_income),
            ("total_expenses", self.total_expenses),
            ("total_savings", self.total_savings),
            ("remaining_balance", self.remaining_balance),
        ];
        for (label, amount) in totals {
            csv_writer.write_record([
                "total",
                "",
                label,
                amount.to_string().as_str(),
                self.currency.as_str(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseEntry, IncomeEntry, SavingsEntry};
    use chrono::NaiveDate;

    fn sample() -> BudgetDocument {
        let mut doc = BudgetDocument::new();
        doc.income.push(IncomeEntry::new(
            Money::from_cents(100000),
            "Salary",
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        ));
        doc.expenses.push(ExpenseEntry::new(
            Money::from_cents(20000),
            "Rent",
            NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
        ));
        doc.savings
            .push(SavingsEntry::new("Emergency", Money::from_cents(10000)));
        doc
    }

    #[test]
    fn test_generate_totals() {
        let report = SummaryReport::generate(&sample()).unwrap();

        assert_eq!(report.total_income, Money::from_cents(100000));
        assert_eq!(report.total_expenses, Money::from_cents(20000));
        assert_eq!(report.total_savings, Money::from_cents(10000));
        assert_eq!(report.remaining_balance, Money::from_cents(70000));
        assert_eq!(report.currency, "USD");
        assert!(report.over_limit_by.is_none());
        assert_eq!(report.sections[1].section, Section::Expenses);
        assert_eq!(report.sections[1].entries.len(), 1);
    }

    #[test]
    fn test_generate_empty_document() {
        let report = SummaryReport::generate(&BudgetDocument::new()).unwrap();

        assert_eq!(report.total_income, Money::zero());
        assert_eq!(report.remaining_balance, Money::zero());
        assert!(report.sections.iter().all(|s| s.entries.is_empty()));

        let text = report.format_terminal();
        assert!(text.contains("No income records found."));
        assert!(text.contains("No expense records found."));
        assert!(text.contains("No savings records found."));
    }

    #[test]
    fn test_negative_remaining_balance() {
        let mut doc = sample();
        doc.expenses.push(ExpenseEntry::new(
            Money::from_cents(150000),
            "Car",
            NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
        ));

        let report = SummaryReport::generate(&doc).unwrap();
        assert_eq!(report.remaining_balance, Money::from_cents(-80000));
        assert!(report.format_terminal().contains("-800.00 USD"));
    }

    #[test]
    fn test_over_limit_flag() {
        let mut doc = sample();
        doc.budget_limit = Some(Money::from_cents(15000));

        let report = SummaryReport::generate(&doc).unwrap();
        assert_eq!(report.over_limit_by, Some(Money::from_cents(5000)));
        assert!(report
            .format_terminal()
            .contains("exceed the budget limit by 50.00 USD"));

        doc.budget_limit = Some(Money::from_cents(20000));
        assert!(SummaryReport::generate(&doc)
            .unwrap()
            .over_limit_by
            .is_none());
    }

    #[test]
    fn test_format_terminal() {
        let mut doc = sample();
        doc.currency = "EUR".into();
        let text = SummaryReport::generate(&doc).unwrap().format_terminal();

        assert!(text.contains("Budget Summary Report (EUR)"));
        assert!(text.contains("2024-01-05 - Salary: 1000.00 EUR"));
        assert!(text.contains("Emergency - 100.00 EUR"));
        assert!(text.contains("700.00 EUR"));
    }

    #[test]
    fn test_generate_fails_instead_of_overflowing() {
        let mut doc = sample();
        let day = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        for _ in 0..9300 {
            doc.expenses.push(ExpenseEntry::new(Money::MAX, "Yacht", day));
        }

        let err = SummaryReport::generate(&doc).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_maximal_amounts_report() {
        let mut doc = BudgetDocument::new();
        let day = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        doc.expenses.push(ExpenseEntry::new(Money::MAX, "Yacht", day));
        doc.expenses.push(ExpenseEntry::new(Money::MAX, "Yacht", day));
        doc.budget_limit = Some(Money::zero());

        let report = SummaryReport::generate(&doc).unwrap();
        assert_eq!(report.total_expenses.cents(), 2 * Money::MAX.cents());
        assert_eq!(report.remaining_balance.cents(), -2 * Money::MAX.cents());
        assert_eq!(report.over_limit_by, Some(report.total_expenses));
        assert!(report
            .format_terminal()
            .contains("-19999999999999.98 USD"));
    }

    #[test]
    fn test_export_csv() {
        let report = SummaryReport::generate(&sample()).unwrap();
        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "section,date,label,amount,currency");
        assert_eq!(lines[1], "income,2024-01-05,Salary,1000.00,USD");
        assert_eq!(lines[3], "savings,,Emergency,100.00,USD");
        assert_eq!(lines[7], "total,,remaining_balance,700.00,USD");
        assert_eq!(lines.len(), 8);
    }
}
