//! Entry CLI commands
//!
//! Implements the income, expense and savings commands. Positions given to
//! `edit` and `delete` are 1-based, as shown by `list`.

use clap::Subcommand;

use super::{load_document, today};
use crate::config::settings::Settings;
use crate::display::format_entry_list;
use crate::error::LedgerResult;
use crate::models::{BudgetDocument, Entry, Section};
use crate::services::{parse_position, EditOutcome, LedgerService};
use crate::storage::LedgerStore;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record income
    Add {
        /// Amount (e.g., "1000" or "1000.50")
        amount: String,
        /// Where the money came from
        source: String,
        /// Date received (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List income entries
    #[command(alias = "ls")]
    List,

    /// Edit an income entry
    Edit {
        /// Position shown by `list`
        index: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        source: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an income entry
    #[command(alias = "rm")]
    Delete {
        /// Position shown by `list`
        index: String,
    },
}

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount (e.g., "200" or "19.99")
        amount: String,
        /// What the money was spent on
        category: String,
        /// Date spent (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses
    #[command(alias = "ls")]
    List,

    /// Edit an expense
    Edit {
        /// Position shown by `list`
        index: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Position shown by `list`
        index: String,
    },
}

/// Savings subcommands
#[derive(Subcommand)]
pub enum SavingsCommands {
    /// Record a savings contribution
    Add {
        /// Savings goal (e.g., "Emergency")
        goal: String,
        /// Amount contributed
        amount: String,
    },

    /// List savings contributions
    #[command(alias = "ls")]
    List,

    /// Edit a savings contribution
    Edit {
        /// Position shown by `list`
        index: String,
        #[arg(short, long)]
        goal: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
    },

    /// Delete a savings contribution
    #[command(alias = "rm")]
    Delete {
        /// Position shown by `list`
        index: String,
    },
}

/// Handle an income command
pub fn handle_income_command(
    store: &LedgerStore,
    settings: &Settings,
    cmd: IncomeCommands,
) -> LedgerResult<()> {
    let service = LedgerService::new(store);
    let mut doc = load_document(store);

    match cmd {
        IncomeCommands::Add {
            amount,
            source,
            date,
        } => {
            let date = date.unwrap_or_else(today);
            let entry = service.add_income(&mut doc, &amount, &source, &date)?;
            println!(
                "Income added: {}",
                Entry::Income(entry).describe(&doc.currency)
            );
        }

        IncomeCommands::List => {
            println!(
                "{}",
                format_entry_list(&doc, Section::Income, &settings.date_format)?
            );
        }

        IncomeCommands::Edit {
            index,
            amount,
            source,
            date,
        } => {
            let position = parse_position(&index)?;
            let updates = collect_updates(&[
                ("amount", &amount),
                ("source", &source),
                ("date", &date),
            ]);
            let outcome = service.edit_entry(&mut doc, Section::Income, position, &updates)?;
            print_edit_outcome(&outcome, position, &doc.currency);
        }

        IncomeCommands::Delete { index } => {
            delete(&service, &mut doc, Section::Income, &index)?;
        }
    }

    Ok(())
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &LedgerStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> LedgerResult<()> {
    let service = LedgerService::new(store);
    let mut doc = load_document(store);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
        } => {
            let date = date.unwrap_or_else(today);
            let added = service.add_expense(&mut doc, &amount, &category, &date)?;
            println!(
                "Expense added: {}",
                Entry::Expense(added.entry).describe(&doc.currency)
            );
            if let Some(warning) = added.warning {
                println!("{}", warning);
            }
        }

        ExpenseCommands::List => {
            println!(
                "{}",
                format_entry_list(&doc, Section::Expenses, &settings.date_format)?
            );
        }

        ExpenseCommands::Edit {
            index,
            amount,
            category,
            date,
        } => {
            let position = parse_position(&index)?;
            let updates = collect_updates(&[
                ("amount", &amount),
                ("category", &category),
                ("date", &date),
            ]);
            let outcome = service.edit_entry(&mut doc, Section::Expenses, position, &updates)?;
            print_edit_outcome(&outcome, position, &doc.currency);
        }

        ExpenseCommands::Delete { index } => {
            delete(&service, &mut doc, Section::Expenses, &index)?;
        }
    }

    Ok(())
}

/// Handle a savings command
pub fn handle_savings_command(
    store: &LedgerStore,
    settings: &Settings,
    cmd: SavingsCommands,
) -> LedgerResult<()> {
    let service = LedgerService::new(store);
    let mut doc = load_document(store);

    match cmd {
        SavingsCommands::Add { goal, amount } => {
            let entry = service.add_savings(&mut doc, &goal, &amount)?;
            println!(
                "Savings added: {}",
                Entry::Savings(entry).describe(&doc.currency)
            );
        }

        SavingsCommands::List => {
            println!(
                "{}",
                format_entry_list(&doc, Section::Savings, &settings.date_format)?
            );
        }

        SavingsCommands::Edit {
            index,
            goal,
            amount,
        } => {
            let position = parse_position(&index)?;
            let updates = collect_updates(&[("goal", &goal), ("amount", &amount)]);
            let outcome = service.edit_entry(&mut doc, Section::Savings, position, &updates)?;
            print_edit_outcome(&outcome, position, &doc.currency);
        }

        SavingsCommands::Delete { index } => {
            delete(&service, &mut doc, Section::Savings, &index)?;
        }
    }

    Ok(())
}

/// Pair each given option with its field name, dropping the ones not given
fn collect_updates<'a>(
    options: &[(&'static str, &'a Option<String>)],
) -> Vec<(&'static str, &'a str)> {
    options
        .iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (*name, v)))
        .collect()
}

fn delete(
    service: &LedgerService<'_>,
    doc: &mut BudgetDocument,
    section: Section,
    index: &str,
) -> LedgerResult<()> {
    let position = parse_position(index)?;
    let removed = service.delete_entry(doc, section, position)?;
    println!("Deleted: {}", removed.describe(&doc.currency));
    Ok(())
}

fn print_edit_outcome(outcome: &EditOutcome, position: usize, currency: &str) {
    for rejected in &outcome.rejected {
        println!("Skipped {}: {}", rejected.field, rejected.reason);
    }

    if outcome.changed() {
        println!(
            "Updated {} #{}: {}",
            outcome.after.section(),
            position,
            outcome.after.describe(currency)
        );
        println!("  was: {}", outcome.before.describe(currency));
    } else {
        println!("No changes made.");
    }
}
