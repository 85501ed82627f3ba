//! Currency and budget limit commands

use clap::Subcommand;

use super::load_document;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Section;
use crate::services::LedgerService;
use crate::storage::LedgerStore;

/// Budget limit subcommands
#[derive(Subcommand)]
pub enum LimitCommands {
    /// Set the limit on total expenses
    Set {
        /// Limit amount (e.g., "1500")
        amount: String,
    },

    /// Remove the limit
    Remove,

    /// Show the current limit and how much of it is used
    Show,
}

/// Handle the currency command
pub fn handle_currency_command(store: &LedgerStore, code: &str) -> LedgerResult<()> {
    let service = LedgerService::new(store);
    let mut doc = load_document(store);

    service.set_currency(&mut doc, code)?;
    println!("Currency set to {}", doc.currency);
    Ok(())
}

/// Handle a budget limit command
pub fn handle_limit_command(store: &LedgerStore, cmd: LimitCommands) -> LedgerResult<()> {
    let service = LedgerService::new(store);
    let mut doc = load_document(store);

    match cmd {
        LimitCommands::Set { amount } => {
            let limit = service.set_budget_limit(&mut doc, &amount)?;
            println!(
                "Budget limit set to {}",
                limit.format_with_currency(&doc.currency)
            );
        }

        LimitCommands::Remove => match service.remove_budget_limit(&mut doc)? {
            Some(previous) => println!(
                "Removed budget limit of {}",
                previous.format_with_currency(&doc.currency)
            ),
            None => println!("No budget limit was set."),
        },

        LimitCommands::Show => {
            let spent = doc.total(Section::Expenses)?;
            match doc.budget_limit {
                Some(limit) => {
                    println!("Budget limit:   {}", limit.format_with_currency(&doc.currency));
                    println!("Total expenses: {}", spent.format_with_currency(&doc.currency));
                    let (label, difference) = if spent > limit {
                        ("Over limit by: ", spent.checked_sub(limit))
                    } else {
                        ("Remaining:     ", limit.checked_sub(spent))
                    };
                    let difference = difference
                        .ok_or_else(|| LedgerError::total_out_of_range("budget difference"))?;
                    println!("{} {}", label, difference.format_with_currency(&doc.currency));
                }
                None => {
                    println!("No budget limit set.");
                    println!("Use 'budget limit set <amount>' to set one.");
                }
            }
        }
    }

    Ok(())
}
