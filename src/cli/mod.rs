//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod backup;
pub mod entry;
pub mod history;
pub mod report;
pub mod settings;

pub use backup::{handle_backup_command, handle_clear_command, handle_restore_command};
pub use entry::{
    handle_expense_command, handle_income_command, handle_savings_command, ExpenseCommands,
    IncomeCommands, SavingsCommands,
};
pub use history::handle_history_command;
pub use report::handle_report_command;
pub use settings::{handle_currency_command, handle_limit_command, LimitCommands};

use std::io::{self, BufRead, Write};

use crate::error::LedgerResult;
use crate::models::{BudgetDocument, DATE_FORMAT};
use crate::storage::LedgerStore;

/// Load the ledger, warning when it could not be read
///
/// An unreadable file is left where it is, but the empty document used in its
/// place overwrites it on the next change.
pub(crate) fn load_document(store: &LedgerStore) -> BudgetDocument {
    let loaded = store.load();
    if let Some(err) = loaded.recovered_from {
        eprintln!("Warning: {}", err);
        eprintln!("Starting with an empty budget.");
        eprintln!(
            "The next change will replace {}. Copy it elsewhere first to keep it.",
            store.paths().data_file().display()
        );
    }
    loaded.document
}

/// Today's date in ledger format
pub(crate) fn today() -> String {
    chrono::Local::now()
        .date_naive()
        .format(DATE_FORMAT)
        .to_string()
}

/// Print a question and read one line of input
pub(crate) fn prompt(question: &str) -> LedgerResult<String> {
    print!("{}", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer)
}
