//! Backup CLI commands
//!
//! Implements backup, restore and clear. Clearing always backs up first and
//! asks for confirmation unless `--force` is given.

use crate::error::LedgerResult;
use crate::storage::{ClearConfirmation, LedgerStore};

use super::prompt;

/// Handle the backup command
pub fn handle_backup_command(store: &LedgerStore) -> LedgerResult<()> {
    let outcome = store.backup()?;
    println!("{}", outcome);
    if outcome.is_created() {
        println!("The ledger is now empty. Run 'budget restore' to bring the data back.");
    }
    Ok(())
}

/// Handle the restore command
pub fn handle_restore_command(store: &LedgerStore) -> LedgerResult<()> {
    let outcome = store.restore()?;
    println!("{}", outcome);

    if outcome.is_restored() {
        let loaded = store.load();
        if let Some(err) = loaded.recovered_from {
            eprintln!("Warning: the restored ledger could not be read: {}", err);
        } else {
            let doc = loaded.document;
            println!(
                "Restored {} income, {} expense and {} savings entries.",
                doc.income.len(),
                doc.expenses.len(),
                doc.savings.len()
            );
        }
    }
    Ok(())
}

/// Handle the clear command
pub fn handle_clear_command(store: &LedgerStore, force: bool) -> LedgerResult<()> {
    let confirmation = if force {
        ClearConfirmation::confirmed()
    } else {
        let answer = prompt("Are you sure you want to clear all data? Type 'yes' to confirm: ")?;
        match ClearConfirmation::from_answer(&answer) {
            Some(confirmation) => confirmation,
            None => {
                println!("Clear cancelled.");
                return Ok(());
            }
        }
    };

    let outcome = store.clear_all(confirmation)?;
    println!("{}", outcome.backup);
    println!("All data cleared.");
    Ok(())
}
