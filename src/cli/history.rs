//! History CLI command
//!
//! Shows the most recent audit log entries.

use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::storage::LedgerStore;

/// Handle the history command
pub fn handle_history_command(
    store: &LedgerStore,
    settings: &Settings,
    limit: Option<usize>,
) -> LedgerResult<()> {
    let Some(log) = store.audit_log() else {
        println!("Audit logging is disabled in {}", store.paths().settings_file().display());
        return Ok(());
    };

    let entries = log.read_recent(limit.unwrap_or(settings.history_limit))?;
    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry);
    }
    Ok(())
}
