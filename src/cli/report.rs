//! Report CLI command

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use super::load_document;
use crate::error::{LedgerError, LedgerResult};
use crate::reports::SummaryReport;
use crate::storage::LedgerStore;

/// Handle the report command
pub fn handle_report_command(store: &LedgerStore, csv: Option<&Path>) -> LedgerResult<()> {
    let doc = load_document(store);
    let report = SummaryReport::generate(&doc)?;

    match csv {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                LedgerError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            report.export_csv(BufWriter::new(file))?;
            println!("Report exported to {}", path.display());
        }
        None => print!("{}", report.format_terminal()),
    }

    Ok(())
}
