//! Entry display formatting
//!
//! Formats the entries of a section as a numbered table. Positions start at
//! 1 and match the positions accepted by `edit` and `delete`.

use std::fmt::Write;

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use super::format::truncate;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetDocument, Section};

const LABEL_WIDTH: usize = 40;

fn label_header(section: Section) -> &'static str {
    match section {
        Section::Income => "Source",
        Section::Expenses => "Category",
        Section::Savings => "Goal",
    }
}

/// Format all entries of a section as a table
///
/// Fails with a config error if `date_format` is not a valid strftime format.
pub fn format_entry_list(
    doc: &BudgetDocument,
    section: Section,
    date_format: &str,
) -> LedgerResult<String> {
    let entries = doc.entries(section);
    if entries.is_empty() {
        return Ok(format!("No {} records found.", section));
    }

    let has_date = section != Section::Savings;
    let mut builder = Builder::default();

    let mut header = vec!["#".to_string()];
    if has_date {
        header.push("Date".to_string());
    }
    header.push(label_header(section).to_string());
    header.push(format!("Amount ({})", doc.currency));
    builder.push_record(header);

    for (index, entry) in entries.iter().enumerate() {
        let mut row = vec![(index + 1).to_string()];
        if let Some(date) = entry.date() {
            let mut text = String::new();
            write!(text, "{}", date.format(date_format)).map_err(|_| {
                LedgerError::Config(format!("Invalid date format '{}'", date_format))
            })?;
            row.push(text);
        }
        row.push(truncate(entry.label(), LABEL_WIDTH));
        row.push(entry.amount().to_string());
        builder.push_record(row);
    }

    let total = doc.total(section)?;
    let mut footer = vec!["".to_string()];
    if has_date {
        footer.push("".to_string());
    }
    footer.push("TOTAL".to_string());
    footer.push(total.to_string());
    builder.push_record(footer);

    let amount_column = if has_date { 3 } else { 2 };
    let mut table = builder.build();
    table
        .with(Style::psql())
        .modify(Columns::single(amount_column), Alignment::right());
    Ok(table.to_string())
}
