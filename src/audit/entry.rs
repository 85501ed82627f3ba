//! Audit log records
//!
//! One record per ledger change. A record names what changed (an entry at a
//! position, the currency, the budget limit or the ledger file as a whole)
//! and keeps the JSON values on either side of the change.

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::diff::generate_diff;
use crate::models::{Entry, Money, Section};

/// What a change did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Edit,
    Delete,
    /// Currency or budget limit changed
    Configure,
    /// Ledger moved to its backup and replaced by an empty one
    Clear,
    /// Ledger brought back from its backup
    Restore,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Operation::Add => "added",
            Operation::Edit => "edited",
            Operation::Delete => "deleted",
            Operation::Configure => "set",
            Operation::Clear => "cleared",
            Operation::Restore => "restored",
        };
        f.pad(verb)
    }
}

/// The part of the ledger a change touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Subject {
    /// An entry at a 1-based position at the time of the change
    Entry { section: Section, position: usize },
    Currency,
    BudgetLimit,
    Ledger,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Entry { section, position } => write!(f, "{} #{}", section, position),
            Subject::Currency => f.write_str("currency"),
            Subject::BudgetLimit => f.write_str("budget limit"),
            Subject::Ledger => f.write_str("ledger"),
        }
    }
}

/// A single audit log record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change was written (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub subject: Subject,

    /// Source, category or goal of the entry involved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    /// Field-by-field summary, e.g. `amount: 10.0 -> 12.5`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, subject: Subject) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            subject,
            label: None,
            before: None,
            after: None,
            changes: None,
        }
    }

    fn at(operation: Operation, position: usize, entry: &Entry) -> Self {
        let subject = Subject::Entry {
            section: entry.section(),
            position,
        };
        Self {
            label: Some(entry.label().to_string()),
            ..Self::new(operation, subject)
        }
    }

    /// An entry appended at `position`
    pub fn entry_added(position: usize, entry: &Entry) -> Self {
        Self {
            after: serde_json::to_value(entry).ok(),
            ..Self::at(Operation::Add, position, entry)
        }
    }

    /// The entry at `position` rewritten from `before` to `after`
    pub fn entry_edited(position: usize, before: &Entry, after: &Entry) -> Self {
        let before = serde_json::to_value(before).ok();
        let after_value = serde_json::to_value(after).ok();
        let changes = match (&before, &after_value) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };
        Self {
            before,
            after: after_value,
            changes,
            ..Self::at(Operation::Edit, position, after)
        }
    }

    /// The entry that was at `position`
    pub fn entry_deleted(position: usize, removed: &Entry) -> Self {
        Self {
            before: serde_json::to_value(removed).ok(),
            ..Self::at(Operation::Delete, position, removed)
        }
    }

    pub fn currency_changed(before: &str, after: &str) -> Self {
        Self {
            before: Some(json!(before)),
            after: Some(json!(after)),
            changes: Some(format!("{} -> {}", before, after)),
            ..Self::new(Operation::Configure, Subject::Currency)
        }
    }

    /// `None` on either side means no limit
    pub fn budget_limit_changed(before: Option<Money>, after: Option<Money>) -> Self {
        let describe = |limit: Option<Money>| match limit {
            Some(limit) => limit.to_string(),
            None => "none".to_string(),
        };
        Self {
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            changes: Some(format!("{} -> {}", describe(before), describe(after))),
            ..Self::new(Operation::Configure, Subject::BudgetLimit)
        }
    }

    /// All data erased; `backup` is where the previous ledger went, if any
    pub fn ledger_cleared(backup: Option<&Path>) -> Self {
        let backup = backup.map(|p| p.display().to_string());
        let changes = backup
            .as_ref()
            .map(|p| format!("previous ledger kept at {}", p));
        Self {
            before: Some(json!({ "backup": backup })),
            changes,
            ..Self::new(Operation::Clear, Subject::Ledger)
        }
    }

    pub fn ledger_restored(from: &Path) -> Self {
        let from = from.display().to_string();
        Self {
            after: Some(json!({ "backup": from })),
            changes: Some(format!("from {}", from)),
            ..Self::new(Operation::Restore, Subject::Ledger)
        }
    }
}

/// One line per record, plus an indented line listing the changes
impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {:<8} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            self.subject
        )?;
        if let Some(label) = &self.label {
            write!(f, ": {}", label)?;
        }
        if let Some(changes) = &self.changes {
            write!(f, "\n    {}", changes)?;
        }
        Ok(())
    }
}
