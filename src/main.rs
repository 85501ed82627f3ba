use std::env;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_manager::cli::{
    handle_backup_command, handle_clear_command, handle_currency_command, handle_expense_command,
    handle_history_command, handle_income_command, handle_limit_command, handle_report_command,
    handle_restore_command, handle_savings_command,
};
use budget_manager::config::{LedgerPaths, Settings};
use budget_manager::display::labeled;
use budget_manager::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Track income, expenses and savings from the terminal",
    long_about = "A personal budget ledger. Record income, expenses and savings \
                  contributions, set a spending limit, and get a summary of where \
                  your money went. All data lives in a single JSON file."
)]
struct Cli {
    /// Use this ledger file instead of the default location
    #[arg(long, global = true, env = "BUDGET_MANAGER_FILE")]
    file: Option<PathBuf>,

    /// Show informational log messages
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income commands
    #[command(subcommand)]
    Income(budget_manager::cli::IncomeCommands),

    /// Expense commands
    #[command(subcommand, alias = "expenses")]
    Expense(budget_manager::cli::ExpenseCommands),

    /// Savings commands
    #[command(subcommand, alias = "saving")]
    Savings(budget_manager::cli::SavingsCommands),

    /// Set the display currency (e.g., USD, EUR)
    Currency {
        /// Currency code
        code: String,
    },

    /// Budget limit commands
    #[command(subcommand)]
    Limit(budget_manager::cli::LimitCommands),

    /// Show the budget summary report
    Report {
        /// Write the report to a CSV file instead
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Move the ledger file to its backup
    Backup,

    /// Move the backup back over the ledger file
    Restore,

    /// Back up and then erase all data
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show current configuration and paths
    Config,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| default_level.to_string())
                .as_str(),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = match cli.file {
        Some(file) => LedgerPaths::with_data_file(file),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let store = LedgerStore::open(paths.clone(), &settings)?;

    match cli.command {
        Some(Commands::Income(cmd)) => handle_income_command(&store, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&store, &settings, cmd)?,
        Some(Commands::Savings(cmd)) => handle_savings_command(&store, &settings, cmd)?,
        Some(Commands::Currency { code }) => handle_currency_command(&store, &code)?,
        Some(Commands::Limit(cmd)) => handle_limit_command(&store, cmd)?,
        Some(Commands::Report { csv }) => handle_report_command(&store, csv.as_deref())?,
        Some(Commands::Backup) => handle_backup_command(&store)?,
        Some(Commands::Restore) => handle_restore_command(&store)?,
        Some(Commands::Clear { force }) => handle_clear_command(&store, force)?,
        Some(Commands::History { limit }) => handle_history_command(&store, &settings, limit)?,
        Some(Commands::Config) => {
            println!("Budget Manager Configuration");
            println!("============================");
            println!("{}", labeled("Base directory", paths.base_dir().display(), 16));
            println!("{}", labeled("Ledger file", paths.data_file().display(), 16));
            println!("{}", labeled("Backup file", paths.backup_file().display(), 16));
            println!("{}", labeled("Settings file", paths.settings_file().display(), 16));
            println!("{}", labeled("Audit log", paths.audit_log().display(), 16));
            println!();

            match store.backups().backup_info()? {
                Some(info) => {
                    let status = if info.is_valid { "valid" } else { "unreadable" };
                    println!("Backup: {} bytes, {}", info.size_bytes, status);
                    if let Some(modified) = info.modified_at {
                        println!("  Last written: {}", modified.format("%Y-%m-%d %H:%M:%S UTC"));
                    }
                }
                None => println!("Backup: none"),
            }
            println!();

            println!("Settings:");
            println!("  Audit enabled: {}", settings.audit_enabled);
            println!("  Date format:   {}", settings.date_format);
            println!("  History limit: {}", settings.history_limit);
        }
        None => {
            println!("Budget Manager - track income, expenses and savings");
            println!();
            println!("Run 'budget --help' for available commands.");
            println!("Run 'budget report' to see your budget summary.");
        }
    }

    Ok(())
}
