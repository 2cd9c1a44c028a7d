use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use nextrack::cli::{
    handle_budget_command, handle_clear_command, handle_dashboard_command,
    handle_expense_command, handle_export_command, handle_history_command,
    handle_import_command, handle_income_command, handle_transaction_command, BudgetCommands,
    ExpenseCommands, IncomeCommands, TransactionCommands, IMPORT_FORMAT_HELP,
};
use nextrack::config::paths::DATA_DIR_ENV;
use nextrack::config::{NexTrackPaths, Settings};
use nextrack::export::ExportFormat;
use nextrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "nextrack",
    version,
    about = "Personal finance tracker",
    long_about = "NexTrack records income and expenses, tracks budgets, imports bank \
                  CSV files and suggests budgets from your spending history."
)]
struct Cli {
    /// Directory holding NexTrack data
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record income
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Record expenses
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Browse transactions
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show totals, recent activity, charts and suggestions
    #[command(alias = "dash")]
    Dashboard,

    /// Import transactions from a CSV file
    #[command(after_help = IMPORT_FORMAT_HELP)]
    Import {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Export all data
    Export {
        /// Output file (defaults to nextrack-data-<date>.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Write JSON on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Delete all transactions and budgets
    Clear {
        /// Confirm deletion
        #[arg(long)]
        force: bool,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => NexTrackPaths::with_base_dir(dir),
        None => NexTrackPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(&paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Income(cmd)) => handle_income_command(&storage, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?
        }
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Dashboard) => handle_dashboard_command(&storage, &settings)?,
        Some(Commands::Import { file }) => handle_import_command(&storage, &file)?,
        Some(Commands::Export {
            output,
            format,
            compact,
        }) => {
            handle_export_command(&storage, output, format, compact)?;
        }
        Some(Commands::Clear { force }) => handle_clear_command(&storage, force)?,
        Some(Commands::History { limit }) => handle_history_command(&storage, limit)?,
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }

            println!("NexTrack Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Storage keys:");
            println!("  {}", storage.transactions.key());
            println!("  {}", storage.budgets.key());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Date format:         {}", settings.date_format);
            println!("  Recent transactions: {}", settings.recent_transactions);
        }
        None => {
            println!("NexTrack - Personal finance tracker");
            println!();
            println!("Run 'nextrack --help' for usage information.");
            println!("Run 'nextrack dashboard' for an overview of your finances.");
        }
    }

    Ok(())
}
