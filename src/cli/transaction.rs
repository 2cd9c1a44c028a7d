//! Transaction CLI commands
//!
//! `income add`, `expense add` and `transaction list`.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_transaction_register;
use crate::error::{NexTrackError, NexTrackResult};
use crate::models::{ExpenseCategory, IncomeCategory, Money, TransactionType};
use crate::services::{CreateTransactionInput, TransactionFilter, TransactionService};
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record money received
    Add {
        /// Amount (e.g. "2500" or "2,500.00")
        amount: String,
        /// What the income was for
        description: String,
        /// Income category
        #[arg(short, long, value_enum, default_value = "salary")]
        category: IncomeCategory,
        /// Date received (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },
}

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record money spent
    Add {
        /// Amount (e.g. "42.50")
        amount: String,
        /// What the money was spent on
        description: String,
        /// Expense category
        #[arg(short, long, value_enum, default_value = "other")]
        category: ExpenseCategory,
        /// Date spent (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },
}

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// List transactions, newest first
    List {
        /// Only income
        #[arg(long, conflicts_with = "expense")]
        income: bool,
        /// Only expenses
        #[arg(long)]
        expense: bool,
        /// Filter by category name
        #[arg(short, long)]
        category: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> NexTrackResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        IncomeCommands::Add {
            amount,
            description,
            category,
            date,
            tags,
        } => {
            let input = build_input(&amount, category.name(), description, date, tags)?;
            let txn = service.record_income(input)?;

            println!(
                "Recorded income: {} from {} ({})",
                txn.amount.format_with_symbol(&settings.currency_symbol),
                txn.description,
                txn.category
            );
            println!("  ID: {}", txn.id.short());
        }
    }

    Ok(())
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> NexTrackResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            category,
            date,
            tags,
        } => {
            let input = build_input(&amount, category.name(), description, date, tags)?;
            let txn = service.record_expense(input)?;

            println!(
                "Recorded expense: {} for {} ({})",
                txn.amount.format_with_symbol(&settings.currency_symbol),
                txn.description,
                txn.category
            );
            println!("  ID: {}", txn.id.short());
        }
    }

    Ok(())
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> NexTrackResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::List {
            income,
            expense,
            category,
            limit,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);
            if income {
                filter = filter.kind(TransactionType::Income);
            } else if expense {
                filter = filter.kind(TransactionType::Expense);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }

            let transactions = service.list(&filter)?;
            print!("{}", format_transaction_register(&transactions, settings));
        }
    }

    Ok(())
}

fn build_input(
    amount: &str,
    category: &str,
    description: String,
    date: Option<String>,
    tags: Option<String>,
) -> NexTrackResult<CreateTransactionInput> {
    let amount = Money::parse(amount).map_err(|e| NexTrackError::Validation(e.to_string()))?;

    let date = date
        .map(|d| {
            NaiveDate::parse_from_str(&d, "%Y-%m-%d").map_err(|_| {
                NexTrackError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", d))
            })
        })
        .transpose()?;

    Ok(CreateTransactionInput {
        amount,
        category: category.to_string(),
        description,
        date,
        tags,
    })
}
