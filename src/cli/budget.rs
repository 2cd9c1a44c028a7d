//! Budget CLI commands
//!
//! Implements CLI commands for creating budgets, listing them, and turning
//! spending suggestions into budgets.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_budget_list, format_suggestions};
use crate::error::{NexTrackError, NexTrackResult};
use crate::models::{BudgetPeriod, Money};
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Create a budget for a category
    Create {
        /// Category name
        category: String,
        /// Amount (e.g. "400" or "400.00")
        amount: String,
        /// Budget period
        #[arg(short, long, value_enum, default_value = "monthly")]
        period: BudgetPeriod,
    },

    /// List budgets with how much of each is used
    List,

    /// Suggest monthly budgets from past spending
    Suggest,

    /// Create a monthly budget from the suggestion for a category
    Adopt {
        /// Category name
        category: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> NexTrackResult<()> {
    let service = BudgetService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        BudgetCommands::Create {
            category,
            amount,
            period,
        } => {
            let amount =
                Money::parse(&amount).map_err(|e| NexTrackError::Validation(e.to_string()))?;
            let budget = service.create(&category, amount, period)?;

            println!(
                "Created {} budget for '{}': {}",
                budget.period,
                budget.category,
                budget.amount.format_with_symbol(symbol)
            );
            println!("  ID: {}", budget.id.short());
        }

        BudgetCommands::List => {
            let statuses = service.list()?;
            print!("{}", format_budget_list(&statuses, settings));
        }

        BudgetCommands::Suggest => {
            let suggestions = service.suggest()?;
            println!("Smart Budget Suggestions");
            print!("{}", format_suggestions(&suggestions, settings));
            if !suggestions.is_empty() {
                println!("Use 'nextrack budget adopt <category>' to create one.");
            }
        }

        BudgetCommands::Adopt { category } => {
            let budget = service.adopt(&category)?;
            println!(
                "Created monthly budget for '{}': {}",
                budget.category,
                budget.amount.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
