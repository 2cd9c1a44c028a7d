//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod data;
pub mod export;
pub mod import;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use data::{handle_clear_command, handle_dashboard_command, handle_history_command};
pub use export::handle_export_command;
pub use import::{handle_import_command, IMPORT_FORMAT_HELP};
pub use transaction::{
    handle_expense_command, handle_income_command, handle_transaction_command, ExpenseCommands,
    IncomeCommands, TransactionCommands,
};
