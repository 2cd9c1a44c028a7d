//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions, budgets and the dashboard
//! for terminal display.

pub mod budget;
pub mod dashboard;
pub mod report;
pub mod transaction;

pub use budget::{format_budget_list, format_suggestions};
pub use dashboard::{format_dashboard, Dashboard};
pub use transaction::format_transaction_register;
