//! Core data models for NexTrack
//!
//! Transactions, budgets, money amounts and the recognized category lists.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use budget::{Budget, BudgetPeriod, BudgetValidationError};
pub use category::{ExpenseCategory, IncomeCategory};
pub use ids::{BudgetId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use transaction::{parse_tags, Transaction, TransactionType};
