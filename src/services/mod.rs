//! Service layer for NexTrack
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and defaults before records are appended.

pub mod budget;
pub mod import;
pub mod transaction;

pub use budget::{BudgetService, BudgetStatus};
pub use import::{parse_csv, ImportResult, ImportService};
pub use transaction::{CreateTransactionInput, TransactionFilter, TransactionService};
