//! NexTrack - Personal finance tracker
//!
//! This library provides the core functionality for the NexTrack finance
//! tracker: recording income and expenses, keeping budgets, importing bank
//! CSV files, and deriving metrics and budget suggestions from the recorded
//! transactions.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budgets, money)
//! - `storage`: Key-value persistence of the transaction and budget stores
//! - `reports`: Metrics, budget suggestions and chart series
//! - `services`: Business logic layer, including CSV import
//! - `export`: JSON, YAML and CSV export
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use nextrack::reports::{buffered_suggestions, compute_metrics};
//! use nextrack::storage::Storage;
//!
//! let storage = Storage::in_memory();
//! let transactions = storage.transactions.get_all()?;
//! let metrics = compute_metrics(&transactions);
//! let suggestions = buffered_suggestions(&transactions);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::NexTrackError;
