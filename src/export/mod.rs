//! Export module for NexTrack
//!
//! Provides data export in multiple formats:
//! - JSON: the full `{ transactions, budgets }` document
//! - YAML: the same document, human-readable
//! - CSV: transactions only, readable by the importer

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_transactions_csv;
pub use json::{default_export_filename, export_json, DataExport};
pub use yaml::export_yaml;

use clap::ValueEnum;

/// Output format for `nextrack export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
    Csv,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }
}
