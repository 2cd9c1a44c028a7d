//! JSON Export functionality
//!
//! Writes every transaction and budget as a single
//! `{ "transactions": [...], "budgets": [...] }` document.

use std::io::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{NexTrackError, NexTrackResult};
use crate::models::{Budget, Transaction};
use crate::storage::Storage;

/// Full data export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataExport {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
}

impl DataExport {
    /// Snapshot both stores
    pub fn from_storage(storage: &Storage) -> NexTrackResult<Self> {
        Ok(Self {
            transactions: storage.transactions.get_all()?,
            budgets: storage.budgets.get_all()?,
        })
    }
}

/// File name offered for an export made on `date`
pub fn default_export_filename(date: NaiveDate, extension: &str) -> String {
    format!("nextrack-data-{}.{}", date.format("%Y-%m-%d"), extension)
}

/// Export all data to JSON
pub fn export_json<W: Write>(storage: &Storage, writer: &mut W, pretty: bool) -> NexTrackResult<()> {
    let export = DataExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| NexTrackError::Export(e.to_string()))?;

    Ok(())
}
