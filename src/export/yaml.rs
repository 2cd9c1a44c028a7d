//! YAML Export functionality
//!
//! The same document as the JSON export, in a format that is easier to read.

use std::io::Write;

use crate::error::{NexTrackError, NexTrackResult};
use crate::export::json::DataExport;
use crate::storage::Storage;

/// Export all data to YAML
pub fn export_yaml<W: Write>(storage: &Storage, writer: &mut W) -> NexTrackResult<()> {
    let export = DataExport::from_storage(storage)?;

    writeln!(writer, "# NexTrack data export")
        .and_then(|_| writeln!(writer, "# Version: {}", env!("CARGO_PKG_VERSION")))
        .and_then(|_| writeln!(writer))
        .map_err(|e| NexTrackError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| NexTrackError::Export(e.to_string()))?;

    Ok(())
}
