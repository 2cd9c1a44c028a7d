//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::Local;

use crate::error::{NexTrackError, NexTrackResult};
use crate::export::{
    default_export_filename, export_json, export_transactions_csv, export_yaml, ExportFormat,
};
use crate::storage::Storage;

/// Handle the export command
///
/// Writes to `output`, or to `nextrack-data-<today>.<ext>` in the current
/// directory.
pub fn handle_export_command(
    storage: &Storage,
    output: Option<PathBuf>,
    format: ExportFormat,
    compact: bool,
) -> NexTrackResult<PathBuf> {
    let path = output.unwrap_or_else(|| {
        PathBuf::from(default_export_filename(
            Local::now().date_naive(),
            format.extension(),
        ))
    });

    let file = File::create(&path)
        .map_err(|e| NexTrackError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => export_json(storage, &mut writer, !compact)?,
        ExportFormat::Yaml => export_yaml(storage, &mut writer)?,
        ExportFormat::Csv => export_transactions_csv(storage, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| NexTrackError::Export(e.to_string()))?;

    println!("Exported data to {}", path.display());
    Ok(path)
}
