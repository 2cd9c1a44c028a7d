//! CLI command handler for CSV import

use std::path::Path;

use crate::error::NexTrackResult;
use crate::services::ImportService;
use crate::storage::Storage;

/// Help text describing the accepted file layout
pub const IMPORT_FORMAT_HELP: &str = "\
Each line after the header is read as: description,amount,category,date

Positive amounts are imported as income, everything else as expenses.
Note that this differs from the commonly documented Date,Amount,Category,Description
order; arrange your columns as shown above.";

/// Handle the import command
pub fn handle_import_command(storage: &Storage, file: &Path) -> NexTrackResult<()> {
    let service = ImportService::new(storage);
    let result = service.import_file(file)?;

    if result.imported == 0 {
        println!("No transactions found in CSV file.");
    } else {
        println!("Successfully imported {} transactions!", result.imported);
    }

    Ok(())
}
