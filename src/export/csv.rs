//! CSV Export functionality
//!
//! Writes transactions in the column order the importer reads
//! (`description,amount,category,date`) so an export can be imported again.
//! Expenses are written with a negative amount.
//!
//! The importer splits lines on bare commas and knows nothing about quoting,
//! so fields are never quoted. Commas inside text become `;` and line breaks
//! become spaces.

use std::io::Write;

use crate::error::{NexTrackError, NexTrackResult};
use crate::storage::Storage;

/// Header line of the transaction export
pub const CSV_HEADER: [&str; 4] = ["Description", "Amount", "Category", "Date"];

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: W) -> NexTrackResult<()> {
    let mut csv_writer = ::csv::WriterBuilder::new()
        .quote_style(::csv::QuoteStyle::Never)
        .from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| NexTrackError::Export(e.to_string()))?;

    for txn in storage.transactions.get_all()? {
        let amount = txn.signed_amount().value().to_string();
        csv_writer
            .write_record([
                plain_field(&txn.description),
                amount,
                plain_field(&txn.category),
                plain_field(&txn.date),
            ])
            .map_err(|e| NexTrackError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| NexTrackError::Export(e.to_string()))?;
    Ok(())
}

/// Text with the separators the importer would split on replaced
fn plain_field(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            ',' => ';',
            '\r' | '\n' => ' ',
            c => c,
        })
        .collect()
}
