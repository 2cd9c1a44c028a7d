//! CSV Import service
//!
//! Reads bank-style CSV text into transactions. The format is deliberately
//! loose: the first line is a header and is ignored, fields are split on
//! bare commas (no quoting), and each row is read as
//! `description,amount,category,date`.
//!
//! Rows with fewer than four fields are dropped without comment. A positive
//! amount makes an income; anything else, including an amount that does not
//! parse, makes an expense. The stored amount is always the absolute value.

use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::error::{NexTrackError, NexTrackResult};
use crate::models::{Money, Transaction, TransactionId, TransactionType};
use crate::storage::Storage;

/// Message shown when the import file cannot be read
pub const IMPORT_FAILED_MESSAGE: &str =
    "Error importing transactions. Please check your file format.";

pub const DEFAULT_DESCRIPTION: &str = "Imported transaction";
pub const DEFAULT_CATEGORY: &str = "Other";

/// Minimum number of comma-separated fields for a row to be read
const MIN_FIELDS: usize = 4;

/// Result of a completed import
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Number of transactions imported
    pub imported: usize,
    /// IDs of imported transactions, in file order
    pub imported_ids: Vec<TransactionId>,
}

/// Parse CSV text into transactions
///
/// `today` fills in rows with an empty date.
pub fn parse_csv(text: &str, today: NaiveDate) -> Vec<Transaction> {
    text.split('\n')
        .skip(1)
        .filter_map(|line| parse_row(line, today))
        .collect()
}

fn parse_row(line: &str, today: NaiveDate) -> Option<Transaction> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let (description, amount, category, date) = (fields[0], fields[1], fields[2], fields[3]);

    let amount = Money::parse_lenient(amount);
    let kind = if amount.is_positive() {
        TransactionType::Income
    } else {
        TransactionType::Expense
    };

    Some(Transaction::new(
        kind,
        amount.abs(),
        non_empty_or(category, DEFAULT_CATEGORY),
        non_empty_or(description, DEFAULT_DESCRIPTION),
        if date.is_empty() {
            today.format("%Y-%m-%d").to_string()
        } else {
            date.to_string()
        },
    ))
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Service for CSV import
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Read a CSV file and import every accepted row
    pub fn import_file(&self, path: &Path) -> NexTrackResult<ImportResult> {
        let text = std::fs::read_to_string(path)
            .map_err(|_| NexTrackError::Import(IMPORT_FAILED_MESSAGE.to_string()))?;
        self.import_text(&text)
    }

    /// Import every accepted row of CSV text
    ///
    /// Rows are stored one at a time. If storing a row fails, the rows before
    /// it stay recorded.
    pub fn import_text(&self, text: &str) -> NexTrackResult<ImportResult> {
        let today = Local::now().date_naive();
        let mut result = ImportResult::default();

        for txn in parse_csv(text, today) {
            let txn = self.storage.append_transaction(txn)?;
            result.imported += 1;
            result.imported_ids.push(txn.id);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::NexTrackPaths;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = NexTrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(&paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_parse_income_and_expense() {
        let csv = "description,amount,category,date\n\
                   Paycheck,2500,Salary,2024-01-15\n\
                   Groceries,-84.20,Food & Dining,2024-01-16";

        let rows = parse_csv(csv, today());
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].kind, TransactionType::Income);
        assert_eq!(rows[0].amount.value(), 2500.0);
        assert_eq!(rows[0].description, "Paycheck");
        assert_eq!(rows[0].category, "Salary");
        assert_eq!(rows[0].date, "2024-01-15");

        assert_eq!(rows[1].kind, TransactionType::Expense);
        assert_eq!(rows[1].amount.value(), 84.2);
    }

    #[test]
    fn test_header_is_skipped_even_when_it_looks_like_data() {
        let csv = "Rent,-1200,Housing,2024-01-01\nCoffee,-4,Food,2024-01-02";
        let rows = parse_csv(csv, today());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "Coffee");
    }

    #[test]
    fn test_short_and_blank_rows_are_dropped() {
        let csv = "h\n\n   \nonly,three,fields\nLunch,-12,Food,2024-02-01\r\n";
        let rows = parse_csv(csv, today());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, "2024-02-01");
    }

    #[test]
    fn test_defaults_for_empty_fields() {
        let csv = "h\n,-10,,";
        let rows = parse_csv(csv, today());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, DEFAULT_DESCRIPTION);
        assert_eq!(rows[0].category, DEFAULT_CATEGORY);
        assert_eq!(rows[0].date, "2024-06-01");
    }

    #[test]
    fn test_unparsable_amount_becomes_nan_expense() {
        let csv = "h\nMystery,abc,Other,2024-03-03";
        let rows = parse_csv(csv, today());
        assert_eq!(rows[0].kind, TransactionType::Expense);
        assert!(rows[0].amount.is_nan());
    }

    #[test]
    fn test_zero_amount_is_expense() {
        let rows = parse_csv("h\nFree,0,Other,2024-03-03", today());
        assert_eq!(rows[0].kind, TransactionType::Expense);
        assert!(rows[0].amount.is_zero());
    }

    #[test]
    fn test_extra_fields_and_trailing_text_are_ignored() {
        let csv = "h\nBonus,150usd,Salary,2024-04-04,extra,columns";
        let rows = parse_csv(csv, today());
        assert_eq!(rows[0].kind, TransactionType::Income);
        assert_eq!(rows[0].amount.value(), 150.0);
    }

    #[test]
    fn test_fields_are_not_trimmed() {
        let rows = parse_csv("h\nTaxi, -20 , Transport ,2024-05-05", today());
        assert_eq!(rows[0].category, " Transport ");
        assert_eq!(rows[0].amount.value(), 20.0);
    }

    #[test]
    fn test_import_text_appends_rows() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage);

        let result = service
            .import_text("h\nA,10,Gift,2024-01-01\nbad\nB,-5,Food,2024-01-02")
            .unwrap();

        assert_eq!(result.imported, 2);
        assert_eq!(result.imported_ids.len(), 2);

        let all = storage.transactions.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].description, "A");
        assert_eq!(all[1].description, "B");
    }

    #[test]
    fn test_import_missing_file_is_global_error() {
        let (temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage);

        let err = service
            .import_file(&temp_dir.path().join("missing.csv"))
            .unwrap_err();
        assert!(err.to_string().contains(IMPORT_FAILED_MESSAGE));
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }
}
