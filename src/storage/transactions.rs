//! Transaction store
//!
//! Ordered, append-only list of transactions mirrored under
//! `nextrack-transactions`.

use std::sync::Arc;

use crate::error::NexTrackError;
use crate::models::{Transaction, TransactionId};

use super::collection::SnapshotCollection;
use super::kv::KeyValueStore;

/// Storage key holding the transaction array
pub const TRANSACTIONS_KEY: &str = "nextrack-transactions";

/// Repository for transaction persistence
pub struct TransactionRepository {
    records: SnapshotCollection<Transaction>,
}

impl TransactionRepository {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            records: SnapshotCollection::new(TRANSACTIONS_KEY, backend),
        }
    }

    /// Storage key this repository writes to
    pub fn key(&self) -> &'static str {
        self.records.key()
    }

    /// Load transactions from the backend
    pub fn load(&self) -> Result<(), NexTrackError> {
        self.records.load()
    }

    /// Append a transaction and persist the snapshot
    pub fn append(&self, txn: Transaction) -> Result<(), NexTrackError> {
        self.records.append(txn)
    }

    /// All transactions in the order they were recorded
    pub fn get_all(&self) -> Result<Vec<Transaction>, NexTrackError> {
        self.records.all()
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, NexTrackError> {
        self.records.find(|t| t.id == id)
    }

    /// Most recent transactions by date, newest first
    ///
    /// Transactions whose date cannot be read sort after all dated ones.
    pub fn recent(&self, limit: usize) -> Result<Vec<Transaction>, NexTrackError> {
        let mut transactions = self.records.all()?;
        transactions.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));
        transactions.truncate(limit);
        Ok(transactions)
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, NexTrackError> {
        self.records.len()
    }

    /// Remove every transaction
    pub fn clear(&self) -> Result<(), NexTrackError> {
        self.records.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use crate::storage::kv::{FileStore, MemoryStore};
    use tempfile::TempDir;

    fn expense(amount: f64, date: &str) -> Transaction {
        Transaction::new(TransactionType::Expense, Money::new(amount), "Food", "Lunch", date)
    }

    #[test]
    fn test_empty_load() {
        let repo = TransactionRepository::new(Arc::new(MemoryStore::new()));
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_append_and_get() {
        let repo = TransactionRepository::new(Arc::new(MemoryStore::new()));
        let txn = expense(12.5, "2024-01-15");
        let id = txn.id;

        repo.append(txn).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.amount.value(), 12.5);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let repo = TransactionRepository::new(Arc::new(MemoryStore::new()));
        repo.append(expense(1.0, "2024-03-01")).unwrap();
        repo.append(expense(2.0, "2024-01-01")).unwrap();
        repo.append(expense(3.0, "2024-02-01")).unwrap();

        let amounts: Vec<f64> = repo.get_all().unwrap().iter().map(|t| t.amount.value()).collect();
        assert_eq!(amounts, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_recent_sorts_newest_first() {
        let repo = TransactionRepository::new(Arc::new(MemoryStore::new()));
        repo.append(expense(1.0, "2024-01-10")).unwrap();
        repo.append(expense(2.0, "not a date")).unwrap();
        repo.append(expense(3.0, "2024-01-20")).unwrap();
        repo.append(expense(4.0, "2024-01-15")).unwrap();

        let recent = repo.recent(3).unwrap();
        let amounts: Vec<f64> = recent.iter().map(|t| t.amount.value()).collect();
        assert_eq!(amounts, vec![3.0, 4.0, 1.0]);

        // Stored order is untouched
        assert_eq!(repo.get_all().unwrap()[0].amount.value(), 1.0);
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let backend = Arc::new(FileStore::new(temp_dir.path().to_path_buf()));

        let repo = TransactionRepository::new(backend.clone());
        let txn = expense(50.0, "2024-01-15");
        let id = txn.id;
        repo.append(txn).unwrap();
        repo.append(expense(f64::NAN, "2024-01-16")).unwrap();

        let repo2 = TransactionRepository::new(backend);
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 2);
        assert_eq!(repo2.get(id).unwrap().unwrap().amount.value(), 50.0);
        assert!(repo2.get_all().unwrap()[1].amount.is_nan());
    }

    #[test]
    fn test_clear() {
        let backend = Arc::new(MemoryStore::new());
        let repo = TransactionRepository::new(backend.clone());
        repo.append(expense(1.0, "2024-01-01")).unwrap();

        repo.clear().unwrap();

        assert_eq!(repo.count().unwrap(), 0);
        assert_eq!(backend.get(TRANSACTIONS_KEY).unwrap(), None);
    }
}
