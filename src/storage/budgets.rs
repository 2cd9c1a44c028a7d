//! Budget store
//!
//! Ordered, append-only list of budgets mirrored under `nextrack-budgets`.

use std::sync::Arc;

use crate::error::NexTrackError;
use crate::models::Budget;

use super::collection::SnapshotCollection;
use super::kv::KeyValueStore;

/// Storage key holding the budget array
pub const BUDGETS_KEY: &str = "nextrack-budgets";

/// Repository for budget persistence
pub struct BudgetRepository {
    records: SnapshotCollection<Budget>,
}

impl BudgetRepository {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            records: SnapshotCollection::new(BUDGETS_KEY, backend),
        }
    }

    pub fn key(&self) -> &'static str {
        self.records.key()
    }

    pub fn load(&self) -> Result<(), NexTrackError> {
        self.records.load()
    }

    /// Append a budget and persist the snapshot
    pub fn append(&self, budget: Budget) -> Result<(), NexTrackError> {
        self.records.append(budget)
    }

    /// All budgets in creation order
    pub fn get_all(&self) -> Result<Vec<Budget>, NexTrackError> {
        self.records.all()
    }

    /// First budget for a category (case-insensitive)
    pub fn find_by_category(&self, category: &str) -> Result<Option<Budget>, NexTrackError> {
        self.records
            .find(|b| b.category.eq_ignore_ascii_case(category))
    }

    pub fn count(&self) -> Result<usize, NexTrackError> {
        self.records.len()
    }

    /// Remove every budget
    pub fn clear(&self) -> Result<(), NexTrackError> {
        self.records.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPeriod, Money};
    use crate::storage::kv::MemoryStore;
    use chrono::NaiveDate;

    fn budget(category: &str, amount: f64) -> Budget {
        Budget::new(
            category,
            Money::new(amount),
            BudgetPeriod::Monthly,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_append_and_reload() {
        let backend = Arc::new(MemoryStore::new());
        let repo = BudgetRepository::new(backend.clone());
        repo.append(budget("Travel", 200.0)).unwrap();
        repo.append(budget("Shopping", 150.0)).unwrap();

        let repo2 = BudgetRepository::new(backend);
        repo2.load().unwrap();

        let budgets = repo2.get_all().unwrap();
        assert_eq!(budgets.len(), 2);
        assert_eq!(budgets[0].category, "Travel");
        assert_eq!(budgets[1].amount.value(), 150.0);
    }

    #[test]
    fn test_find_by_category() {
        let repo = BudgetRepository::new(Arc::new(MemoryStore::new()));
        repo.append(budget("Travel", 200.0)).unwrap();

        assert!(repo.find_by_category("travel").unwrap().is_some());
        assert!(repo.find_by_category("Food").unwrap().is_none());
    }

    #[test]
    fn test_reads_web_export_layout() {
        let backend = Arc::new(MemoryStore::new());
        backend
            .set(
                BUDGETS_KEY,
                r#"[{"id":"550e8400-e29b-41d4-a716-446655440000","category":"Food","amount":300,
                    "period":"monthly","spent":0,"startDate":"2024-01-15"}]"#,
            )
            .unwrap();

        let repo = BudgetRepository::new(backend);
        repo.load().unwrap();

        let budgets = repo.get_all().unwrap();
        assert_eq!(budgets[0].period, BudgetPeriod::Monthly);
        assert_eq!(budgets[0].start_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(budgets[0].end_date, None);
    }
}
