//! Storage layer for NexTrack
//!
//! Two append-only stores (transactions and budgets) mirrored into a
//! key-value backend after every mutation, plus the audit log.

mod collection;
pub mod budgets;
pub mod file_io;
pub mod kv;
pub mod transactions;

pub use budgets::{BudgetRepository, BUDGETS_KEY};
pub use file_io::{write_atomic, write_json_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use transactions::{TransactionRepository, TRANSACTIONS_KEY};

use std::sync::Arc;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::NexTrackPaths;
use crate::error::NexTrackError;
use crate::models::{Budget, Transaction};

/// Main storage coordinator that provides access to both stores
pub struct Storage {
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Open file-backed storage under the given paths
    pub fn new(paths: &NexTrackPaths) -> Result<Self, NexTrackError> {
        paths.ensure_directories()?;

        let backend = Arc::new(FileStore::new(paths.data_dir()));
        Ok(Self::with_backend(
            backend,
            Some(AuditLogger::new(paths.audit_log())),
        ))
    }

    /// Build storage over any backend
    pub fn with_backend(backend: Arc<dyn KeyValueStore>, audit: Option<AuditLogger>) -> Self {
        Self {
            transactions: TransactionRepository::new(backend.clone()),
            budgets: BudgetRepository::new(backend),
            audit,
        }
    }

    /// In-memory storage without an audit log
    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(MemoryStore::new()), None)
    }

    /// Load all data from the backend
    pub fn load_all(&self) -> Result<(), NexTrackError> {
        self.transactions.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Append a transaction, persist, and audit it
    pub fn append_transaction(&self, txn: Transaction) -> Result<Transaction, NexTrackError> {
        self.transactions.append(txn.clone())?;
        self.log_create(
            EntityType::Transaction,
            txn.id.short(),
            Some(txn.description.clone()),
            &txn,
        )?;
        Ok(txn)
    }

    /// Append a budget, persist, and audit it
    pub fn append_budget(&self, budget: Budget) -> Result<Budget, NexTrackError> {
        self.budgets.append(budget.clone())?;
        self.log_create(
            EntityType::Budget,
            budget.id.short(),
            Some(budget.category.clone()),
            &budget,
        )?;
        Ok(budget)
    }

    /// Remove every transaction and budget
    pub fn clear_all(&self) -> Result<(), NexTrackError> {
        let transaction_count = self.transactions.count()?;
        let budget_count = self.budgets.count()?;

        self.transactions.clear()?;
        self.budgets.clear()?;

        if let Some(audit) = &self.audit {
            audit.log_batch(&[
                AuditEntry::clear_all(EntityType::Transaction, transaction_count),
                AuditEntry::clear_all(EntityType::Budget, budget_count),
            ])?;
        }
        Ok(())
    }

    /// The audit logger, if this storage keeps one
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), NexTrackError> {
        match &self.audit {
            Some(audit) => audit.log(&AuditEntry::create(
                entity_type,
                entity_id,
                entity_name,
                entity,
            )),
            None => Ok(()),
        }
    }
}
