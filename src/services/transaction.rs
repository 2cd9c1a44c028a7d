//! Transaction service
//!
//! Records income and expenses entered by hand and answers the list queries
//! behind `transaction list` and the dashboard.

use chrono::{Local, NaiveDate};

use crate::error::{NexTrackError, NexTrackResult};
use crate::models::{parse_tags, Money, Transaction, TransactionType};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Only income or only expenses
    pub kind: Option<TransactionType>,
    /// Category name, case-insensitive
    pub category: Option<String>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |kind| txn.kind == kind)
            && self
                .category
                .as_deref()
                .map_or(true, |category| txn.category.eq_ignore_ascii_case(category))
    }
}

/// Input for recording a transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub amount: Money,
    pub category: String,
    pub description: String,
    /// Defaults to today
    pub date: Option<NaiveDate>,
    /// Comma-separated tags
    pub tags: Option<String>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record money received
    pub fn record_income(&self, input: CreateTransactionInput) -> NexTrackResult<Transaction> {
        self.record(TransactionType::Income, input)
    }

    /// Record money spent
    pub fn record_expense(&self, input: CreateTransactionInput) -> NexTrackResult<Transaction> {
        self.record(TransactionType::Expense, input)
    }

    fn record(
        &self,
        kind: TransactionType,
        input: CreateTransactionInput,
    ) -> NexTrackResult<Transaction> {
        if !input.amount.value().is_finite() || input.amount.is_negative() {
            return Err(NexTrackError::Validation(format!(
                "Amount must be a non-negative number, got {}",
                input.amount.value()
            )));
        }

        let description = input.description.trim();
        if description.is_empty() {
            return Err(NexTrackError::Validation(
                "Description cannot be empty".into(),
            ));
        }

        let date = input.date.unwrap_or_else(|| Local::now().date_naive());
        let mut txn = Transaction::new(
            kind,
            input.amount,
            input.category,
            description,
            date.format("%Y-%m-%d").to_string(),
        );

        if let Some(tags) = input.tags.filter(|t| !t.trim().is_empty()) {
            txn = txn.with_tags(parse_tags(&tags));
        }

        self.storage.append_transaction(txn)
    }

    /// Transactions matching a filter, newest first
    pub fn list(&self, filter: &TransactionFilter) -> NexTrackResult<Vec<Transaction>> {
        let mut transactions: Vec<Transaction> = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect();

        transactions.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));
        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }
        Ok(transactions)
    }

    /// The `limit` most recent transactions
    pub fn recent(&self, limit: usize) -> NexTrackResult<Vec<Transaction>> {
        self.storage.transactions.recent(limit)
    }

    /// Every transaction in recorded order
    pub fn all(&self) -> NexTrackResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }
}
