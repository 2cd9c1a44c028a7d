//! Budget service
//!
//! Creates budgets, lists them with their usage, and turns spending
//! suggestions into budgets.

use chrono::Local;

use crate::error::{NexTrackError, NexTrackResult};
use crate::models::{Budget, BudgetPeriod, Money};
use crate::reports::{buffered_suggestions, BudgetSuggestion};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

/// A budget together with how much of it is used
#[derive(Debug, Clone)]
pub struct BudgetStatus {
    pub budget: Budget,
    /// `spent / amount` as a percentage
    pub percent_used: f64,
    pub over_budget: bool,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a budget starting today
    pub fn create(
        &self,
        category: &str,
        amount: Money,
        period: BudgetPeriod,
    ) -> NexTrackResult<Budget> {
        let budget = Budget::new(
            category.trim(),
            amount,
            period,
            Local::now().date_naive(),
        );

        budget
            .validate()
            .map_err(|e| NexTrackError::Validation(e.to_string()))?;

        self.storage.append_budget(budget)
    }

    /// All budgets in creation order, with usage
    pub fn list(&self) -> NexTrackResult<Vec<BudgetStatus>> {
        Ok(self
            .storage
            .budgets
            .get_all()?
            .into_iter()
            .map(|budget| BudgetStatus {
                percent_used: budget.progress_percent(),
                over_budget: budget.is_over_budget(),
                budget,
            })
            .collect())
    }

    /// Suggested monthly budgets from spending so far
    pub fn suggest(&self) -> NexTrackResult<Vec<BudgetSuggestion>> {
        let transactions = self.storage.transactions.get_all()?;
        Ok(buffered_suggestions(&transactions))
    }

    /// Create a monthly budget from the suggestion for `category`
    pub fn adopt(&self, category: &str) -> NexTrackResult<Budget> {
        let suggestion = self
            .suggest()?
            .into_iter()
            .find(|s| s.category.eq_ignore_ascii_case(category))
            .ok_or_else(|| NexTrackError::suggestion_not_found(category))?;

        let budget = Budget::new(
            suggestion.category,
            suggestion.suggested_amount,
            BudgetPeriod::Monthly,
            Local::now().date_naive(),
        );

        // Zero-spend categories suggest a zero budget
        budget
            .validate()
            .map_err(|e| NexTrackError::Budget(e.to_string()))?;

        self.storage.append_budget(budget)
    }
}
