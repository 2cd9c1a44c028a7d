//! Budget model
//!
//! A user-defined spending cap for a category over a period. `spent` is part
//! of the stored record but nothing reconciles it against transactions; it
//! stays at zero.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;

/// Length of a budget cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

/// A budget for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: BudgetId,
    pub category: String,
    pub amount: Money,
    pub period: BudgetPeriod,
    pub spent: Money,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Budget {
    /// Create a new budget starting on `start_date` with nothing spent
    pub fn new(
        category: impl Into<String>,
        amount: Money,
        period: BudgetPeriod,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: BudgetId::new(),
            category: category.into(),
            amount,
            period,
            spent: Money::zero(),
            start_date,
            end_date: None,
        }
    }

    /// Share of the budget used, as a percentage
    pub fn progress_percent(&self) -> f64 {
        self.spent.value() / self.amount.value() * 100.0
    }

    pub fn is_over_budget(&self) -> bool {
        self.progress_percent() > 100.0
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }

        let amount = self.amount.value();
        if !amount.is_finite() || amount <= 0.0 {
            return Err(BudgetValidationError::NonPositiveAmount);
        }

        Ok(())
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyCategory,
    NonPositiveAmount,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Budget category cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Budget amount must be greater than zero"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
