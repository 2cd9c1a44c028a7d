//! Financial metrics
//!
//! Totals, net income, savings rate and the largest expense categories.

use serde::Serialize;

use crate::models::{Money, Transaction};

use super::{expense_totals_by_category, sort_descending};

/// Number of categories reported in `top_expense_categories`
pub const TOP_CATEGORY_LIMIT: usize = 5;

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    pub category: String,
    pub amount: Money,
    /// Share of total expenses. NaN when total expenses are zero.
    pub percentage: f64,
}

/// Aggregate figures derived from the transaction list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMetrics {
    pub total_income: Money,
    pub total_expenses: Money,
    /// May be negative
    pub net_income: Money,
    /// Percentage of income kept; zero when there is no income
    pub savings_rate: f64,
    pub top_expense_categories: Vec<CategorySpending>,
}

/// Derive metrics from the full transaction list
pub fn compute_metrics(transactions: &[Transaction]) -> FinancialMetrics {
    let total_income: Money = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();

    let total_expenses: Money = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();

    let net_income = total_income - total_expenses;
    let savings_rate = if total_income.value() > 0.0 {
        net_income.value() / total_income.value() * 100.0
    } else {
        0.0
    };

    let mut top_expense_categories: Vec<CategorySpending> =
        expense_totals_by_category(transactions)
            .into_iter()
            .map(|(category, amount)| CategorySpending {
                category,
                amount,
                percentage: amount.value() / total_expenses.value() * 100.0,
            })
            .collect();
    sort_descending(&mut top_expense_categories, |c| c.amount.value());
    top_expense_categories.truncate(TOP_CATEGORY_LIMIT);

    FinancialMetrics {
        total_income,
        total_expenses,
        net_income,
        savings_rate,
        top_expense_categories,
    }
}
