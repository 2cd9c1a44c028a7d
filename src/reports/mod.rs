//! Reports module for NexTrack
//!
//! Pure derivations over a transaction snapshot: headline metrics, budget
//! suggestions, and the series behind the spending charts. Everything here is
//! recomputed from the full list on every read.

pub mod charts;
pub mod metrics;
pub mod suggestions;

pub use charts::{category_breakdown, monthly_spending, CategorySlice, MonthlySpending};
pub use metrics::{compute_metrics, CategorySpending, FinancialMetrics};
pub use suggestions::{buffered_suggestions, tiered_suggestions, BudgetSuggestion};

use std::cmp::Ordering;

use crate::models::{Money, Transaction};

/// Expense totals per category, in the order each category first appears
pub(crate) fn expense_totals_by_category(transactions: &[Transaction]) -> Vec<(String, Money)> {
    let mut totals: Vec<(String, Money)> = Vec::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        match totals.iter_mut().find(|(category, _)| *category == txn.category) {
            Some((_, total)) => *total += txn.amount,
            None => totals.push((txn.category.clone(), txn.amount)),
        }
    }

    totals
}

/// Stable descending sort by amount; NaN amounts go last
pub(crate) fn sort_descending<T, F>(items: &mut [T], amount: F)
where
    F: Fn(&T) -> f64,
{
    items.sort_by(|a, b| {
        let (a, b) = (amount(a), amount(b));
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => b.total_cmp(&a),
        }
    });
}
