//! Budget suggestions
//!
//! Fixed-formula heuristics over past expenses. Both formulas assume the
//! transaction history spans exactly three months; actual dates are never
//! inspected.
//!
//! - [`buffered_suggestions`]: average monthly spend plus a 10% buffer,
//!   top 5 (budget management view).
//! - [`tiered_suggestions`]: scales the average by the category's share of
//!   total expenses, top 3 (dashboard view).

use serde::Serialize;

use crate::models::{Money, Transaction};

use super::{expense_totals_by_category, sort_descending};

/// Months of history the averages assume
pub const ASSUMED_HISTORY_MONTHS: f64 = 3.0;

/// Multiplier applied by [`buffered_suggestions`]
pub const BUFFER_FACTOR: f64 = 1.1;

pub const BUFFERED_CONFIDENCE: f64 = 0.8;
pub const BUFFERED_LIMIT: usize = 5;

pub const TIERED_CONFIDENCE: f64 = 0.85;
pub const TIERED_LIMIT: usize = 3;

/// A recommended budget for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSuggestion {
    pub category: String,
    /// Whole currency units
    pub suggested_amount: Money,
    pub reasoning: String,
    /// Constant per formula, in [0, 1]
    pub confidence: f64,
}

/// Average monthly spend plus a flat 10% buffer
pub fn buffered_suggestions(transactions: &[Transaction]) -> Vec<BudgetSuggestion> {
    let mut suggestions: Vec<BudgetSuggestion> = expense_totals_by_category(transactions)
        .into_iter()
        .map(|(category, total_spent)| {
            let avg_monthly = total_spent.value() / ASSUMED_HISTORY_MONTHS;
            BudgetSuggestion {
                category,
                suggested_amount: Money::new(avg_monthly * BUFFER_FACTOR).round(),
                reasoning: format!(
                    "Based on average monthly spending of ${}",
                    Money::new(avg_monthly).round().value()
                ),
                confidence: BUFFERED_CONFIDENCE,
            }
        })
        .collect();

    sort_descending(&mut suggestions, |s| s.suggested_amount.value());
    suggestions.truncate(BUFFERED_LIMIT);
    suggestions
}

/// Average monthly spend scaled by the category's share of all expenses
///
/// | share of expenses | suggestion      |
/// |-------------------|-----------------|
/// | above 30%         | 80% of average  |
/// | above 15%         | 90% of average  |
/// | otherwise         | 110% of average |
pub fn tiered_suggestions(transactions: &[Transaction]) -> Vec<BudgetSuggestion> {
    if transactions.is_empty() {
        return Vec::new();
    }

    let totals = expense_totals_by_category(transactions);
    let total_expenses: f64 = totals.iter().map(|(_, amount)| amount.value()).sum();

    let mut suggestions: Vec<BudgetSuggestion> = totals
        .into_iter()
        .map(|(category, total_spent)| {
            let avg_monthly = total_spent.value() / ASSUMED_HISTORY_MONTHS;
            let share = total_spent.value() / total_expenses * 100.0;
            let (factor, reasoning) = spending_tier(share);

            BudgetSuggestion {
                category,
                suggested_amount: Money::new(avg_monthly * factor).round(),
                reasoning: reasoning.to_string(),
                confidence: TIERED_CONFIDENCE,
            }
        })
        .collect();

    sort_descending(&mut suggestions, |s| s.suggested_amount.value());
    suggestions.truncate(TIERED_LIMIT);
    suggestions
}

fn spending_tier(share: f64) -> (f64, &'static str) {
    if share > 30.0 {
        (
            0.8,
            "High spending category - consider reducing to improve savings",
        )
    } else if share > 15.0 {
        (
            0.9,
            "Moderate spending - maintain current level with slight reduction",
        )
    } else {
        (1.1, "Low spending category - reasonable budget allocation")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;

    fn expense(category: &str, amount: f64) -> Transaction {
        Transaction::new(TransactionType::Expense, Money::new(amount), category, "", "2024-01-01")
    }

    fn income(amount: f64) -> Transaction {
        Transaction::new(TransactionType::Income, Money::new(amount), "Salary", "", "2024-01-01")
    }

    #[test]
    fn test_empty_inputs_give_no_suggestions() {
        assert!(buffered_suggestions(&[]).is_empty());
        assert!(tiered_suggestions(&[]).is_empty());

        let only_income = vec![income(1000.0)];
        assert!(buffered_suggestions(&only_income).is_empty());
        assert!(tiered_suggestions(&only_income).is_empty());
    }

    #[test]
    fn test_buffered_three_food_expenses() {
        let transactions = vec![
            expense("Food", 100.0),
            expense("Food", 100.0),
            expense("Food", 100.0),
        ];

        let suggestions = buffered_suggestions(&transactions);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].category, "Food");
        assert_eq!(suggestions[0].suggested_amount.value(), 110.0);
        assert_eq!(
            suggestions[0].reasoning,
            "Based on average monthly spending of $100"
        );
        assert_eq!(suggestions[0].confidence, 0.8);
    }

    #[test]
    fn test_buffered_limits_to_five_descending() {
        let transactions: Vec<_> = (1..=7)
            .map(|i| expense(&format!("C{}", i), i as f64 * 30.0))
            .collect();

        let suggestions = buffered_suggestions(&transactions);
        let names: Vec<_> = suggestions.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["C7", "C6", "C5", "C4", "C3"]);
        // 210 / 3 * 1.1 = 77
        assert_eq!(suggestions[0].suggested_amount.value(), 77.0);
    }

    #[test]
    fn test_tiered_formula() {
        // Shares: Rent 60%, Food 20%, Fun 12%, Misc 8%
        let transactions = vec![
            expense("Rent", 1500.0),
            expense("Food", 500.0),
            expense("Fun", 300.0),
            expense("Misc", 200.0),
            income(5000.0),
        ];

        let suggestions = tiered_suggestions(&transactions);
        assert_eq!(suggestions.len(), 3);

        assert_eq!(suggestions[0].category, "Rent");
        assert_eq!(suggestions[0].suggested_amount.value(), 400.0);
        assert!(suggestions[0].reasoning.starts_with("High spending"));

        assert_eq!(suggestions[1].category, "Food");
        assert_eq!(suggestions[1].suggested_amount.value(), 150.0);
        assert!(suggestions[1].reasoning.starts_with("Moderate spending"));

        assert_eq!(suggestions[2].category, "Fun");
        assert_eq!(suggestions[2].suggested_amount.value(), 110.0);
        assert!(suggestions[2].reasoning.starts_with("Low spending"));
        assert_eq!(suggestions[2].confidence, 0.85);
    }

    #[test]
    fn test_nan_totals_rank_last() {
        let transactions: Vec<_> = (0..25)
            .map(|i| {
                let amount = if i % 2 == 0 { f64::NAN } else { i as f64 * 30.0 };
                expense(&format!("C{}", i), amount)
            })
            .collect();

        let buffered = buffered_suggestions(&transactions);
        let names: Vec<_> = buffered.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["C23", "C21", "C19", "C17", "C15"]);

        // One NaN total makes every share NaN, so all land in the low tier
        let tiered = tiered_suggestions(&transactions);
        assert_eq!(tiered.len(), TIERED_LIMIT);
        assert_eq!(tiered[0].category, "C23");
        assert!(tiered.iter().all(|s| s.reasoning.starts_with("Low spending")));
    }

    #[test]
    fn test_tier_boundaries_are_exclusive() {
        assert_eq!(spending_tier(30.0).0, 0.9);
        assert_eq!(spending_tier(30.01).0, 0.8);
        assert_eq!(spending_tier(15.0).0, 1.1);
        assert_eq!(spending_tier(f64::NAN).0, 1.1);
    }

    #[test]
    fn test_variants_disagree_on_same_data() {
        let transactions = vec![expense("Rent", 900.0)];

        assert_eq!(buffered_suggestions(&transactions)[0].suggested_amount.value(), 330.0);
        assert_eq!(tiered_suggestions(&transactions)[0].suggested_amount.value(), 240.0);
    }
}
