//! Chart series
//!
//! The data behind the spending charts: a category breakdown and spending
//! per calendar month.

use chrono::Datelike;

use crate::models::{Money, Transaction};

use super::{expense_totals_by_category, sort_descending};

/// Number of slices in the category breakdown
pub const BREAKDOWN_LIMIT: usize = 6;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One slice of the category breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub name: String,
    pub value: Money,
    /// Share of the slices shown, not of all expenses
    pub percent: f64,
}

/// Expenses in one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySpending {
    /// Three-letter month abbreviation
    pub month: &'static str,
    pub amount: Money,
}

/// Largest expense categories, at most six
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategorySlice> {
    let mut totals = expense_totals_by_category(transactions);
    sort_descending(&mut totals, |(_, amount)| amount.value());
    totals.truncate(BREAKDOWN_LIMIT);

    let shown: f64 = totals.iter().map(|(_, amount)| amount.value()).sum();
    totals
        .into_iter()
        .map(|(name, value)| CategorySlice {
            name,
            value,
            percent: if shown > 0.0 {
                value.value() / shown * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Expense totals per calendar month, January first
///
/// Months from different years are merged. Transactions whose date cannot
/// be read are left out.
pub fn monthly_spending(transactions: &[Transaction]) -> Vec<MonthlySpending> {
    let mut by_month: [Option<Money>; 12] = [None; 12];

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        if let Some(date) = txn.parsed_date() {
            let slot = &mut by_month[date.month0() as usize];
            *slot = Some(slot.unwrap_or_default() + txn.amount);
        }
    }

    by_month
        .iter()
        .zip(MONTHS)
        .filter_map(|(amount, month)| amount.map(|amount| MonthlySpending { month, amount }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;

    fn expense(category: &str, amount: f64, date: &str) -> Transaction {
        Transaction::new(TransactionType::Expense, Money::new(amount), category, "", date)
    }

    #[test]
    fn test_breakdown_limits_to_six() {
        let transactions: Vec<_> = (1..=8)
            .map(|i| expense(&format!("C{}", i), i as f64, "2024-01-01"))
            .collect();

        let slices = category_breakdown(&transactions);
        assert_eq!(slices.len(), 6);
        assert_eq!(slices[0].name, "C8");
        assert_eq!(slices[5].name, "C3");

        let total: f64 = slices.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_with_nan_totals() {
        let transactions: Vec<_> = (0..24)
            .map(|i| {
                let amount = if i % 3 == 0 { f64::NAN } else { i as f64 };
                expense(&format!("C{}", i), amount, "2024-01-01")
            })
            .collect();

        let slices = category_breakdown(&transactions);
        assert_eq!(slices.len(), BREAKDOWN_LIMIT);
        assert_eq!(slices[0].name, "C23");
        assert!(slices.iter().all(|s| !s.value.is_nan()));
    }

    #[test]
    fn test_breakdown_empty() {
        assert!(category_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_monthly_spending_calendar_order() {
        let transactions = vec![
            expense("Food", 30.0, "2024-03-10"),
            expense("Food", 10.0, "2024-01-05"),
            expense("Food", 5.0, "2023-03-01"),
            expense("Food", 99.0, "garbage"),
            Transaction::new(TransactionType::Income, Money::new(500.0), "Salary", "", "2024-02-01"),
        ];

        let series = monthly_spending(&transactions);
        assert_eq!(
            series,
            vec![
                MonthlySpending { month: "Jan", amount: Money::new(10.0) },
                MonthlySpending { month: "Mar", amount: Money::new(35.0) },
            ]
        );
    }
}
