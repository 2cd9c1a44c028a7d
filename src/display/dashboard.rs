//! Dashboard rendering
//!
//! Headline metrics, recent activity, top categories, the spending charts
//! and the dashboard's budget suggestions, as one block of text.

use crate::config::Settings;
use crate::models::Transaction;
use crate::reports::{BudgetSuggestion, CategorySlice, FinancialMetrics, MonthlySpending};

use super::report::{
    double_separator, format_bar, format_money_colored, format_percentage, format_section,
    truncate,
};
use super::transaction::format_transaction_register;

const BAR_WIDTH: usize = 30;
const WIDTH: usize = 72;

/// Everything the dashboard shows
pub struct Dashboard<'a> {
    pub metrics: &'a FinancialMetrics,
    pub recent: &'a [Transaction],
    pub breakdown: &'a [CategorySlice],
    pub monthly: &'a [MonthlySpending],
    pub suggestions: &'a [BudgetSuggestion],
}

/// Format the headline figures
pub fn format_metrics(metrics: &FinancialMetrics, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str(&format!(
        "Total Income:    {}\n",
        metrics.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Expenses:  {}\n",
        metrics.total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Net Income:      {}\n",
        format_money_colored(metrics.net_income, symbol)
    ));
    output.push_str(&format!(
        "Savings Rate:    {}\n",
        format_savings_rate(metrics.savings_rate)
    ));

    output
}

/// Savings rate with one decimal place, however large
fn format_savings_rate(rate: f64) -> String {
    if rate.is_finite() {
        format!("{:.1}%", rate)
    } else {
        "n/a".to_string()
    }
}

/// Format the category breakdown as horizontal bars
pub fn format_category_chart(slices: &[CategorySlice], settings: &Settings) -> String {
    if slices.is_empty() {
        return "No expense data available\n".to_string();
    }

    let max = slices
        .iter()
        .map(|s| s.value.value())
        .fold(0.0_f64, f64::max);

    slices
        .iter()
        .map(|s| {
            format!(
                "{:<18} {} {:>12} {:>6}\n",
                truncate(&s.name, 18),
                format_bar(s.value.value(), max, BAR_WIDTH),
                s.value.format_with_symbol(&settings.currency_symbol),
                format_percentage(s.percent)
            )
        })
        .collect()
}

/// Format monthly spending as horizontal bars
pub fn format_monthly_chart(months: &[MonthlySpending], settings: &Settings) -> String {
    if months.is_empty() {
        return "No expense data available\n".to_string();
    }

    let max = months
        .iter()
        .map(|m| m.amount.value())
        .fold(0.0_f64, f64::max);

    months
        .iter()
        .map(|m| {
            format!(
                "{:<4} {} {:>12}\n",
                m.month,
                format_bar(m.amount.value(), max, BAR_WIDTH),
                m.amount.format_with_symbol(&settings.currency_symbol)
            )
        })
        .collect()
}

/// Format the full dashboard
pub fn format_dashboard(dashboard: &Dashboard<'_>, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str("NexTrack Dashboard\n");
    output.push_str(&double_separator(WIDTH));
    output.push_str("\n\n");

    output.push_str(&format_metrics(dashboard.metrics, settings));
    output.push('\n');

    output.push_str(&format_section("Recent Transactions"));
    output.push_str(&format_transaction_register(dashboard.recent, settings));
    output.push('\n');

    output.push_str(&format_section("Top Expense Categories"));
    if dashboard.metrics.top_expense_categories.is_empty() {
        output.push_str("No expenses recorded\n");
    }
    for category in &dashboard.metrics.top_expense_categories {
        output.push_str(&format!(
            "{:<24} {:>12} {:>6}\n",
            truncate(&category.category, 24),
            category.amount.format_with_symbol(symbol),
            format_percentage(category.percentage)
        ));
    }
    output.push('\n');

    output.push_str(&format_section("Expense Categories"));
    output.push_str(&format_category_chart(dashboard.breakdown, settings));
    output.push('\n');

    output.push_str(&format_section("Monthly Spending"));
    output.push_str(&format_monthly_chart(dashboard.monthly, settings));
    output.push('\n');

    output.push_str(&format_section("Suggested Budgets"));
    if dashboard.suggestions.is_empty() {
        output.push_str("Add some expenses to get budget suggestions\n");
    }
    for suggestion in dashboard.suggestions {
        output.push_str(&format!(
            "{:<24} {:>12}  {}\n",
            truncate(&suggestion.category, 24),
            suggestion.suggested_amount.format_with_symbol(symbol),
            suggestion.reasoning
        ));
    }

    output
}
