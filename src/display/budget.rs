//! Budget display formatting
//!
//! Budgets and suggestions are shown as tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::reports::BudgetSuggestion;
use crate::services::BudgetStatus;

use super::report::format_percentage;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Budget")]
    amount: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Since")]
    since: String,
}

#[derive(Tabled)]
struct SuggestionRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Suggested")]
    amount: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
    #[tabled(rename = "Reasoning")]
    reasoning: String,
}

/// Format budgets with their usage as a table
pub fn format_budget_list(statuses: &[BudgetStatus], settings: &Settings) -> String {
    if statuses.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let symbol = &settings.currency_symbol;
    let rows = statuses.iter().map(|status| {
        let budget = &status.budget;
        let mut used = format_percentage(status.percent_used);
        if status.over_budget {
            used.push_str(" (over)");
        }

        BudgetRow {
            id: budget.id.short(),
            category: budget.category.clone(),
            period: budget.period.to_string(),
            amount: budget.amount.format_with_symbol(symbol),
            spent: budget.spent.format_with_symbol(symbol),
            used,
            since: budget.start_date.format(&settings.date_format).to_string(),
        }
    });

    format!("{}\n", Table::new(rows).with(Style::rounded()))
}

/// Format budget suggestions as a table
pub fn format_suggestions(suggestions: &[BudgetSuggestion], settings: &Settings) -> String {
    if suggestions.is_empty() {
        return "No suggestions yet. Record some expenses first.\n".to_string();
    }

    let rows = suggestions.iter().map(|s| SuggestionRow {
        category: s.category.clone(),
        amount: s.suggested_amount.format_with_symbol(&settings.currency_symbol),
        confidence: format!("{:.0}%", s.confidence * 100.0),
        reasoning: s.reasoning.clone(),
    });

    format!("{}\n", Table::new(rows).with(Style::rounded()))
}
