//! Transaction display formatting

use crate::config::Settings;
use crate::models::Transaction;

use super::report::truncate;

/// Date as configured, or the stored text when it cannot be read
pub fn format_date(txn: &Transaction, settings: &Settings) -> String {
    txn.parsed_date()
        .map(|d| d.format(&settings.date_format).to_string())
        .unwrap_or_else(|| txn.date.clone())
}

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    let sign = if txn.is_income() { '+' } else { '-' };
    let tags = match &txn.tags {
        Some(tags) if !tags.is_empty() => format!("  [{}]", tags.join(", ")),
        _ => String::new(),
    };

    format!(
        "{:<14} {:<24} {:<18} {}{:>12}{}",
        format_date(txn, settings),
        truncate(&txn.description, 24),
        truncate(&txn.category, 18),
        sign,
        txn.amount.format_with_symbol(&settings.currency_symbol),
        tags
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<14} {:<24} {:<18} {:>13}\n",
        "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    output
}
