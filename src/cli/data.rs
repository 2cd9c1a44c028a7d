//! Data management commands: dashboard, history and clear

use crate::config::Settings;
use crate::display::{format_dashboard, Dashboard};
use crate::error::{NexTrackError, NexTrackResult};
use crate::reports::{category_breakdown, compute_metrics, monthly_spending, tiered_suggestions};
use crate::storage::Storage;

/// Print the dashboard
pub fn handle_dashboard_command(storage: &Storage, settings: &Settings) -> NexTrackResult<()> {
    let transactions = storage.transactions.get_all()?;
    let recent = storage.transactions.recent(settings.recent_transactions)?;

    let metrics = compute_metrics(&transactions);
    let breakdown = category_breakdown(&transactions);
    let monthly = monthly_spending(&transactions);
    let suggestions = tiered_suggestions(&transactions);

    let dashboard = Dashboard {
        metrics: &metrics,
        recent: &recent,
        breakdown: &breakdown,
        monthly: &monthly,
        suggestions: &suggestions,
    };
    print!("{}", format_dashboard(&dashboard, settings));

    Ok(())
}

/// Print recent audit log entries, oldest first
pub fn handle_history_command(storage: &Storage, limit: usize) -> NexTrackResult<()> {
    let Some(audit) = storage.audit() else {
        println!("No history available.");
        return Ok(());
    };

    let entries = audit.read_recent(limit)?;
    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

/// Delete every transaction and budget
pub fn handle_clear_command(storage: &Storage, force: bool) -> NexTrackResult<()> {
    if !force {
        return Err(NexTrackError::Validation(
            "This will permanently delete all transactions and budgets. \
             Re-run with --force to confirm."
                .into(),
        ));
    }

    let transactions = storage.transactions.count()?;
    let budgets = storage.budgets.count()?;
    storage.clear_all()?;

    println!(
        "Cleared {} transactions and {} budgets.",
        transactions, budgets
    );
    Ok(())
}
