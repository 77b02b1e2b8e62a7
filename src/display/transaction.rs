//! Transaction display formatting
//!
//! Formats transactions as a register for terminal display.

use std::collections::HashMap;

use super::format::truncate;
use crate::models::{CategoryId, Transaction};

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, category_names: &HashMap<CategoryId, String>) -> String {
    let category = txn
        .category_id
        .and_then(|id| category_names.get(&id).cloned())
        .unwrap_or_default();

    format!(
        "{} {:<8} {:<16} {:<24} {:>12}  {}",
        txn.date.format("%Y-%m-%d"),
        txn.kind.to_string().to_lowercase(),
        truncate(&category, 16),
        truncate(&txn.description, 24),
        txn.amount,
        txn.id
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[Transaction],
    category_names: &HashMap<CategoryId, String>,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10} {:<8} {:<16} {:<24} {:>12}  {}\n",
        "Date", "Kind", "Category", "Description", "Amount", "ID"
    ));
    output.push_str(&"-".repeat(88));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, category_names));
        output.push('\n');
    }

    output
}
