//! Transaction display formatting

use super::report::truncate;
use crate::models::Transaction;

/// Format a single transaction as a list row
pub fn format_transaction_row(txn: &Transaction, date_format: &str) -> String {
    let signed = if txn.is_expense() {
        format!("-{}", txn.amount)
    } else {
        format!("+{}", txn.amount)
    };

    format!(
        "{:<14} {:<10} {:<16} {:>12}  {}",
        txn.id.to_string(),
        txn.date.format(date_format),
        truncate(&txn.category, 16),
        signed,
        truncate(&txn.description, 30)
    )
}

/// Format a list of transactions
pub fn format_transaction_list(transactions: &[Transaction], date_format: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<14} {:<10} {:<16} {:>12}  {}\n",
        "ID", "Date", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, date_format));
        output.push('\n');
    }

    output
}
