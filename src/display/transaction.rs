//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display,
//! including the register view and single-transaction details.

use crate::models::{Money, Transaction};

/// Signed amount: income shown with `+`, expense with `-`
pub fn format_signed_amount(txn: &Transaction, symbol: &str) -> String {
    let sign = if txn.is_income() { "+" } else { "-" };
    format!("{}{}", sign, txn.value.format_with_symbol(symbol))
}

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    format!(
        "{:12} {} {:7} {:20} {:>14}",
        txn.id.short(),
        txn.date.format("%Y-%m-%d"),
        txn.transaction_type,
        truncate(&txn.category.title, 20),
        format_signed_amount(txn, symbol)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:7} {:20} {:>14}\n",
        "ID", "Date", "Type", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(67));
    output.push('\n');

    let mut net = Money::zero();
    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
        if txn.is_income() {
            net += txn.value;
        } else {
            net -= txn.value;
        }
    }

    output.push_str(&"-".repeat(67));
    output.push('\n');
    output.push_str(&format!(
        "{:>52} {:>14}\n",
        "Net:",
        net.format_with_symbol(symbol)
    ));

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!(
        "Date:        {}\n",
        txn.date.format("%Y-%m-%d %H:%M:%S")
    ));
    output.push_str(&format!("Type:        {}\n", txn.transaction_type));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_signed_amount(txn, symbol)
    ));
    output.push_str(&format!(
        "Category:    {} ({}, {})\n",
        txn.category.title, txn.category.image, txn.category.color
    ));

    output
}

/// Truncate a string to a maximum length in characters, padding short ones
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
