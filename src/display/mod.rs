//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions, categories, totals and
//! tips for the CLI.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::{format_category_details, format_category_list};
pub use report::{format_money_colored, format_stats, format_tips, format_totals};
pub use transaction::{format_transaction_details, format_transaction_register};
