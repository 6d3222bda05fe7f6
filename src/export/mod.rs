//! Export module for StoryCash
//!
//! Transactions are exported as spreadsheet-compatible CSV.

pub mod csv;

pub use self::csv::{export_file_name, export_to_dir, export_transactions_csv};
