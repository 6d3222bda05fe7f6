//! The persisted ledger aggregate
//!
//! `LedgerData` is written and read as a single unit: every mutation
//! re-serializes the whole value.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::transaction::Transaction;

/// All transactions and categories, in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerData {
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
}

impl LedgerData {
    /// An empty ledger with the given categories
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            transactions: Vec::new(),
            categories,
        }
    }
}
