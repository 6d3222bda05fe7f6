//! Ledger store
//!
//! Owns the in-memory `LedgerData`, applies every mutation to it and then
//! rewrites the backing file in full. There is exactly one owner per
//! process; mutations take `&mut self`, so no locking is needed.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::error::{StoryCashError, StoryCashResult};
use crate::models::{
    Category, CategoryId, DateRange, LedgerData, Money, Transaction, TransactionId,
    TransactionType,
};

use super::codec;
use super::file_io::write_atomic;
use super::init::default_ledger;

/// Snapshot of the store's state for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerInfo {
    pub path: PathBuf,
    pub file_exists: bool,
    pub transaction_count: usize,
    pub category_count: usize,
}

impl fmt::Display for LedgerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File:         {}", self.path.display())?;
        writeln!(f, "File exists:  {}", self.file_exists)?;
        writeln!(f, "Transactions: {}", self.transaction_count)?;
        write!(f, "Categories:   {}", self.category_count)
    }
}

/// The single owner of the ledger and its backing file
#[derive(Debug)]
pub struct LedgerStore {
    path: PathBuf,
    data: LedgerData,
}

impl LedgerStore {
    /// Open the ledger at `path`, creating it with defaults if needed
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            path: path.into(),
            data: default_ledger(),
        };
        store.load();
        store
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Borrow the whole dataset
    pub fn data(&self) -> &LedgerData {
        &self.data
    }

    /// Reload from disk
    ///
    /// A missing file is created with the default categories. An
    /// undecodable file is replaced by the defaults: its contents are lost.
    /// If the file exists but cannot be read at all, the defaults are used
    /// in memory and the file is left alone.
    pub fn load(&mut self) {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "Ledger file {} does not exist, creating it with default categories",
                    self.path.display()
                );
                self.data = default_ledger();
                self.persist();
                return;
            }
            Err(e) => {
                error!(
                    "Failed to read ledger file {}: {}; using default categories",
                    self.path.display(),
                    e
                );
                self.data = default_ledger();
                return;
            }
        };

        match codec::decode(&bytes) {
            Ok(data) => {
                debug!(
                    "Loaded ledger from {} ({} transactions, {} categories)",
                    self.path.display(),
                    data.transactions.len(),
                    data.categories.len()
                );
                self.data = data;
            }
            Err(e) => {
                warn!(
                    "Ledger file {} is corrupt ({}); replacing it with default data",
                    self.path.display(),
                    e
                );
                self.data = default_ledger();
                self.persist();
            }
        }
    }

    /// Encode the dataset and atomically overwrite the backing file
    pub fn save(&self) -> StoryCashResult<()> {
        let bytes = codec::encode(&self.data)?;
        write_atomic(&self.path, &bytes)?;
        debug!("Saved ledger to {}", self.path.display());
        Ok(())
    }

    /// Save, logging instead of returning a failure. Memory stays as is, so
    /// the next successful save writes the same data.
    fn persist(&self) {
        if let Err(e) = self.save() {
            error!("Failed to save ledger to {}: {}", self.path.display(), e);
        }
    }

    // Transaction operations

    /// Append a transaction
    pub fn add_transaction(&mut self, txn: Transaction) -> StoryCashResult<()> {
        txn.validate()
            .map_err(|e| StoryCashError::Validation(e.to_string()))?;

        if self.data.transactions.iter().any(|t| t.id == txn.id) {
            return Err(StoryCashError::Duplicate {
                entity_type: "Transaction",
                identifier: txn.id.to_string(),
            });
        }

        debug!("Adding transaction {}", txn.id);
        self.data.transactions.push(txn);
        self.persist();
        Ok(())
    }

    /// Replace the transaction with the same ID in place
    ///
    /// Returns `Ok(false)` without touching anything if the ID is unknown.
    pub fn update_transaction(&mut self, txn: Transaction) -> StoryCashResult<bool> {
        txn.validate()
            .map_err(|e| StoryCashError::Validation(e.to_string()))?;

        match self.data.transactions.iter_mut().find(|t| t.id == txn.id) {
            Some(existing) => {
                debug!("Updating transaction {}", txn.id);
                *existing = txn;
                self.persist();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a transaction, returning whether it existed
    pub fn delete_transaction(&mut self, id: TransactionId) -> bool {
        let before = self.data.transactions.len();
        self.data.transactions.retain(|t| t.id != id);

        if self.data.transactions.len() == before {
            return false;
        }

        debug!("Deleted transaction {}", id);
        self.persist();
        true
    }

    // Category operations

    /// Append a category
    pub fn add_category(&mut self, category: Category) -> StoryCashResult<()> {
        category
            .validate()
            .map_err(|e| StoryCashError::Validation(e.to_string()))?;

        if self.data.categories.iter().any(|c| c.id == category.id) {
            return Err(StoryCashError::Duplicate {
                entity_type: "Category",
                identifier: category.id.to_string(),
            });
        }

        debug!("Adding category {} ({})", category.title, category.id);
        self.data.categories.push(category);
        self.persist();
        Ok(())
    }

    /// Replace the category with the same ID in place
    ///
    /// Transactions keep the snapshot they were recorded with.
    pub fn update_category(&mut self, category: Category) -> StoryCashResult<bool> {
        category
            .validate()
            .map_err(|e| StoryCashError::Validation(e.to_string()))?;

        match self.data.categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => {
                *existing = category;
                self.persist();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a category; transactions recorded against it are kept
    pub fn delete_category(&mut self, id: CategoryId) -> bool {
        let before = self.data.categories.len();
        self.data.categories.retain(|c| c.id != id);

        if self.data.categories.len() == before {
            return false;
        }

        self.persist();
        true
    }

    // Queries

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.data.transactions
    }

    /// Get a transaction by ID
    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.data.transactions.iter().find(|t| t.id == id)
    }

    /// Transactions of one polarity
    pub fn transactions_of_type(&self, transaction_type: TransactionType) -> Vec<Transaction> {
        self.data
            .transactions
            .iter()
            .filter(|t| t.transaction_type == transaction_type)
            .cloned()
            .collect()
    }

    /// Transactions dated within `range`, both ends included
    pub fn transactions_in(&self, range: &DateRange) -> Vec<Transaction> {
        self.data
            .transactions
            .iter()
            .filter(|t| range.contains(t.date))
            .cloned()
            .collect()
    }

    /// All categories in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.data.categories
    }

    /// Get a category by ID
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.data.categories.iter().find(|c| c.id == id)
    }

    /// Categories of one polarity
    pub fn categories_of_type(&self, transaction_type: TransactionType) -> Vec<Category> {
        self.data
            .categories
            .iter()
            .filter(|c| c.transaction_type == transaction_type)
            .cloned()
            .collect()
    }

    // Statistics

    fn total_where<F>(&self, transaction_type: TransactionType, in_scope: F) -> Money
    where
        F: Fn(&Transaction) -> bool,
    {
        self.data
            .transactions
            .iter()
            .filter(|t| t.transaction_type == transaction_type && in_scope(t))
            .map(|t| t.value)
            .sum()
    }

    pub fn total_income(&self) -> Money {
        self.total_where(TransactionType::Income, |_| true)
    }

    pub fn total_expense(&self) -> Money {
        self.total_where(TransactionType::Expense, |_| true)
    }

    /// Income minus expense, always derived
    pub fn balance(&self) -> Money {
        self.total_income() - self.total_expense()
    }

    pub fn total_income_in(&self, range: &DateRange) -> Money {
        self.total_where(TransactionType::Income, |t| range.contains(t.date))
    }

    pub fn total_expense_in(&self, range: &DateRange) -> Money {
        self.total_where(TransactionType::Expense, |t| range.contains(t.date))
    }

    pub fn balance_in(&self, range: &DateRange) -> Money {
        self.total_income_in(range) - self.total_expense_in(range)
    }

    /// Replace everything with a fresh default ledger and persist it
    ///
    /// Memory is reset even when the write fails; the error is returned.
    pub fn reset(&mut self) -> StoryCashResult<()> {
        self.data = default_ledger();
        self.save()?;
        info!("Ledger reset to initial state");
        Ok(())
    }

    /// Diagnostic summary
    pub fn info(&self) -> LedgerInfo {
        LedgerInfo {
            path: self.path.clone(),
            file_exists: self.path.exists(),
            transaction_count: self.data.transactions.len(),
            category_count: self.data.categories.len(),
        }
    }
}
