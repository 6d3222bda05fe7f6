//! Core data models for StoryCash
//!
//! This module contains the data structures of the ledger domain:
//! transactions, categories, money, date ranges and advisory tips.

pub mod category;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod period;
pub mod tip;
pub mod transaction;

pub use category::{Category, CategoryValidationError};
pub use ids::{CategoryId, TransactionId};
pub use ledger::LedgerData;
pub use money::{Money, MoneyParseError};
pub use period::{DateRange, Interval, PeriodParseError};
pub use tip::Tip;
pub use transaction::{Transaction, TransactionType, TransactionValidationError};
