//! Transaction model
//!
//! A transaction carries a full snapshot of the category it was recorded
//! against, so editing or deleting that category later never rewrites
//! history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// Polarity of a transaction or category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    /// Both polarities, income first
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense]
    }

    /// The literal used on disk and in CSV exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction type: {}", other)),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Amount, never negative
    pub value: Money,

    /// When the transaction happened
    pub date: DateTime<Utc>,

    /// Income or expense
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    /// Copy of the category at the time the transaction was recorded
    pub category: Category,
}

impl Transaction {
    /// Create a new transaction, taking its polarity from the category
    pub fn new(value: Money, date: DateTime<Utc>, category: Category) -> Self {
        Self {
            id: TransactionId::new(),
            value,
            date,
            transaction_type: category.transaction_type,
            category,
        }
    }

    /// Create a transaction with an explicit polarity
    pub fn with_type(
        value: Money,
        date: DateTime<Utc>,
        transaction_type: TransactionType,
        category: Category,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            value,
            date,
            transaction_type,
            category,
        }
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.value.value().is_finite() {
            return Err(TransactionValidationError::NonFiniteValue);
        }

        if self.value.is_negative() {
            return Err(TransactionValidationError::NegativeValue(self.value));
        }

        if self.transaction_type != self.category.transaction_type {
            return Err(TransactionValidationError::PolarityMismatch {
                transaction: self.transaction_type,
                category: self.category.transaction_type,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_income() { "+" } else { "-" };
        write!(
            f,
            "{} {} {}{}",
            self.date.format("%Y-%m-%d"),
            self.category.title,
            sign,
            self.value
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionValidationError {
    NegativeValue(Money),
    NonFiniteValue,
    PolarityMismatch {
        transaction: TransactionType,
        category: TransactionType,
    },
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeValue(value) => {
                write!(f, "Transaction value cannot be negative ({})", value)
            }
            Self::NonFiniteValue => write!(f, "Transaction value must be a finite number"),
            Self::PolarityMismatch {
                transaction,
                category,
            } => write!(
                f,
                "An {} transaction cannot use an {} category",
                transaction, category
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
