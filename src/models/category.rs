//! Category model
//!
//! A category labels a transaction with an icon, a title and a color. Each
//! category belongs to exactly one polarity (income or expense).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::transaction::TransactionType;

/// A user-visible category for income or expense transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Symbol name of the icon shown next to the category
    pub image: String,

    /// Display title
    pub title: String,

    /// Hex color, e.g. `#FF9500`
    pub color: String,

    /// Polarity this category applies to
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl Category {
    /// Create a new category with a fresh ID
    pub fn new(
        image: impl Into<String>,
        title: impl Into<String>,
        color: impl Into<String>,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            id: CategoryId::new(),
            image: image.into(),
            title: title.into(),
            color: color.into(),
            transaction_type,
        }
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.title.trim().is_empty() {
            return Err(CategoryValidationError::EmptyTitle);
        }

        if self.title.chars().count() > 50 {
            return Err(CategoryValidationError::TitleTooLong(
                self.title.chars().count(),
            ));
        }

        if !is_hex_color(&self.color) {
            return Err(CategoryValidationError::InvalidColor(self.color.clone()));
        }

        Ok(())
    }
}

/// `#RRGGBB`
fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyTitle,
    TitleTooLong(usize),
    InvalidColor(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Category title cannot be empty"),
            Self::TitleTooLong(len) => {
                write!(f, "Category title too long ({} chars, max 50)", len)
            }
            Self::InvalidColor(color) => {
                write!(f, "Category color must look like #RRGGBB, got '{}'", color)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let cat = Category::new("fork.knife", "Food", "#FF9500", TransactionType::Expense);
        assert_eq!(cat.title, "Food");
        assert!(!cat.is_income());
        assert!(cat.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut cat = Category::new("gift.fill", "  ", "#FF2D55", TransactionType::Income);
        assert_eq!(cat.validate(), Err(CategoryValidationError::EmptyTitle));

        cat.title = "x".repeat(51);
        assert_eq!(cat.validate(), Err(CategoryValidationError::TitleTooLong(51)));

        cat.title = "Gifts".into();
        cat.color = "red".into();
        assert!(matches!(
            cat.validate(),
            Err(CategoryValidationError::InvalidColor(_))
        ));

        cat.color = "#ff2d5".into();
        assert!(cat.validate().is_err());
    }

    #[test]
    fn test_serialized_field_names() {
        let cat = Category::new("cart", "Groceries", "#34C759", TransactionType::Expense);
        let value = serde_json::to_value(&cat).unwrap();

        assert_eq!(value["type"], "expense");
        assert_eq!(value["image"], "cart");
        assert_eq!(value["color"], "#34C759");
        assert!(value.get("transaction_type").is_none());

        let back: Category = serde_json::from_value(value).unwrap();
        assert_eq!(back, cat);
    }
}
