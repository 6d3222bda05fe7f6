//! Default ledger contents
//!
//! Provides the category set a fresh ledger starts with, both on first run
//! and after a reset.

use crate::models::{Category, LedgerData, TransactionType};

/// (image, title, color) for the default expense categories
const DEFAULT_EXPENSE_CATEGORIES: &[(&str, &str, &str)] = &[
    ("fork.knife", "Food", "#FF9500"),
    ("cart", "Groceries", "#34C759"),
    ("car.fill", "Transport", "#0A84FF"),
    ("house.fill", "Housing", "#A2845E"),
    ("lightbulb", "Utilities", "#FFD60A"),
    ("gamecontroller.fill", "Entertainment", "#AF52DE"),
    ("bag.fill", "Shopping", "#FF2D55"),
    ("cross.case.fill", "Healthcare", "#FF3B30"),
    ("book.fill", "Education", "#5856D6"),
    ("airplane", "Travel", "#30B0C7"),
    ("ellipsis.circle", "Other", "#8E8E93"),
];

/// (image, title, color) for the default income categories
const DEFAULT_INCOME_CATEGORIES: &[(&str, &str, &str)] = &[
    ("dollarsign.circle.fill", "Salary", "#34C759"),
    ("gift.fill", "Gifts", "#FF2D55"),
    ("chart.line.uptrend.xyaxis", "Investments", "#0A84FF"),
    ("building.2.fill", "Rent", "#A2845E"),
    ("cart.fill.badge.plus", "Sales", "#FF9500"),
    ("creditcard.fill", "Bonuses", "#AF52DE"),
    ("ellipsis.circle", "Other", "#8E8E93"),
];

/// Default categories, expense entries first, each with a fresh ID
pub fn default_categories() -> Vec<Category> {
    let expense = DEFAULT_EXPENSE_CATEGORIES
        .iter()
        .map(|(image, title, color)| Category::new(*image, *title, *color, TransactionType::Expense));
    let income = DEFAULT_INCOME_CATEGORIES
        .iter()
        .map(|(image, title, color)| Category::new(*image, *title, *color, TransactionType::Income));

    expense.chain(income).collect()
}

/// A ledger with the default categories and no transactions
pub fn default_ledger() -> LedgerData {
    LedgerData::with_categories(default_categories())
}
