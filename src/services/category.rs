//! Category service
//!
//! Lookup and editing of categories on top of the ledger store. Edits never
//! reach transactions: each one keeps the category snapshot it was recorded
//! with.

use crate::error::{StoryCashError, StoryCashResult};
use crate::models::{Category, CategoryId, TransactionType};
use crate::storage::LedgerStore;

/// Service for category management
pub struct CategoryService<'a> {
    store: &'a mut LedgerStore,
}

/// Fields to change on an existing category; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct CategoryEdit {
    pub title: Option<String>,
    pub image: Option<String>,
    pub color: Option<String>,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(store: &'a mut LedgerStore) -> Self {
        Self { store }
    }

    pub fn categories(&self) -> &[Category] {
        self.store.categories()
    }

    pub fn categories_of_type(&self, transaction_type: TransactionType) -> Vec<Category> {
        self.store.categories_of_type(transaction_type)
    }

    /// Find a category by full ID, short ID (`cat-1234abcd`) or title
    ///
    /// Titles are matched case-insensitively. The default set has an
    /// "Other" in both polarities, so pass `transaction_type` to pick one.
    pub fn find_category(
        &self,
        identifier: &str,
        transaction_type: Option<TransactionType>,
    ) -> Option<Category> {
        let identifier = identifier.trim();
        let candidates = self
            .store
            .categories()
            .iter()
            .filter(|c| transaction_type.map_or(true, |t| c.transaction_type == t));

        if let Ok(id) = identifier.parse::<CategoryId>() {
            if let Some(found) = candidates.clone().find(|c| c.id == id) {
                return Some(found.clone());
            }
        }

        if identifier.starts_with("cat-") {
            if let Some(found) = candidates.clone().find(|c| c.id.short() == identifier) {
                return Some(found.clone());
            }
        }

        let lower = identifier.to_lowercase();
        candidates
            .into_iter()
            .find(|c| c.title.to_lowercase() == lower)
            .cloned()
    }

    /// Create and store a new category
    pub fn create_category(
        &mut self,
        image: &str,
        title: &str,
        color: &str,
        transaction_type: TransactionType,
    ) -> StoryCashResult<Category> {
        let category = Category::new(image.trim(), title.trim(), color.trim(), transaction_type);
        self.store.add_category(category.clone())?;
        Ok(category)
    }

    /// Apply an edit to the category with `id`
    pub fn update_category(&mut self, id: CategoryId, edit: CategoryEdit) -> StoryCashResult<Category> {
        let mut category = self
            .store
            .category(id)
            .cloned()
            .ok_or_else(|| StoryCashError::category_not_found(id.to_string()))?;

        if let Some(title) = edit.title {
            category.title = title.trim().to_string();
        }
        if let Some(image) = edit.image {
            category.image = image.trim().to_string();
        }
        if let Some(color) = edit.color {
            category.color = color.trim().to_string();
        }

        self.store.update_category(category.clone())?;
        Ok(category)
    }

    /// Delete a category
    pub fn delete_category(&mut self, id: CategoryId) -> StoryCashResult<()> {
        if self.store.delete_category(id) {
            Ok(())
        } else {
            Err(StoryCashError::category_not_found(id.to_string()))
        }
    }
}
