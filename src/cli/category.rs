//! Category CLI commands
//!
//! Implements CLI commands for category management. Categories are looked
//! up by title or ID; `--type` picks between same-titled categories such as
//! the two "Other" entries.

use clap::Subcommand;

use crate::display::category::{format_category_details, format_category_list};
use crate::error::{StoryCashError, StoryCashResult};
use crate::models::{Category, TransactionType};
use crate::services::{CategoryEdit, CategoryService};
use crate::storage::LedgerStore;

const DEFAULT_IMAGE: &str = "tag";
const DEFAULT_COLOR: &str = "#8E8E93";

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories, expense first
    List {
        /// Only show income or expense categories
        #[arg(short = 't', long = "type")]
        transaction_type: Option<TransactionType>,
    },

    /// Create a new category
    Add {
        /// Category title
        title: String,
        /// Create an income category instead of an expense one
        #[arg(short, long)]
        income: bool,
        /// Icon name
        #[arg(long, default_value = DEFAULT_IMAGE)]
        image: String,
        /// Color as #RRGGBB
        #[arg(long, default_value = DEFAULT_COLOR)]
        color: String,
    },

    /// Show category details
    Show {
        /// Category title or ID
        category: String,
        #[arg(short = 't', long = "type")]
        transaction_type: Option<TransactionType>,
    },

    /// Edit a category; existing transactions keep their snapshot
    Edit {
        /// Category title or ID
        category: String,
        #[arg(short = 't', long = "type")]
        transaction_type: Option<TransactionType>,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New icon name
        #[arg(long)]
        image: Option<String>,
        /// New color as #RRGGBB
        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a category; existing transactions are not affected
    Delete {
        /// Category title or ID
        category: String,
        #[arg(short = 't', long = "type")]
        transaction_type: Option<TransactionType>,
    },
}

/// Handle a category command
pub fn handle_category_command(store: &mut LedgerStore, cmd: CategoryCommands) -> StoryCashResult<()> {
    let mut service = CategoryService::new(store);

    match cmd {
        CategoryCommands::List { transaction_type } => {
            let categories = service_categories(&service, transaction_type);
            print!("{}", format_category_list(&categories));
        }

        CategoryCommands::Add {
            title,
            income,
            image,
            color,
        } => {
            let transaction_type = if income {
                TransactionType::Income
            } else {
                TransactionType::Expense
            };
            let category = service.create_category(&image, &title, &color, transaction_type)?;

            println!("Created category:");
            print!("{}", format_category_details(&category));
        }

        CategoryCommands::Show {
            category,
            transaction_type,
        } => {
            let found = find(&service, &category, transaction_type)?;
            print!("{}", format_category_details(&found));
        }

        CategoryCommands::Edit {
            category,
            transaction_type,
            title,
            image,
            color,
        } => {
            let found = find(&service, &category, transaction_type)?;

            if title.is_none() && image.is_none() && color.is_none() {
                println!("No changes specified. Use --title, --image or --color.");
                return Ok(());
            }

            let updated = service.update_category(found.id, CategoryEdit { title, image, color })?;
            println!("Updated category:");
            print!("{}", format_category_details(&updated));
        }

        CategoryCommands::Delete {
            category,
            transaction_type,
        } => {
            let found = find(&service, &category, transaction_type)?;
            service.delete_category(found.id)?;
            println!("Deleted category '{}' ({})", found.title, found.transaction_type);
        }
    }

    Ok(())
}

fn find(
    service: &CategoryService<'_>,
    identifier: &str,
    transaction_type: Option<TransactionType>,
) -> StoryCashResult<Category> {
    service
        .find_category(identifier, transaction_type)
        .ok_or_else(|| StoryCashError::category_not_found(identifier))
}

fn service_categories(
    service: &CategoryService<'_>,
    transaction_type: Option<TransactionType>,
) -> Vec<Category> {
    match transaction_type {
        Some(t) => service.categories_of_type(t),
        None => service.categories().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, LedgerStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::open(temp_dir.path().join("app_data.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_add_edit_delete() {
        let (_temp_dir, mut store) = create_test_store();

        handle_category_command(
            &mut store,
            CategoryCommands::Add {
                title: "Pets".into(),
                income: false,
                image: DEFAULT_IMAGE.into(),
                color: DEFAULT_COLOR.into(),
            },
        )
        .unwrap();
        assert_eq!(store.categories().len(), 19);

        handle_category_command(
            &mut store,
            CategoryCommands::Edit {
                category: "pets".into(),
                transaction_type: None,
                title: Some("Pet care".into()),
                image: None,
                color: Some("#123456".into()),
            },
        )
        .unwrap();
        let pets = store.categories().last().unwrap();
        assert_eq!(pets.title, "Pet care");
        assert_eq!(pets.color, "#123456");

        handle_category_command(
            &mut store,
            CategoryCommands::Delete {
                category: "Pet care".into(),
                transaction_type: None,
            },
        )
        .unwrap();
        assert_eq!(store.categories().len(), 18);
    }

    #[test]
    fn test_delete_other_by_type() {
        let (_temp_dir, mut store) = create_test_store();

        handle_category_command(
            &mut store,
            CategoryCommands::Delete {
                category: "Other".into(),
                transaction_type: Some(TransactionType::Income),
            },
        )
        .unwrap();

        let others: Vec<&Category> = store
            .categories()
            .iter()
            .filter(|c| c.title == "Other")
            .collect();
        assert_eq!(others.len(), 1);
        assert!(!others[0].is_income());
    }

    #[test]
    fn test_invalid_color_rejected() {
        let (_temp_dir, mut store) = create_test_store();
        let err = handle_category_command(
            &mut store,
            CategoryCommands::Add {
                title: "Pets".into(),
                income: false,
                image: DEFAULT_IMAGE.into(),
                color: "blue".into(),
            },
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(store.categories().len(), 18);
    }

    #[test]
    fn test_unknown_category() {
        let (_temp_dir, mut store) = create_test_store();
        let err = handle_category_command(
            &mut store,
            CategoryCommands::Show {
                category: "Nope".into(),
                transaction_type: None,
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
