//! Category display formatting

use crate::models::{Category, TransactionType};

/// Format categories grouped by polarity, expense first
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut output = String::new();

    for (i, transaction_type) in [TransactionType::Expense, TransactionType::Income]
        .iter()
        .enumerate()
    {
        let group: Vec<&Category> = categories
            .iter()
            .filter(|c| c.transaction_type == *transaction_type)
            .collect();

        if i > 0 {
            output.push('\n');
        }
        let heading = match transaction_type {
            TransactionType::Expense => "Expense",
            TransactionType::Income => "Income",
        };
        output.push_str(&format!("{}\n", heading));

        if group.is_empty() {
            output.push_str("  (no categories)\n");
            continue;
        }

        for (j, category) in group.iter().enumerate() {
            let prefix = if j == group.len() - 1 { "└── " } else { "├── " };
            output.push_str(&format!(
                "  {}{:12} {:20} {} {}\n",
                prefix,
                category.id.short(),
                category.title,
                category.color,
                category.image
            ));
        }
    }

    output
}

/// Format category details for display
pub fn format_category_details(category: &Category) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.title));
    output.push_str(&format!("  ID:    {}\n", category.id));
    output.push_str(&format!("  Type:  {}\n", category.transaction_type));
    output.push_str(&format!("  Image: {}\n", category.image));
    output.push_str(&format!("  Color: {}\n", category.color));

    output
}
