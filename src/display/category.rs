//! Category display formatting
//!
//! Formats categories for terminal output as a tree grouped by kind.

use crate::models::{Category, CategoryKind};

/// Format categories as a tree, income first
pub fn format_category_tree(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'horizon init' to create default categories."
            .to_string();
    }

    let mut output = String::new();

    for (i, kind) in [CategoryKind::Income, CategoryKind::Expense].iter().enumerate() {
        let members: Vec<&Category> = categories.iter().filter(|c| c.kind == *kind).collect();

        output.push_str(&format!("{}\n", kind));
        if members.is_empty() {
            output.push_str("  (no categories)\n");
        }
        for (j, category) in members.iter().enumerate() {
            let prefix = if j == members.len() - 1 { "└── " } else { "├── " };
            output.push_str(&format!("  {}{}  [{}]\n", prefix, category.name, category.id));
        }

        if i == 0 {
            output.push('\n');
        }
    }

    output
}
