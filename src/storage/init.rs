//! Storage initialization
//!
//! Handles first-run setup and the starter category list.

use crate::config::paths::HorizonPaths;
use crate::error::HorizonResult;
use crate::models::{Category, CategoryKind};

use super::categories::CategoryData;
use super::file_io::write_json_atomic;

const DEFAULT_INCOME: &[&str] = &["Salary", "Other Income"];

const DEFAULT_EXPENSES: &[&str] = &[
    "Housing",
    "Utilities",
    "Groceries",
    "Transportation",
    "Health",
    "Dining Out",
    "Entertainment",
];

/// Initialize storage for a fresh installation
///
/// Creates the directory layout and, if no categories file exists yet, a
/// starter set of income and expense categories. Existing data is never
/// overwritten.
pub fn initialize_storage(paths: &HorizonPaths) -> HorizonResult<()> {
    paths.ensure_directories()?;

    if !paths.categories_file().exists() {
        create_default_categories(paths)?;
    }

    Ok(())
}

fn create_default_categories(paths: &HorizonPaths) -> HorizonResult<()> {
    let income = DEFAULT_INCOME
        .iter()
        .map(|name| Category::new(*name, CategoryKind::Income));
    let expenses = DEFAULT_EXPENSES
        .iter()
        .map(|name| Category::new(*name, CategoryKind::Expense));

    let data = CategoryData {
        categories: income.chain(expenses).collect(),
    };
    write_json_atomic(paths.categories_file(), &data)
}
