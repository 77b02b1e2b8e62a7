//! Category CLI commands

use clap::Subcommand;

use crate::display::category::format_category_tree;
use crate::error::{HorizonError, HorizonResult};
use crate::models::CategoryKind;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories grouped by kind
    List,

    /// Create a new category
    Create {
        /// Category name
        name: String,
        /// Category kind (income or expense)
        #[arg(short, long, default_value = "expense")]
        kind: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> HorizonResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let categories = service.list()?;
            print!("{}", format_category_tree(&categories));
        }

        CategoryCommands::Create { name, kind } => {
            let kind = CategoryKind::parse(&kind).ok_or_else(|| {
                HorizonError::Validation(format!(
                    "Invalid category kind: '{}'. Use income or expense.",
                    kind
                ))
            })?;

            let category = service.create(&name, kind)?;
            println!("Created {} category: {}", category.kind, category.name);
            println!("  ID: {}", category.id);
        }
    }

    Ok(())
}
