//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::PaycycleResult;
use crate::services::CategoryService;
use crate::storage::BudgetStore;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Display color as a hex code (e.g., "#22c55e")
        #[arg(long)]
        color: Option<String>,
        /// Display icon
        #[arg(long)]
        icon: Option<String>,
    },

    /// Remove a category (existing expenses keep its name)
    Remove {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(store: &dyn BudgetStore, cmd: CategoryCommands) -> PaycycleResult<()> {
    let service = CategoryService::new(store);

    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(&service.list()?));
        }
        CategoryCommands::Add { name, color, icon } => {
            let category = service.add(&name, color.as_deref(), icon.as_deref())?;
            println!("Created category: {} ({})", category, category.id);
        }
        CategoryCommands::Remove { category } => {
            let removed = service.remove(&category)?;
            println!("Removed category: {}", removed);
        }
    }

    Ok(())
}
