//! Category display formatting

use crate::models::Category;

/// Format categories one per line with icon, name, color and short ID
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'paycycle category add <name>' to create one.\n"
            .to_string();
    }

    let width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for category in categories {
        output.push_str(&format!(
            "{} {:<width$}  {}  {}\n",
            category.icon,
            category.name,
            category.color,
            category.id,
            width = width
        ));
    }
    output
}
