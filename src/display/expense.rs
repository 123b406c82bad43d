//! Expense display formatting
//!
//! Expense listings are rendered with `tabled`; details and summaries are
//! plain aligned text.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Expense;
use crate::services::ExpenseSummary;

use super::report::format_money;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses as a table
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        date: settings.format_date(e.date),
        title: truncate(&e.title, 30),
        category: e.category.clone(),
        amount: format_money(e.amount, settings),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::last()).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format a single expense for display
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", expense.id));
    output.push_str(&format!("Title:    {}\n", expense.title));
    output.push_str(&format!("Amount:   {}\n", format_money(expense.amount, settings)));
    output.push_str(&format!("Category: {}\n", expense.category));
    output.push_str(&format!("Date:     {}\n", settings.format_date(expense.date)));

    output
}

/// One-line count / total / average
pub fn format_summary_line(summary: &ExpenseSummary, settings: &Settings) -> String {
    format!(
        "{} expense(s), total {}, average {}",
        summary.count,
        format_money(summary.total, settings),
        format_money(summary.average, settings)
    )
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}
