//! Expense service
//!
//! Recording, listing and deleting expenses. Expenses can only be recorded
//! while a budget is active, and the category is stored by name.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::engine::aggregate::total;
use crate::error::{PaycycleError, PaycycleResult};
use crate::models::{Category, Expense, Money};
use crate::storage::BudgetStore;

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a dyn BudgetStore,
}

/// Input for a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub title: String,
    pub amount: Money,
    /// Category name or ID
    pub category: String,
    pub date: NaiveDate,
}

/// Field to order expense listings by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseSort {
    #[default]
    Date,
    Amount,
}

impl fmt::Display for ExpenseSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpenseSort::Date => write!(f, "date"),
            ExpenseSort::Amount => write!(f, "amount"),
        }
    }
}

impl FromStr for ExpenseSort {
    type Err = PaycycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(ExpenseSort::Date),
            "amount" => Ok(ExpenseSort::Amount),
            other => Err(PaycycleError::Validation(format!(
                "Unknown sort field '{}' (expected date or amount)",
                other
            ))),
        }
    }
}

/// Options for filtering and ordering expenses
///
/// The default is every expense, newest first.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Only expenses filed under this category name
    pub category: Option<String>,
    /// Only expenses on or after this date
    pub start_date: Option<NaiveDate>,
    /// Only expenses on or before this date
    pub end_date: Option<NaiveDate>,
    pub sort: ExpenseSort,
    pub ascending: bool,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category name
    pub fn category(mut self, name: impl Into<String>) -> Self {
        self.category = Some(name.into());
        self
    }

    /// Filter by date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Set the ordering
    pub fn sorted(mut self, sort: ExpenseSort, ascending: bool) -> Self {
        self.sort = sort;
        self.ascending = ascending;
        self
    }

    fn matches(&self, expense: &Expense) -> bool {
        if let Some(ref name) = self.category {
            if !expense.category.eq_ignore_ascii_case(name.trim()) {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if expense.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if expense.date > end {
                return false;
            }
        }
        true
    }

    fn compare(&self, a: &Expense, b: &Expense) -> Ordering {
        let ord = match self.sort {
            ExpenseSort::Date => a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)),
            ExpenseSort::Amount => a.amount.cmp(&b.amount),
        };
        if self.ascending {
            ord
        } else {
            ord.reverse()
        }
    }
}

/// Count, total and average of a set of expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseSummary {
    pub count: usize,
    pub total: Money,
    /// Mean amount, rounded half away from zero
    pub average: Money,
}

impl ExpenseSummary {
    /// Summarize a list of expenses
    pub fn of(expenses: &[Expense]) -> Self {
        let count = expenses.len();
        let total = total(expenses);
        let average = if count == 0 {
            Money::zero()
        } else {
            let n = count as i64;
            let units = total.units();
            let rounded = (units.abs() + n / 2) / n;
            Money::new(if units < 0 { -rounded } else { rounded })
        };
        Self {
            count,
            total,
            average,
        }
    }
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a dyn BudgetStore) -> Self {
        Self { store }
    }

    /// Record a new expense
    pub fn add(&self, input: NewExpense) -> PaycycleResult<Expense> {
        let Some(budget) = self.store.read_budget()? else {
            return Err(PaycycleError::Validation(
                "No budget is set; set a budget before recording expenses".into(),
            ));
        };

        let category = self.resolve_category(&input.category)?;
        let expense = Expense::new(input.title, input.amount, category.name, input.date)
            .for_budget(budget.id);
        expense
            .validate()
            .map_err(|e| PaycycleError::Validation(e.to_string()))?;

        self.store.write_expense(expense.clone())?;
        tracing::info!(
            id = %expense.id,
            amount = expense.amount.units(),
            category = %expense.category,
            date = %expense.date,
            "expense recorded"
        );

        Ok(expense)
    }

    /// Find a category by name (case-insensitive) or by ID
    pub fn resolve_category(&self, key: &str) -> PaycycleResult<Category> {
        let key = key.trim();
        if key.is_empty() {
            return Err(PaycycleError::Validation("Category is required".into()));
        }

        let categories = self.store.read_categories()?;
        categories
            .iter()
            .find(|c| c.name == key)
            .or_else(|| categories.iter().find(|c| c.name.eq_ignore_ascii_case(key)))
            .or_else(|| categories.iter().find(|c| c.id.matches(key)))
            .cloned()
            .ok_or_else(|| PaycycleError::category_not_found(key))
    }

    /// List expenses matching a filter
    pub fn list(&self, filter: &ExpenseFilter) -> PaycycleResult<Vec<Expense>> {
        let mut expenses: Vec<Expense> = self
            .store
            .read_expenses()?
            .into_iter()
            .filter(|e| filter.matches(e))
            .collect();

        expenses.sort_by(|a, b| filter.compare(a, b));
        Ok(expenses)
    }

    /// Find an expense by full ID or short prefix
    pub fn find(&self, key: &str) -> PaycycleResult<Expense> {
        let mut matches: Vec<Expense> = self
            .store
            .read_expenses()?
            .into_iter()
            .filter(|e| e.id.matches(key))
            .collect();

        match matches.len() {
            0 => Err(PaycycleError::expense_not_found(key)),
            1 => Ok(matches.remove(0)),
            n => Err(PaycycleError::Validation(format!(
                "'{}' matches {} expenses; use a longer ID",
                key, n
            ))),
        }
    }

    /// Delete an expense by full ID or short prefix
    pub fn delete(&self, key: &str) -> PaycycleResult<Expense> {
        let expense = self.find(key)?;
        self.store.delete_expense(expense.id)?;
        tracing::info!(id = %expense.id, "expense deleted");
        Ok(expense)
    }

    /// Summary of the expenses matching a filter
    pub fn summary(&self, filter: &ExpenseFilter) -> PaycycleResult<ExpenseSummary> {
        Ok(ExpenseSummary::of(&self.list(filter)?))
    }
}
