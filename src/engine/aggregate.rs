//! Expense aggregation helpers
//!
//! Per-category totals, date-range filters and month-by-month totals. None of
//! these look at the budget.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::cycle::shift_month;
use crate::models::{Expense, Money};

/// Total spent under one category name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Money,
    pub count: usize,
}

/// Sum expenses by category name, in order of first appearance
pub fn by_category<'a, I>(expenses: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for expense in expenses {
        match index.get(expense.category.as_str()) {
            Some(&i) => {
                totals[i].amount += expense.amount;
                totals[i].count += 1;
            }
            None => {
                index.insert(expense.category.as_str(), totals.len());
                totals.push(CategoryTotal {
                    category: expense.category.clone(),
                    amount: expense.amount,
                    count: 1,
                });
            }
        }
    }

    totals
}

/// Sum of all expense amounts
pub fn total<'a, I>(expenses: I) -> Money
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses.into_iter().map(|e| e.amount).sum()
}

/// Expenses dated in `[start, end]`, both ends inclusive
pub fn expenses_between(expenses: &[Expense], start: NaiveDate, end: NaiveDate) -> Vec<&Expense> {
    expenses.iter().filter(|e| e.is_within(start, end)).collect()
}

/// Expenses dated in calendar month `year`-`month`
pub fn monthly_expenses(expenses: &[Expense], year: i32, month: u32) -> Vec<&Expense> {
    expenses
        .iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
        .collect()
}

/// Spend in one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTotal {
    pub year: i32,
    pub month: u32,
    pub amount: Money,
}

/// Spend for the `months` calendar months ending with `year`-`month`,
/// oldest first
pub fn monthly_totals(expenses: &[Expense], year: i32, month: u32, months: u32) -> Vec<MonthTotal> {
    (0..months as i32)
        .rev()
        .map(|back| {
            let (y, m) = shift_month(year, month, -back);
            MonthTotal {
                year: y,
                month: m,
                amount: total(monthly_expenses(expenses, y, m)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(category: &str, amount: i64, on: NaiveDate) -> Expense {
        Expense::new("item", Money::new(amount), category, on)
    }

    #[test]
    fn test_by_category_keeps_first_appearance_order() {
        let expenses = vec![
            expense("Transport", 1_400, date(2024, 3, 5)),
            expense("Food", 9_000, date(2024, 3, 5)),
            expense("Transport", 1_400, date(2024, 3, 6)),
            expense("Shopping", 30_000, date(2024, 3, 7)),
            expense("Food", 12_000, date(2024, 3, 7)),
        ];

        let totals = by_category(&expenses);
        let names: Vec<_> = totals.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(names, vec!["Transport", "Food", "Shopping"]);
        assert_eq!(totals[0].amount, Money::new(2_800));
        assert_eq!(totals[0].count, 2);
        assert_eq!(totals[1].amount, Money::new(21_000));
        assert_eq!(total(&expenses), Money::new(53_800));
    }

    #[test]
    fn test_by_category_empty() {
        assert!(by_category(&Vec::<Expense>::new()).is_empty());
    }

    #[test]
    fn test_expenses_between_is_inclusive() {
        let expenses = vec![
            expense("Food", 1, date(2024, 3, 4)),
            expense("Food", 2, date(2024, 3, 5)),
            expense("Food", 4, date(2024, 3, 11)),
            expense("Food", 8, date(2024, 3, 12)),
        ];
        let found = expenses_between(&expenses, date(2024, 3, 5), date(2024, 3, 11));
        assert_eq!(total(found), Money::new(6));
    }

    #[test]
    fn test_monthly_totals() {
        let expenses = vec![
            expense("Food", 100, date(2023, 12, 31)),
            expense("Food", 200, date(2024, 1, 1)),
            expense("Food", 300, date(2024, 2, 15)),
            expense("Food", 400, date(2024, 2, 29)),
        ];

        let totals = monthly_totals(&expenses, 2024, 2, 3);
        assert_eq!(
            totals,
            vec![
                MonthTotal { year: 2023, month: 12, amount: Money::new(100) },
                MonthTotal { year: 2024, month: 1, amount: Money::new(200) },
                MonthTotal { year: 2024, month: 2, amount: Money::new(700) },
            ]
        );
        assert_eq!(monthly_expenses(&expenses, 2024, 2).len(), 2);
    }
}
