//! Budget allocation and spend aggregation
//!
//! The cycle budget is split across windows by floor division; the last
//! window takes whatever is left, so the shares always add back up to the
//! cycle amount exactly.

use chrono::NaiveDate;

use crate::models::{BudgetStats, CycleBounds, Expense, Money, WeeklyBudget, Window};

/// Split `amount` into `parts` shares that sum back to `amount`
///
/// Every share but the last is `amount / parts` rounded toward negative
/// infinity; the last share is the remainder.
pub fn split_amount(amount: Money, parts: usize) -> Vec<Money> {
    if parts == 0 {
        return Vec::new();
    }

    let n = parts as i64;
    let base = amount.units().div_euclid(n);
    let last = amount.units() - base * (n - 1);

    let mut shares = vec![Money::new(base); parts - 1];
    shares.push(Money::new(last));
    shares
}

/// Allocate `amount` across `windows` and total the expenses inside each
///
/// An expense counts toward every window whose `[start, end]` contains its
/// date; windows from [`partition`](crate::engine::partition::partition) never
/// overlap, so each expense lands in at most one.
pub fn allocate(amount: Money, windows: &[Window], expenses: &[Expense]) -> Vec<WeeklyBudget> {
    let shares = split_amount(amount, windows.len());

    windows
        .iter()
        .zip(shares)
        .enumerate()
        .map(|(index, (window, budget))| {
            let spent: Money = expenses
                .iter()
                .filter(|e| window.contains(e.date))
                .map(|e| e.amount)
                .sum();

            WeeklyBudget {
                week_number: index as u32 + 1,
                start_date: window.start,
                end_date: window.end,
                budget,
                spent,
                remaining: budget - spent,
            }
        })
        .collect()
}

/// Build the full stats for a cycle
///
/// Only expenses dated inside `cycle` are considered, so the cycle total and
/// the sum of window totals agree even when windows reach past the cycle.
/// When `today` is in no window the current-week figures are zero and
/// `current_week` is `None`.
pub fn build_stats(
    amount: Money,
    cycle: CycleBounds,
    windows: &[Window],
    expenses: &[Expense],
    today: NaiveDate,
) -> BudgetStats {
    let in_cycle: Vec<Expense> = expenses
        .iter()
        .filter(|e| cycle.contains(e.date))
        .cloned()
        .collect();

    let weekly_budgets = allocate(amount, windows, &in_cycle);
    let total_spent: Money = weekly_budgets.iter().map(|w| w.spent).sum();

    let current = weekly_budgets
        .iter()
        .find(|w| w.window().contains(today));

    let (current_week, current_budget, current_spent, current_remaining) = match current {
        Some(week) => (Some(week.week_number), week.budget, week.spent, week.remaining),
        None => (None, Money::zero(), Money::zero(), Money::zero()),
    };

    tracing::debug!(
        cycle = %cycle,
        windows = weekly_budgets.len(),
        expenses = in_cycle.len(),
        total_spent = total_spent.units(),
        "built cycle stats"
    );

    BudgetStats {
        total_budget: amount,
        total_spent,
        total_remaining: amount - total_spent,
        current_week_budget: current_budget,
        current_week_spent: current_spent,
        current_week_remaining: current_remaining,
        current_week,
        weekly_budgets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::partition::{partition, WeekPolicy};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(amount: i64, on: NaiveDate) -> Expense {
        Expense::new("test", Money::new(amount), "Food", on)
    }

    fn april_cycle() -> (CycleBounds, Vec<Window>) {
        let cycle = CycleBounds::new(date(2024, 4, 5), date(2024, 5, 4));
        let windows = partition(cycle.start, cycle.end, WeekPolicy::AnchorDay).unwrap();
        (cycle, windows)
    }

    #[test]
    fn test_split_reconciles() {
        for amount in [0, 1, 7, 99, 100, 1_000_000, 1_234_567] {
            for parts in 1..=6 {
                let shares = split_amount(Money::new(amount), parts);
                assert_eq!(shares.len(), parts);
                let total: Money = shares.iter().sum();
                assert_eq!(total.units(), amount);
            }
        }
        assert!(split_amount(Money::new(100), 0).is_empty());
    }

    #[test]
    fn test_last_share_takes_remainder() {
        let shares = split_amount(Money::new(1_000_001), 4);
        assert_eq!(
            shares,
            vec![
                Money::new(250_000),
                Money::new(250_000),
                Money::new(250_000),
                Money::new(250_001)
            ]
        );
    }

    #[test]
    fn test_five_windows_of_a_million() {
        let (cycle, windows) = april_cycle();
        let stats = build_stats(Money::new(1_000_000), cycle, &windows, &[], date(2024, 4, 20));

        let budgets: Vec<_> = stats.weekly_budgets.iter().map(|w| w.budget.units()).collect();
        assert_eq!(budgets, vec![200_000; 5]);
    }

    #[test]
    fn test_zero_expenses() {
        let (cycle, windows) = april_cycle();
        let stats = build_stats(Money::new(1_000_000), cycle, &windows, &[], date(2024, 4, 5));

        assert!(stats.weekly_budgets.iter().all(|w| w.spent.is_zero()));
        assert!(stats.weekly_budgets.iter().all(|w| w.remaining == w.budget));
        assert_eq!(stats.total_remaining, Money::new(1_000_000));
    }

    #[test]
    fn test_boundary_expense_counts_in_ending_window() {
        let (cycle, windows) = april_cycle();
        // 2024-04-11 is the last day of window 1
        let expenses = vec![expense(30_000, date(2024, 4, 11)), expense(5_000, date(2024, 4, 12))];
        let stats = build_stats(Money::new(1_000_000), cycle, &windows, &expenses, date(2024, 4, 11));

        assert_eq!(stats.weekly_budgets[0].spent, Money::new(30_000));
        assert_eq!(stats.weekly_budgets[1].spent, Money::new(5_000));
        assert_eq!(stats.current_week, Some(1));
        assert_eq!(stats.current_week_spent, Money::new(30_000));
        assert_eq!(stats.current_week_remaining, Money::new(170_000));
    }

    #[test]
    fn test_expenses_outside_cycle_are_ignored() {
        let (cycle, windows) = april_cycle();
        let expenses = vec![
            expense(1_000, date(2024, 4, 4)),
            expense(2_000, date(2024, 4, 5)),
            expense(4_000, date(2024, 5, 4)),
            expense(8_000, date(2024, 5, 5)),
        ];
        let stats = build_stats(Money::new(700_000), cycle, &windows, &expenses, date(2024, 4, 5));

        assert_eq!(stats.total_spent, Money::new(6_000));
        assert_eq!(stats.weekly_budgets[4].spent, Money::new(4_000));
    }

    #[test]
    fn test_overspending_goes_negative() {
        let (cycle, windows) = april_cycle();
        let expenses = vec![expense(250_000, date(2024, 4, 6))];
        let stats = build_stats(Money::new(1_000_000), cycle, &windows, &expenses, date(2024, 4, 6));

        assert_eq!(stats.weekly_budgets[0].remaining, Money::new(-50_000));
        assert!(stats.weekly_budgets[0].is_overspent());
    }

    #[test]
    fn test_today_outside_cycle_zeroes_current_week() {
        let (cycle, windows) = april_cycle();
        let expenses = vec![expense(10_000, date(2024, 4, 8))];
        let stats = build_stats(Money::new(1_000_000), cycle, &windows, &expenses, date(2024, 6, 1));

        assert_eq!(stats.current_week, None);
        assert!(stats.current().is_none());
        assert!(stats.current_week_budget.is_zero());
        assert!(stats.current_week_spent.is_zero());
        assert!(stats.current_week_remaining.is_zero());
    }

    #[test]
    fn test_totals_agree_under_calendar_weeks() {
        let cycle = CycleBounds::new(date(2024, 3, 5), date(2024, 4, 4));
        let windows = partition(cycle.start, cycle.end, WeekPolicy::CalendarWeek).unwrap();
        let expenses = vec![
            expense(1_000, date(2024, 3, 4)), // Monday of week 1, before the cycle
            expense(2_000, date(2024, 3, 5)),
            expense(4_000, date(2024, 4, 4)),
            expense(8_000, date(2024, 4, 6)), // Saturday of the last week, after the cycle
        ];
        let stats = build_stats(Money::new(500_000), cycle, &windows, &expenses, date(2024, 3, 20));

        let window_sum: Money = stats.weekly_budgets.iter().map(|w| w.spent).sum();
        assert_eq!(stats.total_spent, Money::new(6_000));
        assert_eq!(window_sum, stats.total_spent);
        let allocated: Money = stats.weekly_budgets.iter().map(|w| w.budget).sum();
        assert_eq!(allocated, Money::new(500_000));
    }

    #[test]
    fn test_remaining_is_budget_minus_spent() {
        let (cycle, windows) = april_cycle();
        let expenses: Vec<_> = (0..30)
            .map(|i| expense(1_000 * (i + 1), date(2024, 4, 5) + chrono::Duration::days(i)))
            .collect();
        let stats = build_stats(Money::new(333_333), cycle, &windows, &expenses, date(2024, 4, 5));

        for week in &stats.weekly_budgets {
            assert_eq!(week.remaining, week.budget - week.spent);
        }
        let expected: i64 = (1..=30).map(|i| 1_000 * i).sum();
        assert_eq!(stats.total_spent.units(), expected);
    }
}
