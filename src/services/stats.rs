//! Stats service
//!
//! Loads the budget and its expenses, resolves the cycle and runs the engine.
//! Nothing is cached; every call recomputes from storage.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::Settings;
use crate::engine::{build_stats, cycle_bounds, cycle_containing, partition, Clock, WeekPolicy};
use crate::error::PaycycleResult;
use crate::models::{Budget, BudgetStats, CycleBounds, Expense};
use crate::storage::BudgetStore;

use super::with_resolver;

/// Stats for one cycle together with what produced them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub budget: Budget,
    pub cycle: CycleBounds,
    pub week_policy: WeekPolicy,
    pub stats: BudgetStats,
}

impl CycleReport {
    /// Expenses of this budget dated inside the cycle
    pub fn expenses_in<'e>(&self, expenses: &'e [Expense]) -> Vec<&'e Expense> {
        expenses
            .iter()
            .filter(|e| e.belongs_to(self.budget.id) && self.cycle.contains(e.date))
            .collect()
    }
}

/// Service for cycle statistics
pub struct StatsService<'a> {
    store: &'a dyn BudgetStore,
    settings: &'a Settings,
}

impl<'a> StatsService<'a> {
    /// Create a new stats service
    pub fn new(store: &'a dyn BudgetStore, settings: &'a Settings) -> Self {
        Self { store, settings }
    }

    /// Stats for the cycle covering `today`; `None` when no budget is set
    pub fn stats_for(&self, today: NaiveDate) -> PaycycleResult<Option<CycleReport>> {
        let Some(budget) = self.store.read_budget()? else {
            return Ok(None);
        };

        let cycle = with_resolver(self.settings, |resolver| {
            cycle_containing(resolver, today, budget.start_day)
        })?;
        self.report(budget, cycle, today).map(Some)
    }

    /// Stats for the cycle covering the clock's current date
    pub fn current(&self, clock: &dyn Clock) -> PaycycleResult<Option<CycleReport>> {
        self.stats_for(clock.today())
    }

    /// Stats for the cycle that begins in `year`-`month`
    ///
    /// `today` only picks the current window; when it falls outside the cycle
    /// the current-week figures are zero.
    pub fn stats_for_cycle(
        &self,
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> PaycycleResult<Option<CycleReport>> {
        let Some(budget) = self.store.read_budget()? else {
            return Ok(None);
        };

        let cycle = with_resolver(self.settings, |resolver| {
            cycle_bounds(resolver, year, month, budget.start_day)
        })?;
        self.report(budget, cycle, today).map(Some)
    }

    fn report(&self, budget: Budget, cycle: CycleBounds, today: NaiveDate) -> PaycycleResult<CycleReport> {
        let policy = self.settings.week_policy;
        let windows = partition(cycle.start, cycle.end, policy)?;
        let mut expenses = self.store.read_expenses()?;
        expenses.retain(|e| e.belongs_to(budget.id));
        let stats = build_stats(budget.amount, cycle, &windows, &expenses, today);

        Ok(CycleReport {
            budget,
            cycle,
            week_policy: policy,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FixedClock;
    use crate::models::Money;
    use crate::storage::MemoryStorage;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn settings() -> Settings {
        Settings {
            region: "NONE".into(),
            ..Settings::default()
        }
    }

    fn seeded_store() -> MemoryStorage {
        let store = MemoryStorage::new();
        // 2024-04-05 is a Friday; May's cycle starts Friday 2024-05-03
        let budget = Budget::new(Money::new(1_000_000), 5, date(2024, 4, 5));
        let owner = budget.id;
        store.write_budget(budget).unwrap();
        for (amount, on) in [
            (30_000, date(2024, 4, 4)),
            (10_000, date(2024, 4, 5)),
            (20_000, date(2024, 4, 11)),
            (5_000, date(2024, 4, 12)),
            (7_000, date(2024, 5, 2)),
            (9_000, date(2024, 5, 3)),
        ] {
            store
                .write_expense(Expense::new("x", Money::new(amount), "Food", on).for_budget(owner))
                .unwrap();
        }
        store
    }

    #[test]
    fn test_no_budget_is_absent() {
        let store = MemoryStorage::new();
        let settings = settings();
        let service = StatsService::new(&store, &settings);

        assert!(service.stats_for(date(2024, 4, 20)).unwrap().is_none());
        assert!(service.stats_for_cycle(2024, 4, date(2024, 4, 20)).unwrap().is_none());
    }

    #[test]
    fn test_stats_for_today() {
        let store = seeded_store();
        let settings = settings();
        let service = StatsService::new(&store, &settings);

        let report = service.stats_for(date(2024, 4, 12)).unwrap().unwrap();
        assert_eq!(report.cycle, CycleBounds::new(date(2024, 4, 5), date(2024, 5, 2)));

        let stats = &report.stats;
        assert_eq!(stats.weekly_budgets.len(), 4);
        assert_eq!(stats.total_spent, Money::new(42_000));
        assert_eq!(stats.total_remaining, Money::new(958_000));
        assert_eq!(stats.current_week, Some(2));
        assert_eq!(stats.current_week_spent, Money::new(5_000));
        assert_eq!(stats.weekly_budgets[0].spent, Money::new(30_000));
        assert_eq!(stats.weekly_budgets[3].spent, Money::new(7_000));
    }

    #[test]
    fn test_clock_injection() {
        let store = seeded_store();
        let settings = settings();
        let service = StatsService::new(&store, &settings);

        let report = service
            .current(&FixedClock(date(2024, 5, 2)))
            .unwrap()
            .unwrap();
        assert_eq!(report.stats.current_week, Some(4));
    }

    #[test]
    fn test_past_cycle_has_no_current_week() {
        let store = seeded_store();
        let settings = settings();
        let service = StatsService::new(&store, &settings);

        let report = service
            .stats_for_cycle(2024, 3, date(2024, 4, 12))
            .unwrap()
            .unwrap();
        assert_eq!(report.cycle, CycleBounds::new(date(2024, 3, 5), date(2024, 4, 4)));
        assert_eq!(report.stats.current_week, None);
        assert_eq!(report.stats.current_week_budget, Money::zero());
        assert_eq!(report.stats.total_spent, Money::new(30_000));
    }

    #[test]
    fn test_calendar_week_policy_agrees_on_total() {
        let store = seeded_store();
        let settings = Settings {
            week_policy: WeekPolicy::CalendarWeek,
            ..settings()
        };
        let service = StatsService::new(&store, &settings);

        let report = service.stats_for(date(2024, 4, 12)).unwrap().unwrap();
        let by_week: Money = report.stats.weekly_budgets.iter().map(|w| w.spent).sum();
        let allocated: Money = report.stats.weekly_budgets.iter().map(|w| w.budget).sum();
        assert_eq!(by_week, report.stats.total_spent);
        assert_eq!(allocated, Money::new(1_000_000));
        assert_eq!(report.week_policy, WeekPolicy::CalendarWeek);
    }

    #[test]
    fn test_expenses_in_cycle() {
        let store = seeded_store();
        let settings = settings();
        let service = StatsService::new(&store, &settings);
        let report = service.stats_for(date(2024, 4, 12)).unwrap().unwrap();

        let expenses = store.read_expenses().unwrap();
        assert_eq!(report.expenses_in(&expenses).len(), 4);
    }

    #[test]
    fn test_gap_day_is_counted() {
        let store = MemoryStorage::new();
        let settings = settings();
        // 2024-10-05 is a Saturday, 2024-11-05 a Tuesday
        let budget = Budget::new(Money::new(700_000), 5, date(2024, 10, 4));
        let owner = budget.id;
        store.write_budget(budget).unwrap();
        store
            .write_expense(
                Expense::new("Dinner", Money::new(50_000), "Food", date(2024, 11, 4)).for_budget(owner),
            )
            .unwrap();
        let service = StatsService::new(&store, &settings);

        let report = service.stats_for(date(2024, 11, 4)).unwrap().unwrap();
        assert_eq!(report.cycle, CycleBounds::new(date(2024, 10, 4), date(2024, 11, 4)));
        assert_eq!(report.stats.total_spent, Money::new(50_000));
        assert!(report.stats.current_week.is_some());
        assert_eq!(report.stats.current_week_spent, Money::new(50_000));

        let november = service
            .stats_for_cycle(2024, 11, date(2024, 11, 4))
            .unwrap()
            .unwrap();
        assert_eq!(november.stats.total_spent, Money::zero());
    }

    #[test]
    fn test_new_budget_starts_without_old_expenses() {
        use crate::services::{BudgetService, ExpenseService, NewExpense};

        let store = MemoryStorage::new();
        let settings = settings();
        let budgets = BudgetService::new(&store, &settings);
        let today = date(2024, 4, 10);

        let first = budgets.set_budget(Money::new(500_000), 5, today).unwrap();
        ExpenseService::new(&store)
            .add(NewExpense {
                title: "Groceries".into(),
                amount: Money::new(90_000),
                category: "Food".into(),
                date: date(2024, 4, 8),
            })
            .unwrap();
        let service = StatsService::new(&store, &settings);
        assert_eq!(
            service.stats_for(today).unwrap().unwrap().stats.total_spent,
            Money::new(90_000)
        );

        assert!(budgets.delete().unwrap());
        let second = budgets.set_budget(Money::new(300_000), 5, today).unwrap();
        assert_ne!(first.id, second.id);

        let report = service.stats_for(today).unwrap().unwrap();
        assert_eq!(report.stats.total_spent, Money::zero());
        assert_eq!(report.stats.total_remaining, Money::new(300_000));
        assert_eq!(store.read_expenses().unwrap().len(), 1);
    }
}
