//! Analytics service
//!
//! Takes one snapshot of the ledger per query and runs the analytics core
//! against it with the caller's reference date.

use chrono::NaiveDate;
use tracing::debug;

use crate::analytics::{
    self, Alert, BudgetStatus, DailyCheck, GoalStatus, HealthScoreResult, IncomeReport,
    MonthOverMonth, MonthlyReport, PeriodTotals, Recommendation, SavingsOpportunities,
    SavingsReport, SpendingReport,
};
use crate::error::{TrackerError, TrackerResult};
use crate::ledger::{LedgerSnapshot, LedgerSource};
use crate::models::DateWindow;

/// Months shown in the savings trend
pub const SAVINGS_TREND_MONTHS: usize = 3;

/// Service for read-only analytics queries
pub struct AnalyticsService<'a> {
    source: &'a dyn LedgerSource,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(source: &'a dyn LedgerSource) -> Self {
        Self { source }
    }

    fn snapshot(&self, query: &str) -> TrackerResult<LedgerSnapshot> {
        let snapshot = self.source.snapshot()?;
        debug!(
            query,
            transactions = snapshot.transactions().len(),
            budgets = snapshot.budgets().len(),
            "running analytics query"
        );
        Ok(snapshot)
    }

    /// Ranked spending inside `window`
    pub fn spending(
        &self,
        window: DateWindow,
        reference: NaiveDate,
    ) -> TrackerResult<SpendingReport> {
        let s = self.snapshot("spending")?;
        Ok(analytics::spending_report(s.transactions(), window, reference))
    }

    pub fn income(&self, reference: NaiveDate) -> TrackerResult<IncomeReport> {
        let s = self.snapshot("income")?;
        Ok(analytics::income_report(s.transactions(), reference))
    }

    pub fn savings(&self, reference: NaiveDate) -> TrackerResult<SavingsReport> {
        let s = self.snapshot("savings")?;
        Ok(analytics::savings_report(
            s.transactions(),
            reference,
            SAVINGS_TREND_MONTHS,
        ))
    }

    pub fn month_over_month(&self, reference: NaiveDate) -> TrackerResult<MonthOverMonth> {
        let s = self.snapshot("month-over-month")?;
        Ok(analytics::month_over_month(s.transactions(), reference))
    }

    pub fn health(&self, reference: NaiveDate) -> TrackerResult<HealthScoreResult> {
        let s = self.snapshot("health")?;
        Ok(analytics::score(s.transactions(), s.budgets(), reference))
    }

    pub fn monthly_report(&self, reference: NaiveDate) -> TrackerResult<MonthlyReport> {
        let s = self.snapshot("monthly-report")?;
        Ok(analytics::monthly_report(s.transactions(), s.budgets(), reference))
    }

    pub fn budget_status(&self, reference: NaiveDate) -> TrackerResult<Vec<BudgetStatus>> {
        let s = self.snapshot("budget-status")?;
        Ok(analytics::budget_status(s.transactions(), s.budgets(), reference))
    }

    pub fn daily_check(&self, reference: NaiveDate) -> TrackerResult<DailyCheck> {
        let s = self.snapshot("daily-check")?;
        Ok(analytics::daily_check(s.transactions(), s.budgets(), reference))
    }

    pub fn balance(&self, window: DateWindow) -> TrackerResult<PeriodTotals> {
        let s = self.snapshot("balance")?;
        Ok(analytics::balance(s.transactions(), window))
    }

    pub fn recommendations(&self, reference: NaiveDate) -> TrackerResult<Vec<Recommendation>> {
        let s = self.snapshot("recommendations")?;
        Ok(analytics::recommend(s.transactions(), s.budgets(), reference))
    }

    pub fn alerts(&self, reference: NaiveDate) -> TrackerResult<Vec<Alert>> {
        let s = self.snapshot("alerts")?;
        Ok(analytics::evaluate(s.transactions(), s.budgets(), reference))
    }

    pub fn opportunities(&self, reference: NaiveDate) -> TrackerResult<SavingsOpportunities> {
        let s = self.snapshot("opportunities")?;
        Ok(analytics::savings_opportunities(
            s.transactions(),
            s.budgets(),
            reference,
        ))
    }

    /// Progress for every stored goal
    pub fn goals(&self, reference: NaiveDate) -> TrackerResult<Vec<GoalStatus>> {
        let goals = self.source.goals()?;
        for goal in goals.values() {
            goal.validate()
                .map_err(|e| TrackerError::Validation(format!("{} goal: {}", goal.goal_type, e)))?;
        }
        let s = self.snapshot("goals")?;
        Ok(analytics::goal_progress(&goals, s.transactions(), reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{HealthFactor, Severity};
    use crate::models::{Budget, BudgetMap, Category, Money, Transaction};

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    fn snapshot() -> LedgerSnapshot {
        let mut budgets = BudgetMap::new();
        budgets.insert(Category::Food, Budget::new(Category::Food, Money::from_minor(5_000)));
        LedgerSnapshot::new(
            vec![
                Transaction::income(d(1), Category::Salary, "", Money::from_minor(100_000)),
                Transaction::expense(d(2), Category::Food, "", Money::from_minor(6_000)),
            ],
            budgets,
        )
        .unwrap()
    }

    #[test]
    fn test_queries_run_against_snapshot() {
        let ledger = snapshot();
        let service = AnalyticsService::new(&ledger);

        let health = service.health(d(15)).unwrap();
        assert_eq!(
            health.component(HealthFactor::SavingsRate).map(|c| c.points_awarded),
            Some(30)
        );

        let alerts = service.alerts(d(15)).unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, Severity::Critical);

        assert_eq!(service.balance(DateWindow::unbounded()).unwrap().savings().minor(), 94_000);
        assert!(service.goals(d(15)).unwrap().is_empty());
    }

    #[test]
    fn test_empty_source() {
        let ledger = LedgerSnapshot::empty();
        let service = AnalyticsService::new(&ledger);

        assert!(service.alerts(d(1)).unwrap().is_empty());
        assert!(service.budget_status(d(1)).unwrap().is_empty());
        assert!(service.spending(DateWindow::unbounded(), d(1)).unwrap().categories.is_empty());
        assert_eq!(service.savings(d(1)).unwrap().trend.len(), SAVINGS_TREND_MONTHS);
    }
}
