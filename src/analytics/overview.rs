//! Combined views built from the other analytics modules
//!
//! These power the budget table, the daily check, the spending, income and
//! savings reports, and the comprehensive monthly report.

use chrono::NaiveDate;
use serde::Serialize;

use super::aggregate::{
    category_breakdown, sum_by_category, total, CategorySpendSummary, PeriodTotals,
};
use super::compare::{compare, month_over_month, savings_trend, MonthOverMonth, PeriodComparison};
use crate::models::{BudgetMap, Category, DateWindow, Money, Transaction, TransactionKind};

/// One row of the budget vs. spending table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub category: Category,
    pub budget: Money,
    pub spent: Money,
    /// Negative when over budget
    pub remaining: Money,
    /// `None` for a zero budget
    pub utilization: Option<f64>,
}

impl BudgetStatus {
    pub fn is_over(&self) -> bool {
        self.spent > self.budget
    }
}

/// Budget vs. spending for the month containing `reference`, in category order
pub fn budget_status(
    transactions: &[Transaction],
    budgets: &BudgetMap,
    reference: NaiveDate,
) -> Vec<BudgetStatus> {
    let window = DateWindow::month_containing(reference);
    let spending = sum_by_category(transactions, TransactionKind::Expense, &window);

    budgets
        .values()
        .map(|budget| {
            let spent = spending.get(&budget.category).copied().unwrap_or_default();
            BudgetStatus {
                category: budget.category,
                budget: budget.monthly_amount,
                spent,
                remaining: budget.monthly_amount - spent,
                utilization: spent.percent_of(budget.monthly_amount),
            }
        })
        .collect()
}

/// Today's spending against an even share of the monthly budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCheck {
    pub date: NaiveDate,
    pub spent_today: Money,
    /// Total monthly budget divided by the days in the month
    pub daily_budget: Money,
    pub remaining: Money,
}

impl DailyCheck {
    pub fn is_within_budget(&self) -> bool {
        !self.remaining.is_negative()
    }
}

pub fn daily_check(
    transactions: &[Transaction],
    budgets: &BudgetMap,
    reference: NaiveDate,
) -> DailyCheck {
    let spent_today = total(transactions, TransactionKind::Expense, &DateWindow::day(reference));
    let monthly: Money = budgets.values().map(|b| b.monthly_amount).sum();
    let daily_budget = monthly.divide_by(DateWindow::month_containing(reference).days());

    DailyCheck {
        date: reference,
        spent_today,
        daily_budget,
        remaining: daily_budget - spent_today,
    }
}

/// Income minus expenses inside a window
pub fn balance(transactions: &[Transaction], window: DateWindow) -> PeriodTotals {
    PeriodTotals::compute(transactions, window)
}

/// Expenses of the reference month spread over the days elapsed so far.
/// `None` when nothing was spent.
pub fn average_daily_expense(transactions: &[Transaction], reference: NaiveDate) -> Option<Money> {
    let window = DateWindow::month_containing(reference);
    let spent = total(transactions, TransactionKind::Expense, &window);
    if spent.is_zero() {
        return None;
    }
    Some(spent.divide_by(window.days_elapsed(reference)))
}

/// Ranked spending for a window plus the reference month's daily average
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingReport {
    pub window: DateWindow,
    pub total: Money,
    pub categories: Vec<CategorySpendSummary>,
    pub average_daily_expense: Option<Money>,
}

impl SpendingReport {
    pub fn top(&self, n: usize) -> &[CategorySpendSummary] {
        &self.categories[..n.min(self.categories.len())]
    }
}

pub fn spending_report(
    transactions: &[Transaction],
    window: DateWindow,
    reference: NaiveDate,
) -> SpendingReport {
    let categories = category_breakdown(transactions, TransactionKind::Expense, &window);
    SpendingReport {
        window,
        total: categories.iter().map(|c| c.total_spent).sum(),
        categories,
        average_daily_expense: average_daily_expense(transactions, reference),
    }
}

/// Income sources for the reference month and the change from last month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeReport {
    pub window: DateWindow,
    pub total: Money,
    pub sources: Vec<CategorySpendSummary>,
    pub comparison: PeriodComparison,
}

pub fn income_report(transactions: &[Transaction], reference: NaiveDate) -> IncomeReport {
    let window = DateWindow::month_containing(reference);
    let current = total(transactions, TransactionKind::Income, &window);
    let previous = total(transactions, TransactionKind::Income, &window.previous_month());

    IncomeReport {
        window,
        total: current,
        sources: category_breakdown(transactions, TransactionKind::Income, &window),
        comparison: compare(current, previous),
    }
}

/// This month's savings plus the months before it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsReport {
    pub current: PeriodTotals,
    pub savings_rate: Option<f64>,
    /// Most recent month first
    pub trend: Vec<PeriodTotals>,
}

pub fn savings_report(
    transactions: &[Transaction],
    reference: NaiveDate,
    months: usize,
) -> SavingsReport {
    let current = PeriodTotals::compute(transactions, DateWindow::month_containing(reference));
    SavingsReport {
        current,
        savings_rate: current.savings_rate(),
        trend: savings_trend(transactions, reference, months),
    }
}

/// Everything the comprehensive report shows for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyReport {
    pub window: DateWindow,
    pub totals: PeriodTotals,
    pub savings_rate: Option<f64>,
    pub income: Vec<CategorySpendSummary>,
    pub expenses: Vec<CategorySpendSummary>,
    pub average_daily_expense: Option<Money>,
    pub comparison: MonthOverMonth,
    pub budgets_set: bool,
    pub over_budget: Vec<BudgetStatus>,
}

impl MonthlyReport {
    pub fn top_expense(&self) -> Option<&CategorySpendSummary> {
        self.expenses.first()
    }
}

pub fn monthly_report(
    transactions: &[Transaction],
    budgets: &BudgetMap,
    reference: NaiveDate,
) -> MonthlyReport {
    let window = DateWindow::month_containing(reference);
    let comparison = month_over_month(transactions, reference);
    let totals = comparison.current;

    MonthlyReport {
        window,
        totals,
        savings_rate: totals.savings_rate(),
        income: category_breakdown(transactions, TransactionKind::Income, &window),
        expenses: category_breakdown(transactions, TransactionKind::Expense, &window),
        average_daily_expense: average_daily_expense(transactions, reference),
        comparison,
        budgets_set: !budgets.is_empty(),
        over_budget: budget_status(transactions, budgets, reference)
            .into_iter()
            .filter(BudgetStatus::is_over)
            .collect(),
    }
}
