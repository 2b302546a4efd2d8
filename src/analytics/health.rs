//! Financial health score
//!
//! Four factors are scored over the month containing the reference date and
//! summed into a 0-100 score:
//!
//! | Factor             | Max | Rule                                              |
//! |--------------------|-----|---------------------------------------------------|
//! | Savings rate       | 30  | >=20% -> 30, >=10% -> 20, otherwise 0             |
//! | Budget adherence   | 25  | capped utilization <=80% -> 25, <=100% -> 15      |
//! | Income vs expenses | 25  | income above expenses -> 25, equal -> 10          |
//! | Debt management    | 20  | not tracked, always 0                             |
//!
//! Thresholds are compared exactly on minor units; the floating point
//! measure attached to each component is for display only.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;

use super::aggregate::{sum_by_category, PeriodTotals};
use crate::models::{BudgetMap, DateWindow, Money, Transaction, TransactionKind};

/// A scored factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthFactor {
    SavingsRate,
    BudgetAdherence,
    IncomeVsExpenses,
    DebtManagement,
}

impl HealthFactor {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SavingsRate => "Savings Rate",
            Self::BudgetAdherence => "Budget Adherence",
            Self::IncomeVsExpenses => "Income vs Expenses",
            Self::DebtManagement => "Debt Management",
        }
    }

    pub const fn max_points(&self) -> u8 {
        match self {
            Self::SavingsRate => 30,
            Self::BudgetAdherence => 25,
            Self::IncomeVsExpenses => 25,
            Self::DebtManagement => 20,
        }
    }
}

/// One line of the score breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub factor: HealthFactor,
    pub points_awarded: u8,
    pub max_points: u8,
    pub rationale: String,
    /// Savings rate or utilization percentage; `None` when not applicable
    pub measure: Option<f64>,
}

impl ScoreComponent {
    fn new(
        factor: HealthFactor,
        points_awarded: u8,
        rationale: String,
        measure: Option<f64>,
    ) -> Self {
        Self {
            factor,
            points_awarded,
            max_points: factor.max_points(),
            rationale,
            measure,
        }
    }
}

/// Qualitative reading of the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthTier {
    /// Below 50
    FocusOnIncome,
    /// 50 to 74
    ReviewBudget,
    /// 75 and above
    MaintainAndInvest,
}

impl HealthTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=49 => Self::FocusOnIncome,
            50..=74 => Self::ReviewBudget,
            _ => Self::MaintainAndInvest,
        }
    }

    /// Stable identifier for presentation layers
    pub const fn id(&self) -> &'static str {
        match self {
            Self::FocusOnIncome => "focus-on-income",
            Self::ReviewBudget => "review-budget",
            Self::MaintainAndInvest => "maintain-and-invest",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            Self::FocusOnIncome => "Focus on increasing income or reducing expenses",
            Self::ReviewBudget => "Review your budget and build financial goals",
            Self::MaintainAndInvest => "Maintain your habits and consider investing",
        }
    }

    pub const fn advice(&self) -> &'static [&'static str] {
        match self {
            Self::FocusOnIncome => &[
                "Focus on increasing income or significantly reducing expenses.",
                "Create and stick to a strict budget.",
            ],
            Self::ReviewBudget => &[
                "Review your budget for areas to save more.",
                "Consider setting financial goals like an emergency fund.",
            ],
            Self::MaintainAndInvest => &[
                "Keep up the great work!",
                "Explore investment opportunities to grow your wealth.",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthScoreResult {
    pub window: DateWindow,
    /// Sum of awarded points, 0-100
    pub total_score: u8,
    pub components: Vec<ScoreComponent>,
    pub tier: HealthTier,
}

impl HealthScoreResult {
    /// Look up a single factor's component
    pub fn component(&self, factor: HealthFactor) -> Option<&ScoreComponent> {
        self.components.iter().find(|c| c.factor == factor)
    }

    pub fn max_score(&self) -> u8 {
        self.components.iter().map(|c| c.max_points).sum()
    }
}

/// Score the month containing `reference`
pub fn score(
    transactions: &[Transaction],
    budgets: &BudgetMap,
    reference: NaiveDate,
) -> HealthScoreResult {
    let window = DateWindow::month_containing(reference);
    let totals = PeriodTotals::compute(transactions, window);

    let components = vec![
        savings_rate_component(&totals),
        budget_adherence_component(transactions, budgets, &window),
        income_vs_expenses_component(&totals),
        ScoreComponent::new(
            HealthFactor::DebtManagement,
            0,
            "Not tracked in this version (assumed 0 points)".to_string(),
            None,
        ),
    ];

    let total_score = components.iter().map(|c| c.points_awarded).sum();

    HealthScoreResult {
        window,
        total_score,
        components,
        tier: HealthTier::from_score(total_score),
    }
}

fn savings_rate_component(totals: &PeriodTotals) -> ScoreComponent {
    let factor = HealthFactor::SavingsRate;
    let Some(rate) = totals.savings_rate() else {
        return ScoreComponent::new(
            factor,
            0,
            "No income to calculate savings rate".to_string(),
            None,
        );
    };

    let (points, rationale) = if totals.savings_rate_at_least(20) {
        (30, format!("Excellent ({:.2}%)", rate))
    } else if totals.savings_rate_at_least(10) {
        (20, format!("Good ({:.2}%)", rate))
    } else {
        (0, format!("Low ({:.2}%) - aim for at least 10-20%", rate))
    };

    ScoreComponent::new(factor, points, rationale, Some(rate))
}

fn budget_adherence_component(
    transactions: &[Transaction],
    budgets: &BudgetMap,
    window: &DateWindow,
) -> ScoreComponent {
    let factor = HealthFactor::BudgetAdherence;
    if budgets.is_empty() {
        return ScoreComponent::new(factor, 0, "No budgets set".to_string(), None);
    }

    let spending = sum_by_category(transactions, TransactionKind::Expense, window);
    let total_budgeted: Money = budgets.values().map(|b| b.monthly_amount).sum();
    let capped_spent: Money = budgets
        .iter()
        .map(|(category, budget)| {
            let spent = spending.get(category).copied().unwrap_or_default();
            spent.min(budget.monthly_amount)
        })
        .sum();

    let Some(utilization) = capped_spent.percent_of(total_budgeted) else {
        return ScoreComponent::new(
            factor,
            0,
            "No active budgets to calculate adherence".to_string(),
            None,
        );
    };

    let at_most = |percent| {
        capped_spent.cmp_percent_of(total_budgeted, percent) != Ordering::Greater
    };
    let (points, rationale) = if at_most(80) {
        (25, format!("Excellent ({:.2}% utilized)", utilization))
    } else if at_most(100) {
        (15, format!("Good ({:.2}% utilized)", utilization))
    } else {
        (0, format!("Over budget ({:.2}% utilized) - review spending", utilization))
    };

    ScoreComponent::new(factor, points, rationale, Some(utilization))
}

fn income_vs_expenses_component(totals: &PeriodTotals) -> ScoreComponent {
    let (points, rationale) = match totals.income.cmp(&totals.expenses) {
        Ordering::Greater => (25, "Income exceeds expenses - healthy"),
        Ordering::Equal => (10, "Income equals expenses - room for improvement"),
        Ordering::Less => (0, "Expenses exceed income - caution"),
    };
    ScoreComponent::new(
        HealthFactor::IncomeVsExpenses,
        points,
        rationale.to_string(),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Category};

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    fn points(result: &HealthScoreResult, factor: HealthFactor) -> u8 {
        result.component(factor).unwrap().points_awarded
    }

    fn budgets(entries: &[(Category, i64)]) -> BudgetMap {
        entries
            .iter()
            .map(|(c, amount)| (*c, Budget::new(*c, Money::from_minor(*amount))))
            .collect()
    }

    #[test]
    fn test_thirty_percent_savings_without_budgets() {
        let txns = vec![
            Transaction::income(d(1), Category::Salary, "", Money::from_minor(100_000)),
            Transaction::expense(d(2), Category::Food, "", Money::from_minor(70_000)),
        ];
        let result = score(&txns, &BudgetMap::new(), d(15));

        assert_eq!(points(&result, HealthFactor::SavingsRate), 30);
        assert_eq!(points(&result, HealthFactor::BudgetAdherence), 0);
        assert_eq!(points(&result, HealthFactor::IncomeVsExpenses), 25);
        assert_eq!(points(&result, HealthFactor::DebtManagement), 0);
        assert_eq!(result.total_score, 55);
        assert_eq!(result.tier, HealthTier::ReviewBudget);
        assert_eq!(
            result.component(HealthFactor::SavingsRate).unwrap().measure,
            Some(30.0)
        );
        assert_eq!(result.max_score(), 100);
    }

    #[test]
    fn test_empty_ledger_scores_only_balance() {
        let result = score(&[], &BudgetMap::new(), d(1));
        assert_eq!(result.total_score, 10);
        assert_eq!(points(&result, HealthFactor::IncomeVsExpenses), 10);
        assert_eq!(result.tier, HealthTier::FocusOnIncome);
        assert!(result.components.iter().all(|c| c.points_awarded <= c.max_points));
        assert_eq!(result.component(HealthFactor::SavingsRate).unwrap().measure, None);
    }

    #[test]
    fn test_savings_rate_boundaries_are_exact() {
        let at = |expense: i64| {
            let txns = vec![
                Transaction::income(d(1), Category::Salary, "", Money::from_minor(100_000)),
                Transaction::expense(d(1), Category::Food, "", Money::from_minor(expense)),
            ];
            points(&score(&txns, &BudgetMap::new(), d(1)), HealthFactor::SavingsRate)
        };
        assert_eq!(at(80_000), 30);
        assert_eq!(at(80_001), 20);
        assert_eq!(at(90_000), 20);
        assert_eq!(at(90_001), 0);
        assert_eq!(at(150_000), 0);
    }

    #[test]
    fn test_budget_adherence_caps_each_category() {
        // Food is over budget but only counts up to its budget
        let txns = vec![
            Transaction::expense(d(3), Category::Food, "", Money::from_minor(9_000)),
            Transaction::expense(d(3), Category::Transport, "", Money::from_minor(1_000)),
        ];
        let b = budgets(&[(Category::Food, 5_000), (Category::Transport, 5_000)]);
        let result = score(&txns, &b, d(20));
        let adherence = result.component(HealthFactor::BudgetAdherence).unwrap();
        assert_eq!(adherence.measure, Some(60.0));
        assert_eq!(adherence.points_awarded, 25);
    }

    #[test]
    fn test_budget_adherence_tiers() {
        let b = budgets(&[(Category::Food, 10_000)]);
        let at = |spent: i64| {
            let txns = vec![Transaction::expense(
                d(2),
                Category::Food,
                "",
                Money::from_minor(spent),
            )];
            points(&score(&txns, &b, d(2)), HealthFactor::BudgetAdherence)
        };
        assert_eq!(at(8_000), 25);
        assert_eq!(at(8_001), 15);
        assert_eq!(at(10_000), 15);
        // Capping means a single category can never exceed 100%
        assert_eq!(at(12_000), 15);
    }

    #[test]
    fn test_zero_budget_total_is_not_applicable() {
        let b = budgets(&[(Category::Food, 0)]);
        let result = score(&[], &b, d(2));
        let adherence = result.component(HealthFactor::BudgetAdherence).unwrap();
        assert_eq!(adherence.points_awarded, 0);
        assert_eq!(adherence.measure, None);
    }

    #[test]
    fn test_only_reference_month_counts() {
        let txns = vec![
            Transaction::income(d(1), Category::Salary, "", Money::from_minor(100_000)),
            Transaction::expense(
                NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
                Category::Food,
                "",
                Money::from_minor(500_000),
            ),
        ];
        let result = score(&txns, &BudgetMap::new(), d(10));
        assert_eq!(points(&result, HealthFactor::SavingsRate), 30);
        assert_eq!(points(&result, HealthFactor::IncomeVsExpenses), 25);
    }

    #[test]
    fn test_tier_mapping() {
        assert_eq!(HealthTier::from_score(0), HealthTier::FocusOnIncome);
        assert_eq!(HealthTier::from_score(49), HealthTier::FocusOnIncome);
        assert_eq!(HealthTier::from_score(50), HealthTier::ReviewBudget);
        assert_eq!(HealthTier::from_score(74), HealthTier::ReviewBudget);
        assert_eq!(HealthTier::from_score(75), HealthTier::MaintainAndInvest);
        assert_eq!(HealthTier::from_score(100), HealthTier::MaintainAndInvest);
        assert_eq!(HealthTier::MaintainAndInvest.id(), "maintain-and-invest");
        assert_eq!(HealthTier::ReviewBudget.advice().len(), 2);
    }

    #[test]
    fn test_score_is_idempotent() {
        let txns = vec![
            Transaction::income(d(1), Category::Salary, "", Money::from_minor(50_000)),
            Transaction::expense(d(2), Category::Food, "", Money::from_minor(45_000)),
        ];
        let b = budgets(&[(Category::Food, 40_000)]);
        assert_eq!(score(&txns, &b, d(5)), score(&txns, &b, d(5)));
    }
}
