//! Smart recommendations
//!
//! Rules are independent; every one that applies contributes, in this order:
//! low savings advice, per-category advice, the missing-budgets hint, and
//! finally positive reinforcement.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;

use super::aggregate::{ranked, sum_by_category, PeriodTotals};
use crate::models::{BudgetMap, Category, DateWindow, Transaction, TransactionKind};

/// Savings rate below this triggers savings advice
pub const LOW_SAVINGS_PERCENT: i64 = 10;

/// Savings rate at or above this is considered strong
pub const STRONG_SAVINGS_PERCENT: i64 = 20;

/// Spending above this share of budget is overspending
pub const OVERSPEND_PERCENT: i64 = 110;

/// Spending above this share of budget (up to overspending) is close to the limit
pub const APPROACHING_PERCENT: i64 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    LowSavingsRate,
    BudgetRule,
    Overspending,
    ApproachingLimit,
    ConsiderBudgeting,
    NoBudgets,
    StrongPerformance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Recommendation {
    fn general(kind: RecommendationKind) -> Self {
        Self { kind, category: None }
    }

    fn for_category(kind: RecommendationKind, category: Category) -> Self {
        Self {
            kind,
            category: Some(category),
        }
    }

    pub fn message(&self) -> String {
        let category = self.category.map(|c| c.name()).unwrap_or("this category");
        match self.kind {
            RecommendationKind::LowSavingsRate => {
                "Low savings rate. Try to save at least 10-20% of your income.".to_string()
            }
            RecommendationKind::BudgetRule => "Consider the 50/30/20 rule: 50% for needs, \
                30% for wants, 20% for savings/debt."
                .to_string(),
            RecommendationKind::Overspending => format!(
                "You are overspending in '{}'. Consider reducing spending in this area.",
                category
            ),
            RecommendationKind::ApproachingLimit => format!(
                "You are close to your budget limit in '{}'. Be mindful of spending.",
                category
            ),
            RecommendationKind::ConsiderBudgeting => format!(
                "Consider setting a budget for '{}' as you have spending there.",
                category
            ),
            RecommendationKind::NoBudgets => {
                "No budgets set. Setting budgets can help you control your spending.".to_string()
            }
            RecommendationKind::StrongPerformance => "Excellent financial performance! Consider \
                increasing your savings goals or exploring investments."
                .to_string(),
        }
    }
}

/// Advice for the month containing `reference`
pub fn recommend(
    transactions: &[Transaction],
    budgets: &BudgetMap,
    reference: NaiveDate,
) -> Vec<Recommendation> {
    let window = DateWindow::month_containing(reference);
    let totals = PeriodTotals::compute(transactions, window);
    let spending = sum_by_category(transactions, TransactionKind::Expense, &window);

    let mut out = Vec::new();

    if totals.income.is_positive() && !totals.savings_rate_at_least(LOW_SAVINGS_PERCENT) {
        out.push(Recommendation::general(RecommendationKind::LowSavingsRate));
        out.push(Recommendation::general(RecommendationKind::BudgetRule));
    }

    for (category, spent) in ranked(&spending) {
        match budgets.get(&category) {
            Some(budget) if budget.monthly_amount.is_positive() => {
                let limit = budget.monthly_amount;
                if spent.cmp_percent_of(limit, OVERSPEND_PERCENT) == Ordering::Greater {
                    out.push(Recommendation::for_category(
                        RecommendationKind::Overspending,
                        category,
                    ));
                } else if spent.cmp_percent_of(limit, APPROACHING_PERCENT) == Ordering::Greater {
                    out.push(Recommendation::for_category(
                        RecommendationKind::ApproachingLimit,
                        category,
                    ));
                }
            }
            // Zero budgets are set on purpose, nothing to advise
            Some(_) => {}
            None => out.push(Recommendation::for_category(
                RecommendationKind::ConsiderBudgeting,
                category,
            )),
        }
    }

    if budgets.is_empty() {
        out.push(Recommendation::general(RecommendationKind::NoBudgets));
    }

    let within_budgets = spending.iter().all(|(category, spent)| {
        budgets
            .get(category)
            .map_or(true, |budget| *spent <= budget.monthly_amount)
    });
    if totals.savings_rate_at_least(STRONG_SAVINGS_PERCENT) && within_budgets {
        out.push(Recommendation::general(RecommendationKind::StrongPerformance));
    }

    out
}
