//! Savings opportunities
//!
//! Looks at the current month's spending for categories that are over budget
//! or take an outsized share of the total, then estimates what trimming the
//! two largest non-essential categories would save.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;

use super::aggregate::{ranked, sum_by_category};
use crate::models::{BudgetMap, Category, DateWindow, Money, Transaction, TransactionKind};

/// A category above this share of monthly spending is "high spending"
pub const HIGH_SPENDING_PERCENT: i64 = 15;

/// Suggested cut for each potential-savings category
pub const SUGGESTED_REDUCTION_PERCENT: i64 = 10;

/// How many non-essential categories feed the estimate
const POTENTIAL_CATEGORIES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Opportunity {
    OverBudget { category: Category, excess: Money },
    HighSpending { category: Category, spent: Money },
}

impl Opportunity {
    pub fn category(&self) -> Category {
        match self {
            Self::OverBudget { category, .. } | Self::HighSpending { category, .. } => *category,
        }
    }
}

/// Estimated saving from trimming one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PotentialSaving {
    pub category: Category,
    pub spent: Money,
    pub reduction: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavingsOpportunities {
    pub window: DateWindow,
    pub total_spending: Money,
    pub opportunities: Vec<Opportunity>,
    pub potential: Vec<PotentialSaving>,
    pub total_potential: Money,
}

impl SavingsOpportunities {
    /// Nothing was spent in the window
    pub fn has_spending(&self) -> bool {
        !self.total_spending.is_zero()
    }
}

pub fn savings_opportunities(
    transactions: &[Transaction],
    budgets: &BudgetMap,
    reference: NaiveDate,
) -> SavingsOpportunities {
    let window = DateWindow::month_containing(reference);
    let spending = ranked(&sum_by_category(transactions, TransactionKind::Expense, &window));
    let total_spending: Money = spending.iter().map(|(_, spent)| *spent).sum();

    let opportunities = spending
        .iter()
        .filter_map(|&(category, spent)| {
            let over = budgets
                .get(&category)
                .map(|b| b.monthly_amount)
                .filter(|limit| limit.is_positive() && spent > *limit);
            match over {
                Some(limit) => Some(Opportunity::OverBudget {
                    category,
                    excess: spent - limit,
                }),
                None if spent.cmp_percent_of(total_spending, HIGH_SPENDING_PERCENT)
                    == Ordering::Greater =>
                {
                    Some(Opportunity::HighSpending { category, spent })
                }
                None => None,
            }
        })
        .collect();

    let potential: Vec<PotentialSaving> = spending
        .iter()
        .filter(|(category, _)| !category.is_essential())
        .take(POTENTIAL_CATEGORIES)
        .map(|&(category, spent)| PotentialSaving {
            category,
            spent,
            reduction: spent.percentage(SUGGESTED_REDUCTION_PERCENT),
        })
        .collect();
    let total_potential = potential.iter().map(|p| p.reduction).sum();

    SavingsOpportunities {
        window,
        total_spending,
        opportunities,
        potential,
        total_potential,
    }
}
