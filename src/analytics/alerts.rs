//! Spending alerts
//!
//! Two rule families run over the month containing the reference date:
//! budget utilization alerts first, then large-transaction alerts.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;

use super::aggregate::{in_window, rank_order, sum_by_category, total};
use crate::models::{BudgetMap, Category, DateWindow, Money, Transaction, TransactionKind};

/// Utilization at or above this is a warning
pub const BUDGET_WARNING_PERCENT: i64 = 80;

/// Utilization at or above this is critical
pub const BUDGET_CRITICAL_PERCENT: i64 = 100;

/// A single expense at or above this share of monthly income is "large"
pub const LARGE_TRANSACTION_PERCENT: i64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Warning,
    Critical,
}

impl Severity {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Warning => "WARNING",
            Self::Critical => "ALERT",
        }
    }
}

/// What an alert is about
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlertSubject {
    Budget {
        category: Category,
        spent: Money,
        budget: Money,
    },
    Transaction {
        date: NaiveDate,
        category: Category,
        amount: Money,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub severity: Severity,
    pub subject: AlertSubject,
    /// Spent as a percentage of budget, budget alerts only
    pub utilization: Option<f64>,
}

impl Alert {
    pub fn category(&self) -> Category {
        match &self.subject {
            AlertSubject::Budget { category, .. } | AlertSubject::Transaction { category, .. } => {
                *category
            }
        }
    }

    pub fn is_budget(&self) -> bool {
        matches!(self.subject, AlertSubject::Budget { .. })
    }

    /// Short description without currency formatting
    pub fn message(&self) -> String {
        match &self.subject {
            AlertSubject::Budget { category, .. } => {
                let pct = self.utilization.unwrap_or_default();
                match self.severity {
                    Severity::Critical => format!("'{}' is {:.0}% used!", category, pct),
                    Severity::Warning => {
                        format!("'{}' is {:.0}% used. Approaching limit!", category, pct)
                    }
                }
            }
            AlertSubject::Transaction {
                date,
                category,
                amount,
            } => format!(
                "Large expense of {} in '{}' on {}",
                amount,
                category,
                date.format("%Y-%m-%d")
            ),
        }
    }
}

/// Evaluate every alert rule for the month containing `reference`
pub fn evaluate(
    transactions: &[Transaction],
    budgets: &BudgetMap,
    reference: NaiveDate,
) -> Vec<Alert> {
    let window = DateWindow::month_containing(reference);
    let mut alerts = budget_alerts(transactions, budgets, &window);
    alerts.extend(large_transaction_alerts(transactions, &window));
    alerts
}

fn budget_alerts(
    transactions: &[Transaction],
    budgets: &BudgetMap,
    window: &DateWindow,
) -> Vec<Alert> {
    let spending = sum_by_category(transactions, TransactionKind::Expense, window);

    let mut rows: Vec<(Category, Money)> = budgets
        .keys()
        .map(|category| (*category, spending.get(category).copied().unwrap_or_default()))
        .collect();
    rows.sort_by(rank_order);

    rows.into_iter()
        .filter_map(|(category, spent)| {
            let budget = budgets.get(&category)?.monthly_amount;
            let utilization = spent.percent_of(budget)?;

            let reached = |percent| spent.cmp_percent_of(budget, percent) != Ordering::Less;
            let severity = if reached(BUDGET_CRITICAL_PERCENT) {
                Severity::Critical
            } else if reached(BUDGET_WARNING_PERCENT) {
                Severity::Warning
            } else {
                return None;
            };

            Some(Alert {
                severity,
                subject: AlertSubject::Budget {
                    category,
                    spent,
                    budget,
                },
                utilization: Some(utilization),
            })
        })
        .collect()
}

fn large_transaction_alerts(transactions: &[Transaction], window: &DateWindow) -> Vec<Alert> {
    let income = total(transactions, TransactionKind::Income, window);
    if !income.is_positive() {
        return Vec::new();
    }

    in_window(transactions, TransactionKind::Expense, window)
        .filter(|t| t.amount.cmp_percent_of(income, LARGE_TRANSACTION_PERCENT) != Ordering::Less)
        .map(|t| Alert {
            severity: Severity::Warning,
            subject: AlertSubject::Transaction {
                date: t.date,
                category: t.category,
                amount: t.amount,
            },
            utilization: None,
        })
        .collect()
}
