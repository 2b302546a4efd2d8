//! Goal progress
//!
//! Emergency fund and savings target goals are measured against this
//! month's savings. Debt payoff has no payment history to measure against,
//! so its progress is reported as undetermined.

use chrono::NaiveDate;
use serde::Serialize;

use super::aggregate::PeriodTotals;
use crate::models::{DateWindow, Goal, GoalMap, GoalType, Money, Transaction};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GoalProgress {
    Tracked {
        saved: Money,
        /// 0.0 to 100.0
        percent_complete: f64,
    },
    Undetermined {
        reason: &'static str,
    },
}

impl GoalProgress {
    pub fn percent_complete(&self) -> Option<f64> {
        match self {
            Self::Tracked {
                percent_complete, ..
            } => Some(*percent_complete),
            Self::Undetermined { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalStatus {
    pub goal: Goal,
    pub progress: GoalProgress,
}

/// Progress for every goal, in goal type order
pub fn goal_progress(
    goals: &GoalMap,
    transactions: &[Transaction],
    reference: NaiveDate,
) -> Vec<GoalStatus> {
    let totals = PeriodTotals::compute(transactions, DateWindow::month_containing(reference));
    let saved = totals.savings().non_negative();

    goals
        .values()
        .map(|goal| GoalStatus {
            goal: goal.clone(),
            progress: progress_for(goal, saved),
        })
        .collect()
}

fn progress_for(goal: &Goal, saved: Money) -> GoalProgress {
    match goal.goal_type {
        GoalType::EmergencyFund | GoalType::SavingsTarget => {
            let percent_complete = saved
                .percent_of(goal.target_amount)
                .map_or(0.0, |pct| pct.clamp(0.0, 100.0));
            GoalProgress::Tracked {
                saved,
                percent_complete,
            }
        }
        GoalType::DebtPayoff => GoalProgress::Undetermined {
            reason: "debt payments are not tracked",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, day).unwrap()
    }

    fn goals() -> GoalMap {
        let mut goals = GoalMap::new();
        goals.insert(
            GoalType::SavingsTarget,
            Goal::savings(GoalType::SavingsTarget, Money::from_minor(40_000), None),
        );
        goals.insert(
            GoalType::EmergencyFund,
            Goal::savings(GoalType::EmergencyFund, Money::from_minor(10_000), Some(d(30))),
        );
        goals.insert(
            GoalType::DebtPayoff,
            Goal::debt_payoff(Money::from_minor(50_000), Money::from_minor(20_000), None),
        );
        goals
    }

    #[test]
    fn test_progress_from_monthly_savings() {
        let txns = vec![
            Transaction::income(d(1), Category::Salary, "", Money::from_minor(50_000)),
            Transaction::expense(d(2), Category::Food, "", Money::from_minor(30_000)),
        ];
        let statuses = goal_progress(&goals(), &txns, d(15));
        assert_eq!(statuses.len(), 3);

        assert_eq!(statuses[0].goal.goal_type, GoalType::EmergencyFund);
        // 20000 saved against a 10000 target is capped
        assert_eq!(statuses[0].progress.percent_complete(), Some(100.0));

        assert_eq!(statuses[1].goal.goal_type, GoalType::SavingsTarget);
        assert_eq!(
            statuses[1].progress,
            GoalProgress::Tracked {
                saved: Money::from_minor(20_000),
                percent_complete: 50.0
            }
        );

        assert_eq!(statuses[2].goal.goal_type, GoalType::DebtPayoff);
        assert_eq!(statuses[2].progress.percent_complete(), None);
    }

    #[test]
    fn test_negative_savings_count_as_zero() {
        let txns = vec![Transaction::expense(d(2), Category::Food, "", Money::from_minor(30_000))];
        let statuses = goal_progress(&goals(), &txns, d(15));
        assert_eq!(statuses[1].progress.percent_complete(), Some(0.0));
    }

    #[test]
    fn test_no_goals() {
        assert!(goal_progress(&GoalMap::new(), &[], d(1)).is_empty());
    }
}
