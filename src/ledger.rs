//! Ledger boundary
//!
//! The analytics core never touches storage. Callers hand it a
//! `LedgerSnapshot`, which is validated once on construction so the core can
//! assume non-negative amounts, categories that match their transaction kind,
//! and a budget map whose keys agree with its values.

use std::fmt;

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    BudgetMap, BudgetValidationError, GoalMap, GoalType, GoalValidationError, Money, Transaction,
    TransactionValidationError,
};

/// Anything that can supply the ledger as of query time
pub trait LedgerSource {
    /// All recorded transactions
    fn transactions(&self) -> TrackerResult<Vec<Transaction>>;

    /// Category -> budget mapping
    fn budgets(&self) -> TrackerResult<BudgetMap>;

    /// Financial goals; sources without goals report none
    fn goals(&self) -> TrackerResult<GoalMap> {
        Ok(GoalMap::new())
    }

    /// Read the ledger once and validate it
    fn snapshot(&self) -> TrackerResult<LedgerSnapshot> {
        LedgerSnapshot::new(self.transactions()?, self.budgets()?)
    }
}

/// One malformed entry found while checking a ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerIssue {
    Transaction {
        /// 1-based position in recording order
        position: usize,
        transaction: Transaction,
        error: TransactionValidationError,
    },
    Budget(BudgetValidationError),
    Goal {
        goal_type: GoalType,
        error: GoalValidationError,
    },
    MisfiledGoal {
        key: GoalType,
        goal: GoalType,
    },
    /// Summing the recorded amounts leaves the supported range
    TotalOutOfRange(&'static str),
}

impl fmt::Display for LedgerIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transaction {
                position,
                transaction,
                error,
            } => write!(f, "transaction #{} ({}): {}", position, transaction, error),
            Self::Budget(error) => write!(f, "budget: {}", error),
            Self::Goal { goal_type, error } => write!(f, "goal '{}': {}", goal_type, error),
            Self::MisfiledGoal { key, goal } => {
                write!(f, "goal '{}' is filed under '{}'", goal, key)
            }
            Self::TotalOutOfRange(what) => {
                write!(f, "total of all {} exceeds the supported range", what)
            }
        }
    }
}

/// Check every entry of a ledger and report all problems in ledger order
pub fn find_issues(
    transactions: &[Transaction],
    budgets: &BudgetMap,
    goals: &GoalMap,
) -> Vec<LedgerIssue> {
    let mut issues = Vec::new();

    for (index, txn) in transactions.iter().enumerate() {
        if let Err(error) = txn.validate() {
            issues.push(LedgerIssue::Transaction {
                position: index + 1,
                transaction: txn.clone(),
                error,
            });
        }
    }
    if checked_total(transactions.iter().map(|t| t.amount)).is_none() {
        issues.push(LedgerIssue::TotalOutOfRange("transaction amounts"));
    }

    for (key, budget) in budgets {
        if *key != budget.category {
            issues.push(LedgerIssue::Budget(BudgetValidationError::KeyMismatch {
                key: *key,
                budget: budget.category,
            }));
        } else if let Err(error) = budget.validate() {
            issues.push(LedgerIssue::Budget(error));
        }
    }
    if checked_total(budgets.values().map(|b| b.monthly_amount)).is_none() {
        issues.push(LedgerIssue::TotalOutOfRange("budget amounts"));
    }

    for (key, goal) in goals {
        if *key != goal.goal_type {
            issues.push(LedgerIssue::MisfiledGoal {
                key: *key,
                goal: goal.goal_type,
            });
        } else if let Err(error) = goal.validate() {
            issues.push(LedgerIssue::Goal {
                goal_type: goal.goal_type,
                error,
            });
        }
    }

    issues
}

fn checked_total(mut amounts: impl Iterator<Item = Money>) -> Option<Money> {
    amounts.try_fold(Money::zero(), Money::checked_add)
}

/// An immutable, validated view of transactions and budgets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSnapshot {
    transactions: Vec<Transaction>,
    budgets: BudgetMap,
}

impl LedgerSnapshot {
    /// Build a snapshot, failing on the first malformed entry
    ///
    /// Amounts are bounded per entry and in total, so sums taken by the
    /// analytics core cannot overflow.
    pub fn new(transactions: Vec<Transaction>, budgets: BudgetMap) -> TrackerResult<Self> {
        if let Some(issue) = find_issues(&transactions, &budgets, &GoalMap::new())
            .into_iter()
            .next()
        {
            return Err(TrackerError::Validation(issue.to_string()));
        }

        debug!(
            transactions = transactions.len(),
            budgets = budgets.len(),
            "ledger snapshot taken"
        );

        Ok(Self {
            transactions,
            budgets,
        })
    }

    /// A snapshot with nothing recorded
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budgets(&self) -> &BudgetMap {
        &self.budgets
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.budgets.is_empty()
    }
}

impl LedgerSource for LedgerSnapshot {
    fn transactions(&self) -> TrackerResult<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }

    fn budgets(&self) -> TrackerResult<BudgetMap> {
        Ok(self.budgets.clone())
    }

    fn snapshot(&self) -> TrackerResult<LedgerSnapshot> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Category, Goal};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn test_valid_snapshot() {
        let txns = vec![
            Transaction::income(date(), Category::Salary, "Pay", Money::from_minor(100000)),
            Transaction::expense(date(), Category::Food, "Groceries", Money::from_minor(2500)),
        ];
        let mut budgets = BudgetMap::new();
        budgets.insert(Category::Food, Budget::new(Category::Food, Money::from_minor(5000)));

        let snapshot = LedgerSnapshot::new(txns, budgets).unwrap();
        assert_eq!(snapshot.transactions().len(), 2);
        assert_eq!(snapshot.budgets().len(), 1);
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let txns = vec![Transaction::expense(
            date(),
            Category::Food,
            "Refund?",
            Money::from_minor(-100),
        )];
        let err = LedgerSnapshot::new(txns, BudgetMap::new()).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("transaction #1"));
    }

    #[test]
    fn test_overflowing_total_rejected() {
        let huge = Money::parse("92233720368547758").unwrap();
        let txns = vec![
            Transaction::expense(date(), Category::Food, "", huge),
            Transaction::expense(date(), Category::Food, "", huge),
        ];
        let err = LedgerSnapshot::new(txns, BudgetMap::new()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_many_maximal_entries_overflow_total() {
        let txns = vec![
            Transaction::expense(date(), Category::Food, "", Money::MAX_ENTRY);
            92_234
        ];
        let issues = find_issues(&txns, &BudgetMap::new(), &GoalMap::new());
        assert_eq!(
            issues,
            vec![LedgerIssue::TotalOutOfRange("transaction amounts")]
        );
        assert!(LedgerSnapshot::new(txns, BudgetMap::new())
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_find_issues_reports_every_entry() {
        let txns = vec![
            Transaction::expense(date(), Category::Food, "ok", Money::from_minor(100)),
            Transaction::expense(date(), Category::Food, "", Money::from_minor(-100)),
            Transaction::income(date(), Category::Food, "", Money::from_minor(100)),
        ];
        let mut budgets = BudgetMap::new();
        budgets.insert(
            Category::Bills,
            Budget::new(Category::Bills, Money::from_minor(-1)),
        );
        let mut goals = GoalMap::new();
        goals.insert(
            GoalType::EmergencyFund,
            Goal::savings(GoalType::EmergencyFund, Money::zero(), None),
        );

        let issues = find_issues(&txns, &budgets, &goals);
        assert_eq!(issues.len(), 4);
        assert!(matches!(issues[0], LedgerIssue::Transaction { position: 2, .. }));
        assert!(matches!(issues[1], LedgerIssue::Transaction { position: 3, .. }));
        assert!(matches!(issues[2], LedgerIssue::Budget(_)));
        assert!(matches!(issues[3], LedgerIssue::Goal { .. }));
        assert!(issues[0].to_string().starts_with("transaction #2"));
    }

    #[test]
    fn test_clean_ledger_has_no_issues() {
        let txns = vec![Transaction::income(
            date(),
            Category::Salary,
            "Pay",
            Money::from_minor(100000),
        )];
        assert!(find_issues(&txns, &BudgetMap::new(), &GoalMap::new()).is_empty());
    }

    #[test]
    fn test_mismatched_budget_key_rejected() {
        let mut budgets = BudgetMap::new();
        budgets.insert(
            Category::Food,
            Budget::new(Category::Transport, Money::from_minor(5000)),
        );
        let err = LedgerSnapshot::new(Vec::new(), budgets).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_empty_snapshot_is_valid() {
        let snapshot = LedgerSnapshot::new(Vec::new(), BudgetMap::new()).unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot, LedgerSnapshot::empty());
        assert!(snapshot.goals().unwrap().is_empty());
    }
}
