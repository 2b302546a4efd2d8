//! Ledger service
//!
//! Recording side of the tracker: transactions, budgets and goals are
//! validated here before they reach storage.

use chrono::{Days, NaiveDate};
use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, Category, Goal, GoalType, Money, Transaction, TransactionKind};
use crate::storage::Storage;

/// Options for filtering listed transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Only income or only expenses
    pub kind: Option<TransactionKind>,
    /// Earliest date to include
    pub start_date: Option<NaiveDate>,
    /// Latest date to include
    pub end_date: Option<NaiveDate>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by direction
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by inclusive date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// The `days` days ending on `reference`, inclusive
    pub fn last_days(self, reference: NaiveDate, days: u32) -> Self {
        let start = reference
            .checked_sub_days(Days::new(u64::from(days.saturating_sub(1))))
            .unwrap_or(NaiveDate::MIN);
        self.date_range(start, reference)
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |kind| txn.kind == kind)
            && self.start_date.map_or(true, |start| txn.date >= start)
            && self.end_date.map_or(true, |end| txn.date <= end)
    }
}

/// Service for recording ledger entries
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a transaction
    pub fn add_transaction(&self, txn: Transaction) -> TrackerResult<Transaction> {
        txn.validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.transactions.insert(txn.clone())?;
        self.storage.transactions.save()?;

        info!(
            date = %txn.date,
            kind = %txn.kind,
            category = %txn.category,
            amount = txn.amount.minor(),
            "transaction recorded"
        );
        Ok(txn)
    }

    /// Record a batch of transactions; one bad entry rejects the batch
    pub fn import_transactions(&self, txns: Vec<Transaction>) -> TrackerResult<usize> {
        for txn in &txns {
            txn.validate()
                .map_err(|e| TrackerError::Validation(format!("{}: {}", txn, e)))?;
        }

        let added = self.storage.transactions.extend(txns)?;
        self.storage.transactions.save()?;

        info!(count = added, "transactions imported");
        Ok(added)
    }

    /// Transactions matching `filter`, newest first
    pub fn list_transactions(&self, filter: &TransactionFilter) -> TrackerResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions.newest_first()?;
        transactions.retain(|t| filter.matches(t));
        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }
        Ok(transactions)
    }

    /// Set or replace a category's monthly budget
    pub fn set_budget(&self, category: Category, amount: Money) -> TrackerResult<Budget> {
        let budget = Budget::new(category, amount);
        budget
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let previous = self.storage.budgets.upsert(budget)?;
        self.storage.budgets.save()?;

        match previous {
            Some(old) => info!(
                category = %category,
                from = old.monthly_amount.minor(),
                to = amount.minor(),
                "budget updated"
            ),
            None => info!(category = %category, amount = amount.minor(), "budget set"),
        }
        Ok(budget)
    }

    /// Remove a category's budget
    pub fn remove_budget(&self, category: Category) -> TrackerResult<Budget> {
        let removed = self
            .storage
            .budgets
            .delete(category)?
            .ok_or_else(|| TrackerError::budget_not_found(category.name()))?;
        self.storage.budgets.save()?;

        info!(category = %category, "budget removed");
        Ok(removed)
    }

    /// Set or replace the goal of its type
    pub fn set_goal(&self, goal: Goal) -> TrackerResult<Goal> {
        goal.validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        info!(goal = %goal.goal_type, target = goal.target_amount.minor(), "goal set");
        Ok(goal)
    }

    pub fn remove_goal(&self, goal_type: GoalType) -> TrackerResult<Goal> {
        let removed = self
            .storage
            .goals
            .delete(goal_type)?
            .ok_or_else(|| TrackerError::goal_not_found(goal_type.name()))?;
        self.storage.goals.save()?;

        info!(goal = %goal_type, "goal removed");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_add_transaction_persists() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        service
            .add_transaction(Transaction::expense(
                date(),
                Category::Food,
                "Lunch",
                Money::from_minor(450),
            ))
            .unwrap();

        assert!(storage.paths().transactions_file().exists());
        let listed = service
            .list_transactions(&TransactionFilter::new().limit(10))
            .unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[test]
    fn test_list_transactions_filters_kind_and_days() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);
        let day = |d| NaiveDate::from_ymd_opt(2025, 6, d).unwrap();

        for txn in [
            Transaction::income(day(1), Category::Salary, "Pay", Money::from_minor(100000)),
            Transaction::expense(day(3), Category::Food, "Old", Money::from_minor(500)),
            Transaction::expense(day(4), Category::Food, "Edge", Money::from_minor(600)),
            Transaction::expense(day(10), Category::Bills, "New", Money::from_minor(700)),
            Transaction::expense(day(11), Category::Bills, "Future", Money::from_minor(800)),
        ] {
            service.add_transaction(txn).unwrap();
        }

        let expenses = service
            .list_transactions(&TransactionFilter::new().kind(TransactionKind::Expense))
            .unwrap();
        assert_eq!(expenses.len(), 4);
        assert_eq!(expenses[0].description, "Future");

        let income = service
            .list_transactions(&TransactionFilter::new().kind(TransactionKind::Income))
            .unwrap();
        assert_eq!(income.len(), 1);

        // Seven days ending on the 10th start on the 4th
        let recent = service
            .list_transactions(&TransactionFilter::new().last_days(day(10), 7))
            .unwrap();
        let descriptions: Vec<_> = recent.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["New", "Edge"]);

        let limited = service
            .list_transactions(
                &TransactionFilter::new()
                    .kind(TransactionKind::Expense)
                    .last_days(day(10), 30)
                    .limit(1),
            )
            .unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].description, "New");
    }

    #[test]
    fn test_add_transaction_rejects_mismatched_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let err = service
            .add_transaction(Transaction::income(
                date(),
                Category::Food,
                "",
                Money::from_minor(450),
            ))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_budget_lifecycle() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        service.set_budget(Category::Food, Money::from_minor(5000)).unwrap();
        service.set_budget(Category::Food, Money::from_minor(6000)).unwrap();
        assert_eq!(
            storage.budgets.get(Category::Food).unwrap().unwrap().monthly_amount.minor(),
            6000
        );

        assert!(service
            .set_budget(Category::Salary, Money::from_minor(1))
            .unwrap_err()
            .is_validation());

        service.remove_budget(Category::Food).unwrap();
        assert!(service.remove_budget(Category::Food).unwrap_err().is_not_found());
    }

    #[test]
    fn test_goal_lifecycle() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let bad = Goal::savings(GoalType::EmergencyFund, Money::zero(), None);
        assert!(service.set_goal(bad).unwrap_err().is_validation());

        service
            .set_goal(Goal::debt_payoff(
                Money::from_minor(1000),
                Money::from_minor(5000),
                None,
            ))
            .unwrap();
        assert_eq!(storage.goals.get_all().unwrap().len(), 1);

        service.remove_goal(GoalType::DebtPayoff).unwrap();
        assert!(service.remove_goal(GoalType::DebtPayoff).unwrap_err().is_not_found());
    }

    #[test]
    fn test_import_rejects_whole_batch_on_bad_entry() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let batch = vec![
            Transaction::expense(date(), Category::Food, "", Money::from_minor(1)),
            Transaction::expense(date(), Category::Food, "", Money::from_minor(-1)),
        ];
        assert!(service.import_transactions(batch).is_err());
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }
}
