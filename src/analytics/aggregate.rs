//! Category and period aggregation
//!
//! Every other analytics module builds on these sums. Amounts are added as
//! integers; percentages are only produced at the very end for display.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Category, DateWindow, Money, Transaction, TransactionKind};

/// Transactions of one kind that fall inside a window
pub fn in_window<'a>(
    transactions: &'a [Transaction],
    kind: TransactionKind,
    window: &'a DateWindow,
) -> impl Iterator<Item = &'a Transaction> + 'a {
    transactions
        .iter()
        .filter(move |t| t.kind == kind && window.contains(t.date))
}

/// Sum of matching amounts per category; zero sums are left out
pub fn sum_by_category(
    transactions: &[Transaction],
    kind: TransactionKind,
    window: &DateWindow,
) -> BTreeMap<Category, Money> {
    let mut sums: BTreeMap<Category, Money> = BTreeMap::new();
    for txn in in_window(transactions, kind, window) {
        *sums.entry(txn.category).or_default() += txn.amount;
    }
    sums.retain(|_, amount| !amount.is_zero());
    sums
}

/// Sum of all matching amounts
pub fn total(transactions: &[Transaction], kind: TransactionKind, window: &DateWindow) -> Money {
    in_window(transactions, kind, window).map(|t| t.amount).sum()
}

/// Order two (category, amount) pairs: larger amount first, then name
pub fn rank_order(a: &(Category, Money), b: &(Category, Money)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.name().cmp(b.0.name()))
}

/// Sums sorted by amount descending, ties broken by category name
pub fn ranked(sums: &BTreeMap<Category, Money>) -> Vec<(Category, Money)> {
    let mut rows: Vec<_> = sums.iter().map(|(c, m)| (*c, *m)).collect();
    rows.sort_by(rank_order);
    rows
}

/// One category's share of a total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpendSummary {
    pub category: Category,
    pub total_spent: Money,
    /// Share of the window total, 0.0 when the total is zero
    pub percentage_of_total: f64,
}

/// Ranked per-category breakdown of one kind of transaction
pub fn category_breakdown(
    transactions: &[Transaction],
    kind: TransactionKind,
    window: &DateWindow,
) -> Vec<CategorySpendSummary> {
    let sums = sum_by_category(transactions, kind, window);
    let grand_total: Money = sums.values().sum();

    ranked(&sums)
        .into_iter()
        .map(|(category, total_spent)| CategorySpendSummary {
            category,
            total_spent,
            percentage_of_total: total_spent.percent_of(grand_total).unwrap_or(0.0),
        })
        .collect()
}

/// Income and expense totals for a single window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodTotals {
    pub window: DateWindow,
    pub income: Money,
    pub expenses: Money,
}

impl PeriodTotals {
    /// Compute income and expense totals for a window
    pub fn compute(transactions: &[Transaction], window: DateWindow) -> Self {
        Self {
            window,
            income: total(transactions, TransactionKind::Income, &window),
            expenses: total(transactions, TransactionKind::Expense, &window),
        }
    }

    /// Income minus expenses; negative when overspent
    pub fn savings(&self) -> Money {
        self.income - self.expenses
    }

    /// Savings as a percentage of income, `None` without income
    pub fn savings_rate(&self) -> Option<f64> {
        self.savings().percent_of(self.income)
    }

    /// Exact check that the savings rate is at least `percent`%.
    /// Always false without income.
    pub fn savings_rate_at_least(&self, percent: i64) -> bool {
        self.income.is_positive()
            && self.savings().cmp_percent_of(self.income, percent) != Ordering::Less
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    fn april() -> DateWindow {
        DateWindow::month(2025, 4).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::expense(d(1), Category::Food, "", Money::from_minor(3000)),
            Transaction::expense(d(2), Category::Transport, "", Money::from_minor(3000)),
            Transaction::expense(d(3), Category::Food, "", Money::from_minor(1000)),
            Transaction::expense(d(4), Category::Bills, "", Money::from_minor(9000)),
            Transaction::expense(d(5), Category::Health, "", Money::zero()),
            Transaction::income(d(1), Category::Salary, "", Money::from_minor(50000)),
            // Outside the window
            Transaction::expense(
                NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
                Category::Food,
                "",
                Money::from_minor(99999),
            ),
        ]
    }

    #[test]
    fn test_sum_by_category() {
        let sums = sum_by_category(&sample(), TransactionKind::Expense, &april());
        assert_eq!(sums.get(&Category::Food), Some(&Money::from_minor(4000)));
        assert_eq!(sums.get(&Category::Transport), Some(&Money::from_minor(3000)));
        assert_eq!(sums.get(&Category::Bills), Some(&Money::from_minor(9000)));
        // Zero-valued entries are omitted
        assert!(!sums.contains_key(&Category::Health));
        assert_eq!(sums.len(), 3);
    }

    #[test]
    fn test_total_matches_category_sums() {
        let txns = sample();
        for kind in [TransactionKind::Income, TransactionKind::Expense] {
            for window in [april(), DateWindow::unbounded(), april().next_month()] {
                let by_category: Money = sum_by_category(&txns, kind, &window).values().sum();
                assert_eq!(total(&txns, kind, &window), by_category);
            }
        }
    }

    #[test]
    fn test_ranked_breaks_ties_by_name() {
        let mut sums = BTreeMap::new();
        sums.insert(Category::Transport, Money::from_minor(3000));
        sums.insert(Category::Food, Money::from_minor(3000));
        sums.insert(Category::Bills, Money::from_minor(9000));
        sums.insert(Category::Entertainment, Money::from_minor(3000));

        let order: Vec<_> = ranked(&sums).into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            vec![
                Category::Bills,
                Category::Entertainment,
                Category::Food,
                Category::Transport
            ]
        );
    }

    #[test]
    fn test_category_breakdown_percentages() {
        let breakdown = category_breakdown(&sample(), TransactionKind::Expense, &april());
        assert_eq!(breakdown.len(), 3);
        assert_eq!(breakdown[0].category, Category::Bills);
        assert_eq!(breakdown[0].percentage_of_total, 56.25);
        let sum: f64 = breakdown.iter().map(|b| b.percentage_of_total).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_inputs() {
        let empty: Vec<Transaction> = Vec::new();
        assert!(sum_by_category(&empty, TransactionKind::Expense, &april()).is_empty());
        assert_eq!(total(&empty, TransactionKind::Income, &april()), Money::zero());
        assert!(category_breakdown(&empty, TransactionKind::Expense, &april()).is_empty());

        let totals = PeriodTotals::compute(&empty, april());
        assert_eq!(totals.savings(), Money::zero());
        assert_eq!(totals.savings_rate(), None);
        assert!(!totals.savings_rate_at_least(0));
    }

    #[test]
    fn test_period_totals() {
        let totals = PeriodTotals::compute(&sample(), april());
        assert_eq!(totals.income.minor(), 50000);
        assert_eq!(totals.expenses.minor(), 16000);
        assert_eq!(totals.savings().minor(), 34000);
        assert_eq!(totals.savings_rate(), Some(68.0));
        assert!(totals.savings_rate_at_least(68));
        assert!(!totals.savings_rate_at_least(69));
    }
}
