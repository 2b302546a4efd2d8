//! Period-over-period comparisons
//!
//! A percentage change only exists when the previous value is positive.
//! Everything else is reported as `NoBaseline` instead of dividing by zero
//! or pretending the change was 0%.

use chrono::NaiveDate;
use serde::Serialize;

use super::aggregate::PeriodTotals;
use crate::models::{DateWindow, Money, Transaction};

/// Direction of change from the previous value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

/// Relative change between two periods
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum PercentChange {
    Percent(f64),
    /// The previous period had nothing to compare against
    NoBaseline,
}

impl PercentChange {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Percent(p) => Some(*p),
            Self::NoBaseline => None,
        }
    }

    pub fn has_baseline(&self) -> bool {
        matches!(self, Self::Percent(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodComparison {
    pub current_value: Money,
    pub previous_value: Money,
    pub absolute_delta: Money,
    pub percentage_delta: PercentChange,
    pub direction: Direction,
}

/// Compare a current value against a previous one
pub fn compare(current: Money, previous: Money) -> PeriodComparison {
    let absolute_delta = current - previous;

    let percentage_delta = match absolute_delta.percent_of(previous) {
        Some(pct) => PercentChange::Percent(pct),
        None => PercentChange::NoBaseline,
    };

    let direction = if absolute_delta.is_positive() {
        Direction::Up
    } else if absolute_delta.is_negative() {
        Direction::Down
    } else {
        Direction::Flat
    };

    PeriodComparison {
        current_value: current,
        previous_value: previous,
        absolute_delta,
        percentage_delta,
        direction,
    }
}

/// Income, expense and savings changes between two calendar months
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthOverMonth {
    pub current: PeriodTotals,
    pub previous: PeriodTotals,
    pub income: PeriodComparison,
    pub expenses: PeriodComparison,
    pub savings: PeriodComparison,
}

/// Compare the month containing `reference` with the month before it
pub fn month_over_month(transactions: &[Transaction], reference: NaiveDate) -> MonthOverMonth {
    let current_window = DateWindow::month_containing(reference);
    let current = PeriodTotals::compute(transactions, current_window);
    let previous = PeriodTotals::compute(transactions, current_window.previous_month());

    MonthOverMonth {
        income: compare(current.income, previous.income),
        expenses: compare(current.expenses, previous.expenses),
        savings: compare(current.savings(), previous.savings()),
        current,
        previous,
    }
}

/// Totals for the `months` calendar months before the reference month,
/// most recent first
pub fn savings_trend(
    transactions: &[Transaction],
    reference: NaiveDate,
    months: usize,
) -> Vec<PeriodTotals> {
    DateWindow::preceding_months(reference, months)
        .into_iter()
        .map(|window| PeriodTotals::compute(transactions, window))
        .collect()
}
