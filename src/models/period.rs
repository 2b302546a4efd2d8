//! Date windows
//!
//! Every analytics query is scoped to a half-open window `[start, end)`.
//! Month windows step by calendar month, never by a fixed number of days,
//! so short months do not drift.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open date range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Create a window, rejecting an end before the start
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodParseError> {
        if end < start {
            return Err(PeriodParseError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The window covering every representable date
    pub fn unbounded() -> Self {
        Self {
            start: NaiveDate::MIN,
            end: NaiveDate::MAX,
        }
    }

    /// The calendar month containing `date`
    pub fn month_containing(date: NaiveDate) -> Self {
        let start = first_of_month(date);
        let end = start
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    /// A calendar month by year and month number
    pub fn month(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self::month_containing)
    }

    /// A single day
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date.succ_opt().unwrap_or(NaiveDate::MAX),
        }
    }

    /// The calendar month immediately before the month this window starts in
    pub fn previous_month(&self) -> Self {
        let start = first_of_month(self.start)
            .checked_sub_months(Months::new(1))
            .unwrap_or(NaiveDate::MIN);
        Self::month_containing(start)
    }

    /// The calendar month immediately after the month this window starts in
    pub fn next_month(&self) -> Self {
        let start = first_of_month(self.start)
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX);
        Self::month_containing(start)
    }

    /// The `count` calendar months before the month containing `reference`,
    /// most recent first
    pub fn preceding_months(reference: NaiveDate, count: usize) -> Vec<Self> {
        let mut months = Vec::with_capacity(count);
        let mut cursor = Self::month_containing(reference);
        for _ in 0..count {
            cursor = cursor.previous_month();
            months.push(cursor);
        }
        months
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Exclusive end
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Check if a date falls within this window
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Number of days in the window
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Days from the start of the window through `reference` inclusive,
    /// clamped to the window length
    pub fn days_elapsed(&self, reference: NaiveDate) -> i64 {
        if reference < self.start {
            0
        } else {
            ((reference - self.start).num_days() + 1).min(self.days())
        }
    }

    /// Parse a month string ("2025-01")
    pub fn parse_month(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }

        Self::month(year, month).ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))
    }

    /// "YYYY-MM" label of the month this window starts in
    pub fn month_label(&self) -> String {
        format!("{:04}-{:02}", self.start.year(), self.start.month())
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::unbounded() {
            return write!(f, "all time");
        }
        if *self == Self::month_containing(self.start) {
            return write!(f, "{}", self.month_label());
        }
        let last = self.end - Duration::days(1);
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            last.format("%Y-%m-%d")
        )
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
            PeriodParseError::InvertedRange { start, end } => {
                write!(f, "Window end {} is before start {}", end, start)
            }
        }
    }
}

impl std::error::Error for PeriodParseError {}
