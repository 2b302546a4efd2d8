//! Transaction categories
//!
//! Categories are a closed set. Names coming from the outside world (CLI
//! arguments, CSV rows, JSON files) are validated here, so everything past
//! the ledger boundary can rely on a well-formed category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::transaction::TransactionKind;

/// A spending or income category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Bills,
    Entertainment,
    Health,
    Salary,
    Freelance,
    Business,
    Investment,
    Gift,
    /// Valid for both income and expenses
    Other,
}

impl Category {
    /// Categories an expense may be filed under (also the budgetable set)
    pub const EXPENSE: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Bills,
        Category::Entertainment,
        Category::Health,
        Category::Other,
    ];

    /// Categories an income may be filed under
    pub const INCOME: [Category; 6] = [
        Category::Salary,
        Category::Freelance,
        Category::Business,
        Category::Investment,
        Category::Gift,
        Category::Other,
    ];

    /// Display name, also used for deterministic tie-breaking
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Business => "Business",
            Self::Investment => "Investment",
            Self::Gift => "Gift",
            Self::Other => "Other",
        }
    }

    /// Check if this category may be used with the given transaction kind
    pub fn allows(&self, kind: TransactionKind) -> bool {
        match kind {
            TransactionKind::Expense => Self::EXPENSE.contains(self),
            TransactionKind::Income => Self::INCOME.contains(self),
        }
    }

    /// Essential spending is left out of discretionary savings estimates
    pub fn is_essential(&self) -> bool {
        matches!(self, Self::Bills | Self::Health)
    }

    /// Iterate over every category
    pub fn all() -> impl Iterator<Item = Category> {
        Self::EXPENSE
            .into_iter()
            .chain(Self::INCOME.into_iter().filter(|c| *c != Self::Other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Case-insensitive lookup by name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CategoryParseError::Unknown(wanted.to_string()))
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryParseError::Unknown(s) => write!(f, "Unknown category: '{}'", s),
        }
    }
}

impl std::error::Error for CategoryParseError {}
