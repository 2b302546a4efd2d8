//! Transaction model
//!
//! A transaction is an immutable income or expense fact. The amount is always
//! a non-negative count of minor units; the kind carries the direction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => f.pad("Income"),
            Self::Expense => f.pad("Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = TransactionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(TransactionValidationError::UnknownKind(other.to_string())),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    pub category: Category,

    #[serde(default)]
    pub description: String,

    /// Amount in minor units, never negative
    pub amount: Money,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        category: Category,
        description: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            date,
            kind,
            category,
            description: description.into(),
            amount,
        }
    }

    /// Create an income transaction
    pub fn income(
        date: NaiveDate,
        category: Category,
        description: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self::new(date, TransactionKind::Income, category, description, amount)
    }

    /// Create an expense transaction
    pub fn expense(
        date: NaiveDate,
        category: Category,
        description: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self::new(date, TransactionKind::Expense, category, description, amount)
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        if self.amount > Money::MAX_ENTRY {
            return Err(TransactionValidationError::TooLarge(self.amount));
        }

        if !self.category.allows(self.kind) {
            return Err(TransactionValidationError::CategoryKindMismatch {
                category: self.category,
                kind: self.kind,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    TooLarge(Money),
    CategoryKindMismatch {
        category: Category,
        kind: TransactionKind,
    },
    UnknownKind(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Transaction amount must not be negative (got {})", amount)
            }
            Self::TooLarge(amount) => write!(
                f,
                "Transaction amount {} exceeds the maximum of {}",
                amount,
                Money::MAX_ENTRY
            ),
            Self::CategoryKindMismatch { category, kind } => {
                write!(f, "Category '{}' cannot be used for {} transactions", category, kind)
            }
            Self::UnknownKind(kind) => {
                write!(f, "Unknown transaction type '{}' (expected income or expense)", kind)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
