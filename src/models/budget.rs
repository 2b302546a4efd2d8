//! Budget model
//!
//! A monthly spending limit for a single expense category. The budget map
//! is keyed by category, so there is at most one budget per category.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::category::Category;
use super::money::Money;
use super::transaction::TransactionKind;

/// Category -> budget mapping as supplied by the ledger
pub type BudgetMap = BTreeMap<Category, Budget>;

/// A monthly budget for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub category: Category,

    /// Monthly limit in minor units
    #[serde(rename = "amount")]
    pub monthly_amount: Money,
}

impl Budget {
    /// Create a new budget
    pub fn new(category: Category, monthly_amount: Money) -> Self {
        Self {
            category,
            monthly_amount,
        }
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.monthly_amount.is_negative() {
            return Err(BudgetValidationError::NegativeAmount(self.monthly_amount));
        }

        if self.monthly_amount > Money::MAX_ENTRY {
            return Err(BudgetValidationError::TooLarge(self.monthly_amount));
        }

        if !self.category.allows(TransactionKind::Expense) {
            return Err(BudgetValidationError::NotAnExpenseCategory(self.category));
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.monthly_amount)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeAmount(Money),
    TooLarge(Money),
    NotAnExpenseCategory(Category),
    KeyMismatch { key: Category, budget: Category },
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Budget amount must not be negative (got {})", amount)
            }
            Self::TooLarge(amount) => {
                write!(f, "Budget amount {} exceeds the maximum of {}", amount, Money::MAX_ENTRY)
            }
            Self::NotAnExpenseCategory(category) => {
                write!(f, "Cannot budget '{}': not an expense category", category)
            }
            Self::KeyMismatch { key, budget } => {
                write!(f, "Budget for '{}' is filed under '{}'", budget, key)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
