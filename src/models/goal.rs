//! Financial goals
//!
//! One goal per goal type. Progress is derived by the analytics layer, the
//! model only records what the user is aiming for.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Goal type -> goal mapping
pub type GoalMap = BTreeMap<GoalType, Goal>;

/// The kinds of goal a user can set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    EmergencyFund,
    SavingsTarget,
    DebtPayoff,
}

impl GoalType {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::EmergencyFund => "Emergency Fund",
            Self::SavingsTarget => "Savings Target",
            Self::DebtPayoff => "Debt Payoff",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for GoalType {
    type Err = GoalValidationError;

    /// Accepts "emergency-fund", "emergency_fund" or "Emergency Fund"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "emergencyfund" | "emergency" => Ok(Self::EmergencyFund),
            "savingstarget" | "savings" => Ok(Self::SavingsTarget),
            "debtpayoff" | "debt" => Ok(Self::DebtPayoff),
            _ => Err(GoalValidationError::UnknownType(s.trim().to_string())),
        }
    }
}

/// A financial goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(rename = "type")]
    pub goal_type: GoalType,

    pub target_amount: Money,

    /// Outstanding debt, only meaningful for debt payoff goals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_debt: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
}

impl Goal {
    /// Create an emergency fund or savings target goal
    pub fn savings(
        goal_type: GoalType,
        target_amount: Money,
        target_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            goal_type,
            target_amount,
            current_debt: None,
            target_date,
        }
    }

    /// Create a debt payoff goal
    pub fn debt_payoff(
        target_amount: Money,
        current_debt: Money,
        target_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            goal_type: GoalType::DebtPayoff,
            target_amount,
            current_debt: Some(current_debt),
            target_date,
        }
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }

        match (self.goal_type, self.current_debt) {
            (GoalType::DebtPayoff, None) => Err(GoalValidationError::MissingDebt),
            (GoalType::DebtPayoff, Some(debt)) if debt.is_negative() => {
                Err(GoalValidationError::NegativeDebt(debt))
            }
            (GoalType::EmergencyFund | GoalType::SavingsTarget, Some(_)) => {
                Err(GoalValidationError::UnexpectedDebt(self.goal_type))
            }
            _ => Ok(()),
        }
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    NonPositiveTarget(Money),
    MissingDebt,
    NegativeDebt(Money),
    UnexpectedDebt(GoalType),
    UnknownType(String),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveTarget(amount) => {
                write!(f, "Goal target must be greater than zero (got {})", amount)
            }
            Self::MissingDebt => write!(f, "Debt payoff goals need a current debt amount"),
            Self::NegativeDebt(amount) => {
                write!(f, "Current debt must not be negative (got {})", amount)
            }
            Self::UnexpectedDebt(goal_type) => {
                write!(f, "{} goals do not track a debt amount", goal_type)
            }
            Self::UnknownType(s) => write!(
                f,
                "Unknown goal type '{}' (expected emergency-fund, savings-target or debt-payoff)",
                s
            ),
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_type_parse() {
        assert_eq!("emergency-fund".parse::<GoalType>().unwrap(), GoalType::EmergencyFund);
        assert_eq!("Savings Target".parse::<GoalType>().unwrap(), GoalType::SavingsTarget);
        assert_eq!("debt_payoff".parse::<GoalType>().unwrap(), GoalType::DebtPayoff);
        assert!("retirement".parse::<GoalType>().is_err());
    }

    #[test]
    fn test_validation() {
        let ok = Goal::savings(GoalType::EmergencyFund, Money::from_minor(500000), None);
        assert!(ok.validate().is_ok());

        let zero = Goal::savings(GoalType::SavingsTarget, Money::zero(), None);
        assert!(matches!(
            zero.validate(),
            Err(GoalValidationError::NonPositiveTarget(_))
        ));

        let mut missing = Goal::debt_payoff(Money::from_minor(100), Money::from_minor(50), None);
        missing.current_debt = None;
        assert_eq!(missing.validate(), Err(GoalValidationError::MissingDebt));

        let mut stray = Goal::savings(GoalType::EmergencyFund, Money::from_minor(100), None);
        stray.current_debt = Some(Money::from_minor(5));
        assert!(matches!(
            stray.validate(),
            Err(GoalValidationError::UnexpectedDebt(GoalType::EmergencyFund))
        ));
    }

    #[test]
    fn test_json_shape() {
        let goal = Goal::savings(
            GoalType::EmergencyFund,
            Money::from_minor(5_000_000),
            NaiveDate::from_ymd_opt(2026, 6, 30),
        );
        let json = serde_json::to_value(&goal).unwrap();
        assert_eq!(json["type"], "emergency_fund");
        assert_eq!(json["target_amount"], 5_000_000);
        assert_eq!(json["target_date"], "2026-06-30");
        assert!(json.get("current_debt").is_none());
    }
}
