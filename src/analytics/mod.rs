//! Analytics core
//!
//! Pure functions over a ledger snapshot and an explicit reference date.
//! Nothing here reads the clock, touches storage, or formats output.

pub mod aggregate;
pub mod alerts;
pub mod compare;
pub mod goals;
pub mod health;
pub mod opportunities;
pub mod overview;
pub mod recommend;

pub use aggregate::{
    category_breakdown, ranked, sum_by_category, total, CategorySpendSummary, PeriodTotals,
};
pub use alerts::{evaluate, Alert, AlertSubject, Severity};
pub use compare::{
    compare, month_over_month, savings_trend, Direction, MonthOverMonth, PercentChange,
    PeriodComparison,
};
pub use goals::{goal_progress, GoalProgress, GoalStatus};
pub use health::{score, HealthFactor, HealthScoreResult, HealthTier, ScoreComponent};
pub use opportunities::{savings_opportunities, Opportunity, PotentialSaving, SavingsOpportunities};
pub use overview::{
    average_daily_expense, balance, budget_status, daily_check, income_report, monthly_report,
    savings_report, spending_report, BudgetStatus, DailyCheck, IncomeReport, MonthlyReport,
    SavingsReport, SpendingReport,
};
pub use recommend::{recommend, Recommendation, RecommendationKind};
