//! Analytics report formatting
//!
//! Terminal renderings of the analytics results. Every formatter takes the
//! currency symbol from the user's settings.

use super::report::{
    format_bar, format_banner, format_change, format_optional_percentage, format_percentage,
    separator,
};
use crate::analytics::{
    Alert, AlertSubject, GoalProgress, GoalStatus, HealthScoreResult, IncomeReport, MonthlyReport,
    Opportunity, Recommendation, SavingsOpportunities, SavingsReport, Severity, SpendingReport,
};

/// Format the category spending breakdown
///
/// `top` limits the rows shown; the total always covers every category.
pub fn format_spending_report(report: &SpendingReport, top: Option<usize>, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format_banner(&format!("SPENDING REPORT ({})", report.window)));

    if report.categories.is_empty() {
        output.push_str("No expenses recorded for this period.\n");
        return output;
    }

    let rows = match top {
        Some(n) => report.top(n),
        None => &report.categories[..],
    };

    for row in rows {
        output.push_str(&format!(
            "{:<14} {:>14} {:>7} {}\n",
            row.category,
            row.total_spent.format_with_symbol(symbol),
            format_percentage(row.percentage_of_total),
            format_bar(row.percentage_of_total, 100.0, 20)
        ));
    }

    output.push_str(&separator(60));
    output.push('\n');
    output.push_str(&format!(
        "{:<14} {:>14}\n",
        "Total",
        report.total.format_with_symbol(symbol)
    ));
    if let Some(avg) = report.average_daily_expense {
        output.push_str(&format!(
            "{:<14} {:>14}\n",
            "Daily average",
            avg.format_with_symbol(symbol)
        ));
    }

    output
}

pub fn format_income_report(report: &IncomeReport, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format_banner(&format!("INCOME REPORT ({})", report.window)));

    if report.sources.is_empty() {
        output.push_str("No income recorded for this period.\n");
    } else {
        for source in &report.sources {
            output.push_str(&format!(
                "{:<14} {:>14} {:>7}\n",
                source.category,
                source.total_spent.format_with_symbol(symbol),
                format_percentage(source.percentage_of_total)
            ));
        }
        output.push_str(&separator(60));
        output.push('\n');
    }

    output.push_str(&format!(
        "{:<14} {:>14}  {}\n",
        "Total",
        report.total.format_with_symbol(symbol),
        format_change(&report.comparison)
    ));

    output
}

pub fn format_savings_report(report: &SavingsReport, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format_banner(&format!("SAVINGS ({})", report.current.window)));

    output.push_str(&format!(
        "{:<16} {:>14}\n",
        "Income",
        report.current.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<16} {:>14}\n",
        "Expenses",
        report.current.expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<16} {:>14}\n",
        "Savings",
        report.current.savings().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<16} {:>14}\n",
        "Savings rate",
        format_optional_percentage(report.savings_rate)
    ));

    if !report.trend.is_empty() {
        output.push_str("\nPrevious months:\n");
        for month in &report.trend {
            output.push_str(&format!(
                "  {:<14} {:>14} {:>8}\n",
                month.window.to_string(),
                month.savings().format_with_symbol(symbol),
                format_optional_percentage(month.savings_rate())
            ));
        }
    }

    output
}

/// Format the health score with its breakdown and advice
pub fn format_health_score(result: &HealthScoreResult) -> String {
    let mut output = String::new();
    output.push_str(&format_banner(&format!("FINANCIAL HEALTH ({})", result.window)));

    output.push_str(&format!(
        "Score: {}/{}  {}\n",
        result.total_score,
        result.max_score(),
        format_bar(result.total_score as f64, result.max_score() as f64, 20)
    ));
    output.push_str(&format!("{}\n\n", result.tier.message()));

    for component in &result.components {
        output.push_str(&format!(
            "{:<20} {:>3}/{:<3} {}\n",
            component.factor.name(),
            component.points_awarded,
            component.max_points,
            component.rationale
        ));
    }

    output.push_str("\nRecommendations:\n");
    for line in result.tier.advice() {
        output.push_str(&format!("  - {}\n", line));
    }

    output
}

/// Format the comprehensive monthly report
pub fn format_monthly_report(report: &MonthlyReport, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format_banner(&format!(
        "MONTHLY REPORT ({})",
        report.window.month_label()
    )));

    output.push_str("Summary\n");
    output.push_str(&format!(
        "  {:<16} {:>14}  {}\n",
        "Income",
        report.totals.income.format_with_symbol(symbol),
        format_change(&report.comparison.income)
    ));
    output.push_str(&format!(
        "  {:<16} {:>14}  {}\n",
        "Expenses",
        report.totals.expenses.format_with_symbol(symbol),
        format_change(&report.comparison.expenses)
    ));
    output.push_str(&format!(
        "  {:<16} {:>14}  {}\n",
        "Savings",
        report.totals.savings().format_with_symbol(symbol),
        format_change(&report.comparison.savings)
    ));
    output.push_str(&format!(
        "  {:<16} {:>14}\n",
        "Savings rate",
        format_optional_percentage(report.savings_rate)
    ));
    if let Some(avg) = report.average_daily_expense {
        output.push_str(&format!(
            "  {:<16} {:>14}\n",
            "Daily average",
            avg.format_with_symbol(symbol)
        ));
    }

    if !report.income.is_empty() {
        output.push_str("\nIncome sources\n");
        for row in &report.income {
            output.push_str(&format!(
                "  {:<16} {:>14} {:>7}\n",
                row.category,
                row.total_spent.format_with_symbol(symbol),
                format_percentage(row.percentage_of_total)
            ));
        }
    }

    if !report.expenses.is_empty() {
        output.push_str("\nExpenses by category\n");
        for row in &report.expenses {
            output.push_str(&format!(
                "  {:<16} {:>14} {:>7}\n",
                row.category,
                row.total_spent.format_with_symbol(symbol),
                format_percentage(row.percentage_of_total)
            ));
        }
    }

    output.push_str("\nBudgets\n");
    if !report.budgets_set {
        output.push_str("  No budgets set.\n");
    } else if report.over_budget.is_empty() {
        output.push_str("  All categories within budget.\n");
    } else {
        for row in &report.over_budget {
            output.push_str(&format!(
                "  {:<16} over by {}\n",
                row.category,
                (-row.remaining).format_with_symbol(symbol)
            ));
        }
    }

    output
}

/// Format the alert list, or a reassurance when nothing fired
pub fn format_alerts(alerts: &[Alert], symbol: &str) -> String {
    if alerts.is_empty() {
        return "No alerts. Spending is within limits.\n".to_string();
    }

    let mut output = String::new();
    for alert in alerts {
        let marker = match alert.severity {
            Severity::Critical => "!!",
            Severity::Warning => "! ",
        };
        let detail = match &alert.subject {
            AlertSubject::Budget { spent, budget, .. } => format!(
                " ({} of {})",
                spent.format_with_symbol(symbol),
                budget.format_with_symbol(symbol)
            ),
            AlertSubject::Transaction { .. } => String::new(),
        };
        output.push_str(&format!(
            "{} [{}] {}{}\n",
            marker,
            alert.severity.label(),
            alert.message(),
            detail
        ));
    }
    output
}

pub fn format_recommendations(recommendations: &[Recommendation]) -> String {
    if recommendations.is_empty() {
        return "No specific recommendations at this moment.\n".to_string();
    }

    recommendations
        .iter()
        .enumerate()
        .map(|(i, rec)| format!("{}. {}\n", i + 1, rec.message()))
        .collect()
}

pub fn format_opportunities(result: &SavingsOpportunities, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format_banner(&format!(
        "SAVINGS OPPORTUNITIES ({})",
        result.window
    )));

    if !result.has_spending() {
        output.push_str("No expenses recorded this month.\n");
        return output;
    }

    if result.opportunities.is_empty() {
        output.push_str("No categories stand out this month.\n");
    }
    for opportunity in &result.opportunities {
        match opportunity {
            Opportunity::OverBudget { category, excess } => output.push_str(&format!(
                "- '{}' is over budget by {}\n",
                category,
                excess.format_with_symbol(symbol)
            )),
            Opportunity::HighSpending { category, spent } => output.push_str(&format!(
                "- '{}' is a large share of spending ({})\n",
                category,
                spent.format_with_symbol(symbol)
            )),
        }
    }

    if !result.potential.is_empty() {
        output.push_str("\nCutting 10% from:\n");
        for saving in &result.potential {
            output.push_str(&format!(
                "  {:<16} saves {}\n",
                saving.category,
                saving.reduction.format_with_symbol(symbol)
            ));
        }
        output.push_str(&format!(
            "Potential monthly savings: {}\n",
            result.total_potential.format_with_symbol(symbol)
        ));
    }

    output
}

pub fn format_goal_progress(statuses: &[GoalStatus], symbol: &str) -> String {
    if statuses.is_empty() {
        return "No goals set.\n".to_string();
    }

    let mut output = String::new();
    for status in statuses {
        let goal = &status.goal;
        match &status.progress {
            GoalProgress::Tracked {
                saved,
                percent_complete,
            } => output.push_str(&format!(
                "{:<16} {} {:>6} ({} of {})\n",
                goal.goal_type,
                format_bar(*percent_complete, 100.0, 20),
                format_percentage(*percent_complete),
                saved.format_with_symbol(symbol),
                goal.target_amount.format_with_symbol(symbol)
            )),
            GoalProgress::Undetermined { reason } => output.push_str(&format!(
                "{:<16} progress unknown: {}\n",
                goal.goal_type, reason
            )),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{
        evaluate, goal_progress, income_report, monthly_report, recommend, savings_opportunities,
        savings_report, score, spending_report,
    };
    use crate::models::{
        Budget, BudgetMap, Category, DateWindow, Goal, GoalMap, GoalType, Money, Transaction,
    };
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, day).unwrap()
    }

    fn ledger() -> Vec<Transaction> {
        vec![
            Transaction::income(d(1), Category::Salary, "", Money::from_minor(100_000)),
            Transaction::expense(d(2), Category::Food, "", Money::from_minor(30_000)),
            Transaction::expense(d(3), Category::Shopping, "", Money::from_minor(10_000)),
        ]
    }

    fn budgets() -> BudgetMap {
        let mut budgets = BudgetMap::new();
        budgets.insert(Category::Food, Budget::new(Category::Food, Money::from_minor(25_000)));
        budgets
    }

    #[test]
    fn test_spending_report_top_rows() {
        let report = spending_report(&ledger(), DateWindow::month_containing(d(1)), d(10));
        let output = format_spending_report(&report, Some(1), "$");
        assert!(output.contains("SPENDING REPORT (2025-05)"));
        assert!(output.contains("Food"));
        assert!(!output.contains("Shopping"));
        assert!(output.contains("$400.00"));
        assert!(output.contains("$40.00"));
    }

    #[test]
    fn test_spending_report_empty() {
        let report = spending_report(&[], DateWindow::unbounded(), d(10));
        let output = format_spending_report(&report, None, "$");
        assert!(output.contains("all time"));
        assert!(output.contains("No expenses recorded"));
    }

    #[test]
    fn test_income_and_savings() {
        let income = format_income_report(&income_report(&ledger(), d(10)), "$");
        assert!(income.contains("Salary"));
        assert!(income.contains("no data for last month"));

        let savings = format_savings_report(&savings_report(&ledger(), d(10), 2), "$");
        assert!(savings.contains("$600.00"));
        assert!(savings.contains("60%"));
        assert!(savings.contains("2025-04"));
        assert!(savings.contains("n/a"));
    }

    #[test]
    fn test_health_score() {
        let output = format_health_score(&score(&ledger(), &budgets(), d(10)));
        assert!(output.contains("Savings Rate"));
        assert!(output.contains("Debt Management"));
        assert!(output.contains("/100"));
        assert!(output.contains("Recommendations:"));
    }

    #[test]
    fn test_monthly_report_lists_overspent() {
        let output = format_monthly_report(&monthly_report(&ledger(), &budgets(), d(10)), "$");
        assert!(output.contains("MONTHLY REPORT"));
        assert!(output.contains("over by $50.00"));

        let empty = format_monthly_report(&monthly_report(&[], &BudgetMap::new(), d(10)), "$");
        assert!(empty.contains("No budgets set."));
    }

    #[test]
    fn test_alerts() {
        let output = format_alerts(&evaluate(&ledger(), &budgets(), d(10)), "$");
        assert!(output.contains("[ALERT]"));
        assert!(output.contains("$300.00 of $250.00"));
        // Food at 30% of income is also a large expense
        assert!(output.contains("[WARNING] Large expense"));
        assert_eq!(format_alerts(&[], "$"), "No alerts. Spending is within limits.\n");
    }

    #[test]
    fn test_recommendations() {
        assert_eq!(
            format_recommendations(&[]),
            "No specific recommendations at this moment.\n"
        );
        let output = format_recommendations(&recommend(&ledger(), &budgets(), d(10)));
        assert!(output.starts_with("1. "));
        assert!(output.contains("overspending in 'Food'"));
    }

    #[test]
    fn test_opportunities() {
        let opportunities = savings_opportunities(&ledger(), &budgets(), d(10));
        let output = format_opportunities(&opportunities, "$");
        assert!(output.contains("'Food' is over budget by $50.00"));
        assert!(output.contains("Potential monthly savings: $40.00"));

        let none = format_opportunities(&savings_opportunities(&[], &budgets(), d(10)), "$");
        assert!(none.contains("No expenses recorded this month."));
    }

    #[test]
    fn test_goal_progress() {
        let mut goals = GoalMap::new();
        goals.insert(
            GoalType::SavingsTarget,
            Goal::savings(GoalType::SavingsTarget, Money::from_minor(120_000), None),
        );
        goals.insert(
            GoalType::DebtPayoff,
            Goal::debt_payoff(Money::from_minor(1_000), Money::from_minor(500), None),
        );
        let output = format_goal_progress(&goal_progress(&goals, &ledger(), d(10)), "$");
        assert!(output.contains("50%"));
        assert!(output.contains("$600.00 of $1200.00"));
        assert!(output.contains("progress unknown"));
    }
}
