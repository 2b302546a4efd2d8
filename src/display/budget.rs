//! Budget display formatting
//!
//! Formats the budget vs. spending table, the daily check and the goal list.

use super::report::{format_bar, format_optional_percentage, separator};
use crate::analytics::{BudgetStatus, DailyCheck};
use crate::models::{Goal, GoalType};

/// Format the budget table with spending for the current month
pub fn format_budget_table(rows: &[BudgetStatus], symbol: &str) -> String {
    if rows.is_empty() {
        return "No budgets set.\n\nRun 'fintrack budget set <category> <amount>' to create one.\n"
            .to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<14} {:>13} {:>13} {:>13} {:>7}  {}\n",
        "Category", "Budget", "Spent", "Remaining", "Used", "Status"
    ));
    output.push_str(&separator(76));
    output.push('\n');

    for row in rows {
        let status = if row.is_over() { "OVER" } else { "ok" };
        output.push_str(&format!(
            "{:<14} {:>13} {:>13} {:>13} {:>7}  {}\n",
            row.category,
            row.budget.format_with_symbol(symbol),
            row.spent.format_with_symbol(symbol),
            row.remaining.format_with_symbol(symbol),
            format_optional_percentage(row.utilization),
            status
        ));
    }

    output
}

/// Format budget utilization as bars, capped at the full width
pub fn format_budget_bars(rows: &[BudgetStatus]) -> String {
    let mut output = String::new();
    for row in rows {
        let used = row.utilization.unwrap_or_default();
        output.push_str(&format!(
            "{:<14} {} {}\n",
            row.category,
            format_bar(used.min(100.0), 100.0, 20),
            format_optional_percentage(row.utilization)
        ));
    }
    output
}

/// Format today's spending against the daily budget
pub fn format_daily_check(check: &DailyCheck, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Daily check for {}\n", check.date.format("%Y-%m-%d")));
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!(
        "{:<22} {:>17}\n",
        "Spent today:",
        check.spent_today.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<22} {:>17}\n",
        "Daily budget:",
        check.daily_budget.format_with_symbol(symbol)
    ));

    if check.is_within_budget() {
        output.push_str(&format!(
            "{:<22} {:>17}\n",
            "Remaining:",
            check.remaining.format_with_symbol(symbol)
        ));
        output.push_str("You are within today's budget.\n");
    } else {
        output.push_str(&format!(
            "{:<22} {:>17}\n",
            "Over by:",
            (-check.remaining).format_with_symbol(symbol)
        ));
        output.push_str("You have exceeded today's budget.\n");
    }

    output
}

/// Format the configured goals
pub fn format_goal_list(goals: &[&Goal], symbol: &str) -> String {
    if goals.is_empty() {
        return "No goals set.\n".to_string();
    }

    let mut output = String::new();
    for goal in goals {
        output.push_str(&format!(
            "{:<16} target {}",
            goal.goal_type,
            goal.target_amount.format_with_symbol(symbol)
        ));
        if goal.goal_type == GoalType::DebtPayoff {
            if let Some(debt) = goal.current_debt {
                output.push_str(&format!(", debt {}", debt.format_with_symbol(symbol)));
            }
        }
        if let Some(date) = goal.target_date {
            output.push_str(&format!(", by {}", date.format("%Y-%m-%d")));
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn row(budget: i64, spent: i64) -> BudgetStatus {
        let budget = Money::from_minor(budget);
        let spent = Money::from_minor(spent);
        BudgetStatus {
            category: Category::Food,
            budget,
            spent,
            remaining: budget - spent,
            utilization: spent.percent_of(budget),
        }
    }

    #[test]
    fn test_budget_table() {
        let output = format_budget_table(&[row(10_000, 12_000)], "$");
        assert!(output.contains("Food"));
        assert!(output.contains("-$20.00"));
        assert!(output.contains("120%"));
        assert!(output.contains("OVER"));
    }

    #[test]
    fn test_empty_budget_table() {
        assert!(format_budget_table(&[], "$").starts_with("No budgets set."));
    }

    #[test]
    fn test_zero_budget_shows_na() {
        let output = format_budget_table(&[row(0, 0)], "$");
        assert!(output.contains("n/a"));
        let bars = format_budget_bars(&[row(0, 0)]);
        assert!(bars.contains("n/a"));
    }

    #[test]
    fn test_daily_check() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
        let check = DailyCheck {
            date,
            spent_today: Money::from_minor(2_000),
            daily_budget: Money::from_minor(1_500),
            remaining: Money::from_minor(-500),
        };
        let output = format_daily_check(&check, "$");
        assert!(output.contains("2025-04-10"));
        assert!(output.contains("Over by:"));
        assert!(output.contains("$5.00"));
        assert!(output.contains("exceeded"));
    }

    #[test]
    fn test_goal_list() {
        let debt = Goal::debt_payoff(Money::from_minor(50_000), Money::from_minor(20_000), None);
        let output = format_goal_list(&[&debt], "$");
        assert_eq!(output, "Debt Payoff      target $500.00, debt $200.00\n");
        assert_eq!(format_goal_list(&[], "$"), "No goals set.\n");
    }
}
