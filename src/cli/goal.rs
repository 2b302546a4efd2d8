//! Goal CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_date, parse_goal_type};
use crate::config::settings::Settings;
use crate::display::budget::format_goal_list;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Goal, GoalType};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Set or replace a goal
    Set {
        /// "emergency-fund", "savings-target" or "debt-payoff"
        goal_type: String,
        /// Target amount
        target: String,
        /// Outstanding debt (debt payoff only)
        #[arg(long)]
        debt: Option<String>,
        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        by: Option<String>,
    },

    /// List configured goals
    List,

    /// Remove a goal
    Remove {
        /// Goal type
        goal_type: String,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let service = LedgerService::new(storage);

    match cmd {
        GoalCommands::Set {
            goal_type,
            target,
            debt,
            by,
        } => {
            let goal_type = parse_goal_type(&goal_type)?;
            let target = parse_amount(&target)?;
            let target_date = by.as_deref().map(parse_date).transpose()?;

            let goal = match goal_type {
                GoalType::DebtPayoff => {
                    let debt = debt.ok_or_else(|| {
                        TrackerError::Validation(
                            "Debt payoff goals need the outstanding debt (--debt)".into(),
                        )
                    })?;
                    Goal::debt_payoff(target, parse_amount(&debt)?, target_date)
                }
                _ => Goal::savings(goal_type, target, target_date),
            };

            let goal = service.set_goal(goal)?;
            println!(
                "{} goal set to {}",
                goal.goal_type,
                goal.target_amount.format_with_symbol(symbol)
            );
        }

        GoalCommands::List => {
            let goals = storage.goals.get_all()?;
            let goals: Vec<&Goal> = goals.values().collect();
            print!("{}", format_goal_list(&goals, symbol));
        }

        GoalCommands::Remove { goal_type } => {
            let goal_type = parse_goal_type(&goal_type)?;
            let removed = service.remove_goal(goal_type)?;
            println!("Removed {} goal", removed.goal_type);
        }
    }

    Ok(())
}
