//! Smart assistant CLI commands
//!
//! Daily check, recommendations, alerts, savings opportunities and goal
//! progress for the reference month.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::analytics::{
    format_alerts, format_goal_progress, format_opportunities, format_recommendations,
};
use crate::display::budget::format_daily_check;
use crate::error::TrackerResult;
use crate::services::AnalyticsService;
use crate::storage::Storage;

/// Assistant subcommands
#[derive(Subcommand, Debug)]
pub enum AssistantCommands {
    /// Today's spending against the daily budget
    Daily,
    /// Personalized recommendations
    Recommend,
    /// Budget and large expense alerts
    Alerts,
    /// Where spending could be trimmed
    Opportunities,
    /// Progress toward goals
    Goals,
}

pub fn handle_assistant_command(
    storage: &Storage,
    settings: &Settings,
    reference: NaiveDate,
    cmd: AssistantCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let service = AnalyticsService::new(storage);

    match cmd {
        AssistantCommands::Daily => {
            print!("{}", format_daily_check(&service.daily_check(reference)?, symbol));
        }
        AssistantCommands::Recommend => {
            println!("Recommendations");
            println!("{}", "=".repeat(40));
            print!("{}", format_recommendations(&service.recommendations(reference)?));
        }
        AssistantCommands::Alerts => {
            println!("Alerts");
            println!("{}", "=".repeat(40));
            print!("{}", format_alerts(&service.alerts(reference)?, symbol));
        }
        AssistantCommands::Opportunities => {
            print!("{}", format_opportunities(&service.opportunities(reference)?, symbol));
        }
        AssistantCommands::Goals => {
            println!("Goal progress");
            println!("{}", "=".repeat(40));
            print!("{}", format_goal_progress(&service.goals(reference)?, symbol));
        }
    }

    Ok(())
}
