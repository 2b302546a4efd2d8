use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use finance_tracker::cli::{
    handle_assistant_command, handle_budget_command, handle_data_command, handle_goal_command,
    handle_report_command, handle_transaction_command, parse_date, AssistantCommands,
    BudgetCommands, DataCommands, GoalCommands, ReportCommands, TransactionCommands,
};
use finance_tracker::config::{paths::TrackerPaths, settings::Settings};
use finance_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker with budgets, health scoring and spending alerts",
    long_about = "fintrack records income and expenses, tracks monthly category budgets, \
                  and turns the ledger into spending reports, a financial health score, \
                  alerts and recommendations."
)]
struct Cli {
    /// Reference date for reports (YYYY-MM-DD), defaults to today
    #[arg(long, global = true)]
    date: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record and list transactions
    #[command(subcommand, alias = "transaction")]
    Txn(TransactionCommands),

    /// Monthly category budgets
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Financial goals
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Spending, income, savings and health reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Daily check, recommendations, alerts and opportunities
    #[command(subcommand)]
    Assistant(AssistantCommands),

    /// Export and import data
    #[command(subcommand)]
    Data(DataCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr).compact())
        .init();

    let reference: NaiveDate = match cli.date.as_deref() {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Txn(cmd)) => {
            handle_transaction_command(&storage, &settings, reference, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, reference, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, reference, cmd)?;
        }
        Some(Commands::Assistant(cmd)) => {
            handle_assistant_command(&storage, &settings, reference, cmd)?;
        }
        Some(Commands::Data(cmd)) => {
            handle_data_command(&storage, reference, cmd)?;
        }
        Some(Commands::Config) => {
            if !paths.is_initialized() {
                settings.save(&paths)?;
            }
            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {:?}", settings.currency_symbol);
            println!("  Recent transactions: {}", settings.recent_transactions_limit);
        }
        None => {
            println!("fintrack - personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
        }
    }

    Ok(())
}
