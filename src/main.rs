use anyhow::Result;
use clap::{Parser, Subcommand};

use finsmart::cli::{
    handle_goal_command, handle_report_command, handle_transaction_command, show_dashboard,
    GoalCommands, ReportCommands, TransactionCommands,
};
use finsmart::config::{paths::FinsmartPaths, settings::Settings};
use finsmart::logging;
use finsmart::services::Dashboard;
use finsmart::storage::JsonFileStore;

#[derive(Parser)]
#[command(
    name = "finsmart",
    version,
    about = "Personal finance dashboard",
    long_about = "FinSmart tracks your spending and savings goals from the terminal. \
                  Expenses are filed under a category automatically, monthly \
                  spending is checked against your budget, and every goal shows \
                  how close you are to reaching it."
)]
struct Cli {
    /// Show debug logging (overridden by FINSMART_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard overview (the default)
    Dashboard {
        /// Month for budget alerts (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Write the default configuration and seed the sample data
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Initialize paths and settings
    let paths = FinsmartPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let open_dashboard = || {
        Dashboard::open(
            JsonFileStore::from_paths(&paths),
            settings.keyword_rules.clone(),
            settings.budget_limits.clone(),
        )
    };

    match cli.command {
        None => {
            show_dashboard(&open_dashboard(), &settings, None)?;
        }
        Some(Commands::Dashboard { month }) => {
            show_dashboard(&open_dashboard(), &settings, month.as_deref())?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut open_dashboard(), &settings, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&mut open_dashboard(), &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&open_dashboard(), &settings, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing FinSmart at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            if !paths.is_initialized() {
                settings.save(&paths)?;
            }
            let dashboard = open_dashboard();
            println!("Initialization complete!");
            println!();
            println!(
                "{} transactions and {} goals are on record.",
                dashboard.transactions().len(),
                dashboard.goals().len()
            );
            println!(
                "Edit {} to change income, keywords and budget limits.",
                paths.settings_file().display()
            );
        }
        Some(Commands::Config) => {
            println!("FinSmart Configuration");
            println!("======================");
            println!("Config file:      {}", paths.settings_file().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            let symbol = settings.currency_symbol.as_str();
            println!("  Currency:        {}", symbol);
            println!(
                "  Monthly income:  {}",
                settings.monthly_income.format_with_symbol(symbol)
            );
            println!(
                "  Account balance: {}",
                settings.account_balance.format_with_symbol(symbol)
            );
            println!("  Keyword rules:   {}", settings.keyword_rules.rules().len());
            println!("  Budget limits:");
            for (category, limit) in settings.budget_limits.iter() {
                println!("    {:<16} {}", category.name(), limit.format_with_symbol(symbol));
            }
            println!(
                "  Projection:      {} months history, {} months ahead, {:.0}% per month",
                settings.projection.history_months,
                settings.projection.horizon_months,
                settings.projection.monthly_growth * 100.0
            );
        }
    }

    Ok(())
}
