//! Savings goal CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_goal_list, format_goal_row};
use crate::error::FinsmartResult;
use crate::services::Dashboard;
use crate::storage::Store;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// Goal name (e.g., "Emergency Fund")
        name: String,
        /// Target amount (e.g., "5000")
        #[arg(allow_hyphen_values = true)]
        target: String,
        /// Amount already saved (defaults to 0)
        #[arg(short, long, allow_hyphen_values = true)]
        current: Option<String>,
    },

    /// List goals with their progress
    List,
}

/// Handle a goal command
pub fn handle_goal_command<S: Store>(
    dashboard: &mut Dashboard<S>,
    settings: &Settings,
    cmd: GoalCommands,
) -> FinsmartResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        GoalCommands::Add {
            name,
            target,
            current,
        } => {
            let goal = dashboard.add_goal(&name, &target, current.as_deref())?;
            println!("Created goal: {}", goal.name);
            println!("  {}", format_goal_row(&goal, symbol));
        }

        GoalCommands::List => {
            println!("Savings Goals:");
            println!("{}", "-".repeat(60));
            print!("{}", format_goal_list(dashboard.goals(), symbol));
        }
    }

    Ok(())
}
