//! Report CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_alerts;
use crate::error::FinsmartResult;
use crate::reports::{CategoryReport, DashboardSummary, SpendingTrend};
use crate::services::Dashboard;
use crate::storage::Store;

use super::resolve_month;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Categories that went over their monthly limit
    Alerts {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Spending by category for a month
    Categories {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Recent monthly spending and a short projection
    Trend {
        /// Last month of actual spending (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Income, expenses and totals
    Summary {
        /// Month used for the alert count (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a report command
pub fn handle_report_command<S: Store>(
    dashboard: &Dashboard<S>,
    settings: &Settings,
    cmd: ReportCommands,
) -> FinsmartResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Alerts { month } => {
            let month = resolve_month(month.as_deref())?;
            println!("Budget Alerts: {}", month.label());
            println!("{}", "-".repeat(60));
            print!("{}", format_alerts(&dashboard.alerts(month), symbol));
        }

        ReportCommands::Categories { month } => {
            let month = resolve_month(month.as_deref())?;
            let report = CategoryReport::generate(dashboard.transactions(), month, dashboard.limits());
            print!("{}", report.format_terminal(symbol));
        }

        ReportCommands::Trend { month } => {
            let month = resolve_month(month.as_deref())?;
            let trend = SpendingTrend::generate(dashboard.transactions(), month, &settings.projection);
            print!("{}", trend.format_terminal(symbol));
        }

        ReportCommands::Summary { month } => {
            let month = resolve_month(month.as_deref())?;
            let summary = DashboardSummary::generate(
                dashboard.transactions(),
                dashboard.goals(),
                &dashboard.alerts(month),
                settings.monthly_income,
                settings.account_balance,
            );
            print!("{}", summary.format_terminal(symbol));
        }
    }

    Ok(())
}
