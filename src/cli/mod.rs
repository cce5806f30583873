//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod goal;
pub mod report;
pub mod transaction;

pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::config::settings::Settings;
use crate::display::DashboardView;
use crate::error::{FinsmartError, FinsmartResult};
use crate::models::Month;
use crate::reports::DashboardSummary;
use crate::services::Dashboard;
use crate::storage::Store;

/// Parse a `YYYY-MM` month argument, defaulting to the current month
pub fn resolve_month(month: Option<&str>) -> FinsmartResult<Month> {
    match month {
        Some(text) => text
            .parse::<Month>()
            .map_err(|e| FinsmartError::invalid_input(e.to_string())),
        None => Ok(Month::current()),
    }
}

/// Print the dashboard overview
pub fn show_dashboard<S: Store>(
    dashboard: &Dashboard<S>,
    settings: &Settings,
    month: Option<&str>,
) -> FinsmartResult<()> {
    let month = resolve_month(month)?;
    let alerts = dashboard.alerts(month);
    let summary = DashboardSummary::generate(
        dashboard.transactions(),
        dashboard.goals(),
        &alerts,
        settings.monthly_income,
        settings.account_balance,
    );

    let view = DashboardView {
        month,
        summary: &summary,
        alerts: &alerts,
        recent: dashboard.recent_transactions(settings.recent_transactions),
        goals: dashboard.goals(),
        currency_symbol: &settings.currency_symbol,
    };
    print!("{}", view.format_terminal());

    Ok(())
}
