//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod dashboard;
pub mod goal;
pub mod report;
pub mod transaction;

pub use dashboard::{format_alerts, DashboardView};
pub use goal::{format_goal_list, format_goal_row};
pub use transaction::{format_transaction_register, format_transaction_row};
