//! Savings goal display formatting

use crate::models::Goal;
use crate::services::GoalProgress;

use super::report::{format_bar, truncate};

const BAR_WIDTH: usize = 20;

/// Format one goal with its progress bar
///
/// The bar stops at 100%; the percentage itself is shown unclamped.
pub fn format_goal_row(goal: &Goal, symbol: &str) -> String {
    match GoalProgress::for_goal(goal) {
        Ok(progress) => {
            let marker = if progress.is_complete() { " ✓" } else { "" };
            format!(
                "{:<24} {:>12} / {:<12} {} {:.1}% complete{}",
                truncate(&goal.name, 24),
                goal.current_amount.format_with_symbol(symbol),
                goal.target_amount.format_with_symbol(symbol),
                format_bar(progress.bar_percent(), 100.0, BAR_WIDTH),
                progress.percent,
                marker
            )
        }
        Err(_) => format!(
            "{:<24} target amount must be positive, got {}",
            truncate(&goal.name, 24),
            goal.target_amount.format_with_symbol(symbol)
        ),
    }
}

/// Format a list of goals
pub fn format_goal_list(goals: &[Goal], symbol: &str) -> String {
    if goals.is_empty() {
        return "No savings goals yet.\n".to_string();
    }

    let mut output = String::new();
    for goal in goals {
        output.push_str(&format_goal_row(goal, symbol));
        output.push('\n');
    }
    output
}
