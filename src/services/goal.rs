//! Goal tracker
//!
//! Computes how far each savings goal has progressed towards its target.

use crate::error::{FinsmartError, FinsmartResult};
use crate::models::Goal;

/// Completion percentage of a goal: `100 * current / target`
///
/// Not clamped: a goal that has overshot its target reports more than 100.
/// A target of zero or less has no meaningful percentage and is rejected.
pub fn progress(goal: &Goal) -> FinsmartResult<f64> {
    if !goal.target_amount.is_positive() {
        return Err(FinsmartError::invalid_goal(&goal.name, goal.target_amount));
    }

    goal.current_amount
        .percent_of(goal.target_amount)
        .ok_or_else(|| FinsmartError::invalid_goal(&goal.name, goal.target_amount))
}

/// A goal together with its computed progress
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub goal: Goal,
    pub percent: f64,
}

impl GoalProgress {
    /// Compute progress for one goal
    pub fn for_goal(goal: &Goal) -> FinsmartResult<Self> {
        Ok(Self {
            percent: progress(goal)?,
            goal: goal.clone(),
        })
    }

    /// Whether the target has been reached
    pub fn is_complete(&self) -> bool {
        self.goal.current_amount >= self.goal.target_amount
    }

    /// Percentage clamped to 0..=100 for progress bars
    pub fn bar_percent(&self) -> f64 {
        self.percent.clamp(0.0, 100.0)
    }
}

/// Progress for every goal, in list order
///
/// Fails on the first goal with a non-positive target.
pub fn goal_progress(goals: &[Goal]) -> FinsmartResult<Vec<GoalProgress>> {
    goals.iter().map(GoalProgress::for_goal).collect()
}
