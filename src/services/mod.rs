//! Service layer for FinSmart
//!
//! The pure dashboard logic (classification, budget monitoring, goal
//! progress) and the [`Dashboard`] that ties it to the store.

pub mod budget;
pub mod classifier;
pub mod dashboard;
pub mod goal;

pub use budget::{budget_alerts, BudgetLimits};
pub use classifier::{Classifier, KeywordRule};
pub use dashboard::Dashboard;
pub use goal::{goal_progress, progress, GoalProgress};
