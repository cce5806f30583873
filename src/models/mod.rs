//! Core data models for FinSmart
//!
//! This module contains the data structures of the dashboard domain:
//! transactions, categories, savings goals, and derived budget alerts.

pub mod alert;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use alert::BudgetAlert;
pub use category::Category;
pub use goal::{Goal, GoalValidationError};
pub use ids::{GoalId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use period::Month;
pub use transaction::{Transaction, TransactionValidationError};
