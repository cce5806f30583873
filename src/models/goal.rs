//! Savings goal model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A named savings target and how much has been put towards it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: GoalId,
    pub name: String,
    pub target_amount: Money,
    /// May exceed the target
    pub current_amount: Money,
}

impl Goal {
    /// Create a new goal with a fresh ID
    pub fn new(name: impl Into<String>, target_amount: Money, current_amount: Money) -> Self {
        Self::with_id(GoalId::new(), name, target_amount, current_amount)
    }

    /// Create a goal with a known ID
    pub fn with_id(
        id: impl Into<GoalId>,
        name: impl Into<String>,
        target_amount: Money,
        current_amount: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            target_amount,
            current_amount,
        }
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }

        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }

        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrent(self.current_amount));
        }

        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} / {})",
            self.name, self.current_amount, self.target_amount
        )
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget(Money),
    NegativeCurrent(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget(amount) => {
                write!(f, "Target amount must be positive, got {}", amount)
            }
            Self::NegativeCurrent(amount) => {
                write!(f, "Current amount cannot be negative, got {}", amount)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}
