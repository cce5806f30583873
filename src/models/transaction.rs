//! Transaction model
//!
//! A transaction is an expense entered by the user. Its category is assigned
//! once, when the transaction is created, and never changes afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// A logged expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Free-text description as entered
    pub description: String,

    /// Amount spent (never negative)
    pub amount: Money,

    /// Transaction date
    pub date: NaiveDate,

    /// Category assigned at creation time
    pub category: Category,
}

impl Transaction {
    /// Create a new transaction with a fresh ID
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        category: Category,
    ) -> Self {
        Self::with_id(TransactionId::new(), description, amount, date, category)
    }

    /// Create a transaction with a known ID
    pub fn with_id(
        id: impl Into<TransactionId>,
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            amount,
            date,
            category,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    NegativeAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative, got {}", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
