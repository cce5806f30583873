//! Budget alert model
//!
//! Alerts are derived from the month's totals and are never persisted.

use serde::Serialize;
use std::fmt;

use super::category::Category;
use super::money::Money;

/// A category whose monthly spending exceeded its budget limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAlert {
    pub category: Category,
    pub budget_limit: Money,
    pub current_spent: Money,
    /// Always positive: `current_spent - budget_limit`
    pub overage: Money,
}

impl BudgetAlert {
    /// Build an alert if `spent` exceeds `limit`
    pub fn check(category: Category, limit: Money, spent: Money) -> Option<Self> {
        if spent > limit {
            Some(Self {
                category,
                budget_limit: limit,
                current_spent: spent,
                overage: spent - limit,
            })
        } else {
            None
        }
    }

    /// The alert text with amounts in `symbol`
    pub fn message(&self, symbol: &str) -> String {
        format!(
            "{} budget exceeded by {}! Spent {} of {} budget.",
            self.category,
            self.overage.format_with_symbol(symbol),
            self.current_spent.format_with_symbol(symbol),
            self.budget_limit.format_with_symbol(symbol)
        )
    }
}

impl fmt::Display for BudgetAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message("$"))
    }
}
