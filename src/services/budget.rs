//! Budget monitor
//!
//! Compares a month's category totals with the per-category limits and
//! reports every category that went over.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{FinsmartError, FinsmartResult};
use crate::models::{BudgetAlert, Category, Money};
use crate::reports::CategoryTotals;

/// Stock monthly limits, in whole dollars. `Other` has no limit.
const DEFAULT_LIMITS: &[(Category, i64)] = &[
    (Category::Groceries, 600),
    (Category::Transportation, 300),
    (Category::Dining, 400),
    (Category::Utilities, 200),
    (Category::Bills, 150),
    (Category::Entertainment, 250),
    (Category::Healthcare, 100),
    (Category::Shopping, 500),
];

/// Monthly spending ceilings per category
///
/// Categories without an entry never alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Category, Money>",
    into = "BTreeMap<Category, Money>"
)]
pub struct BudgetLimits {
    limits: BTreeMap<Category, Money>,
}

impl BudgetLimits {
    /// Build limits from `(category, limit)` pairs; limits may not be negative
    pub fn new(limits: impl IntoIterator<Item = (Category, Money)>) -> FinsmartResult<Self> {
        Self::try_from(limits.into_iter().collect::<BTreeMap<_, _>>())
    }

    /// An empty table (nothing ever alerts)
    pub fn none() -> Self {
        Self {
            limits: BTreeMap::new(),
        }
    }

    /// Limit for a category
    pub fn get(&self, category: Category) -> Option<Money> {
        self.limits.get(&category).copied()
    }

    /// Iterate over `(category, limit)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.limits.iter().map(|(c, m)| (*c, *m))
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

impl Default for BudgetLimits {
    fn default() -> Self {
        Self {
            limits: DEFAULT_LIMITS
                .iter()
                .map(|(category, dollars)| (*category, Money::from_dollars(*dollars)))
                .collect(),
        }
    }
}

impl TryFrom<BTreeMap<Category, Money>> for BudgetLimits {
    type Error = FinsmartError;

    fn try_from(limits: BTreeMap<Category, Money>) -> Result<Self, Self::Error> {
        if let Some((category, limit)) = limits.iter().find(|(_, limit)| limit.is_negative()) {
            return Err(FinsmartError::Config(format!(
                "Budget limit for {} cannot be negative: {}",
                category, limit
            )));
        }
        Ok(Self { limits })
    }
}

impl From<BudgetLimits> for BTreeMap<Category, Money> {
    fn from(limits: BudgetLimits) -> Self {
        limits.limits
    }
}

/// Emit an alert for every category whose total exceeds its limit
///
/// Alerts follow the order of `totals`; every alert has a positive overage.
pub fn budget_alerts(totals: &CategoryTotals, limits: &BudgetLimits) -> Vec<BudgetAlert> {
    let alerts: Vec<BudgetAlert> = totals
        .iter()
        .filter_map(|(category, spent)| {
            let limit = limits.get(category)?;
            BudgetAlert::check(category, limit, spent)
        })
        .collect();

    if alerts.is_empty() {
        debug!("No categories over budget");
    } else {
        for alert in &alerts {
            info!(
                "{} over budget by {} ({} of {})",
                alert.category, alert.overage, alert.current_spent, alert.budget_limit
            );
        }
    }

    alerts
}
