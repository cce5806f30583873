//! Monthly aggregation
//!
//! Groups a month's transactions by category and sums the amounts. Totals
//! keep categories in the order they were first seen in the transaction
//! list, so downstream output (alerts, chart slices) is stable.

use tracing::debug;

use crate::models::{Category, Money, Month, Transaction};

/// Per-category spending totals, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    entries: Vec<(Category, Money)>,
}

impl CategoryTotals {
    /// Create an empty set of totals
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an amount to a category's total
    pub fn add(&mut self, category: Category, amount: Money) {
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((category, amount)),
        }
    }

    /// Total for a category, if it has any transactions
    pub fn get(&self, category: Category) -> Option<Money> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, total)| *total)
    }

    /// Iterate over `(category, total)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum across all categories
    pub fn total(&self) -> Money {
        self.entries.iter().map(|(_, total)| *total).sum()
    }
}

impl FromIterator<(Category, Money)> for CategoryTotals {
    fn from_iter<I: IntoIterator<Item = (Category, Money)>>(iter: I) -> Self {
        let mut totals = Self::new();
        for (category, amount) in iter {
            totals.add(category, amount);
        }
        totals
    }
}

/// Sum the amounts of the transactions dated in `month`, per category
pub fn monthly_totals(transactions: &[Transaction], month: Month) -> CategoryTotals {
    let totals: CategoryTotals = transactions
        .iter()
        .filter(|txn| month.contains(txn.date))
        .map(|txn| (txn.category, txn.amount))
        .collect();

    debug!(
        "Aggregated {} categories for {} (total {})",
        totals.len(),
        month,
        totals.total()
    );

    totals
}

/// Total spending in `month` across all categories
pub fn monthly_spending(transactions: &[Transaction], month: Month) -> Money {
    transactions
        .iter()
        .filter(|txn| month.contains(txn.date))
        .map(|txn| txn.amount)
        .sum()
}

/// A category's slice of a month's spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub amount: Money,
    /// Percentage of the month's total spending
    pub percentage: f64,
}

/// Break a month's totals down into percentage shares
///
/// Shares follow the order of `totals`. When the total is zero every share
/// is reported as 0%.
pub fn category_breakdown(totals: &CategoryTotals) -> Vec<CategoryShare> {
    let total = totals.total();

    totals
        .iter()
        .map(|(category, amount)| CategoryShare {
            category,
            amount,
            percentage: amount.percent_of(total).unwrap_or(0.0),
        })
        .collect()
}
