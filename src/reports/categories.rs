//! Category breakdown report
//!
//! A month's spending split by category, with each category's share of the
//! total and how it stands against its budget limit.

use crate::display::report::{format_bar, format_percentage};
use crate::models::{Money, Month, Transaction};
use crate::services::BudgetLimits;

use super::monthly::{category_breakdown, monthly_totals, CategoryShare};

/// One row of the breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub share: CategoryShare,
    /// The category's monthly limit, if it has one
    pub limit: Option<Money>,
}

impl CategoryRow {
    pub fn is_over_budget(&self) -> bool {
        self.limit.is_some_and(|limit| self.share.amount > limit)
    }
}

/// Spending by category for one month
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    pub month: Month,
    /// Rows in the order categories first appear in the transaction list
    pub rows: Vec<CategoryRow>,
    pub total: Money,
}

impl CategoryReport {
    /// Generate the breakdown for `month`
    pub fn generate(transactions: &[Transaction], month: Month, limits: &BudgetLimits) -> Self {
        let totals = monthly_totals(transactions, month);

        let rows = category_breakdown(&totals)
            .into_iter()
            .map(|share| CategoryRow {
                limit: limits.get(share.category),
                share,
            })
            .collect();

        Self {
            month,
            rows,
            total: totals.total(),
        }
    }

    /// Format the report for terminal display, amounts in `symbol`
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Spending by Category: {}\n", self.month.label()));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No spending recorded this month.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<16} {:>12} {:>12} {:>7}  {}\n",
            "Category", "Spent", "Limit", "%", "Share"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for row in &self.rows {
            let limit = row
                .limit
                .map(|l| l.format_with_symbol(symbol))
                .unwrap_or_else(|| "-".to_string());
            let marker = if row.is_over_budget() { " !" } else { "" };

            output.push_str(&format!(
                "{:<16} {:>12} {:>12} {:>7}  {}{}\n",
                row.share.category.name(),
                row.share.amount.format_with_symbol(symbol),
                limit,
                format_percentage(row.share.percentage),
                format_bar(row.share.percentage, 100.0, 16),
                marker
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!("{:<16} {:>12}\n", "Total", self.total.format_with_symbol(symbol)));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;

    fn txn(description: &str, cents: i64, day: u32, category: Category) -> Transaction {
        Transaction::new(
            description,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            category,
        )
    }

    #[test]
    fn test_breakdown_with_limits() {
        let transactions = vec![
            txn("Pizza", 45000, 3, Category::Dining),
            txn("Gift", 5000, 2, Category::Other),
        ];
        let month = Month::new(2024, 5).unwrap();

        let report = CategoryReport::generate(&transactions, month, &BudgetLimits::default());

        assert_eq!(report.total, Money::from_dollars(500));
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].share.category, Category::Dining);
        assert_eq!(report.rows[0].share.percentage, 90.0);
        assert!(report.rows[0].is_over_budget());
        assert_eq!(report.rows[1].limit, None);
        assert!(!report.rows[1].is_over_budget());

        let output = report.format_terminal("kr ");
        assert!(output.contains("May 2024"));
        assert!(output.contains("Dining"));
        assert!(output.contains("kr 450.00"));
        assert!(output.contains("kr 500.00"));
        assert!(!output.contains('$'));
    }

    #[test]
    fn test_empty_month() {
        let report = CategoryReport::generate(
            &[],
            Month::new(2024, 5).unwrap(),
            &BudgetLimits::default(),
        );
        assert!(report.rows.is_empty());
        assert!(report.format_terminal("$").contains("No spending recorded"));
    }
}
