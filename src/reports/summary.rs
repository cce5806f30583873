//! Dashboard summary
//!
//! The headline figures: income, balance, expenses and what is left over,
//! plus a few counts for the quick-stats panel.

use crate::models::{BudgetAlert, Goal, Money, Transaction};

/// Headline figures for the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    /// Configured monthly income
    pub monthly_income: Money,
    /// Configured account balance
    pub account_balance: Money,
    /// Sum of every recorded transaction
    pub total_expenses: Money,
    /// Income minus expenses (may be negative)
    pub net: Money,
    pub transaction_count: usize,
    pub goal_count: usize,
    pub alert_count: usize,
}

impl DashboardSummary {
    /// Summarize the current lists
    ///
    /// Expenses cover the whole transaction list, not just one month.
    pub fn generate(
        transactions: &[Transaction],
        goals: &[Goal],
        alerts: &[BudgetAlert],
        monthly_income: Money,
        account_balance: Money,
    ) -> Self {
        let total_expenses: Money = transactions.iter().map(|t| t.amount).sum();

        Self {
            monthly_income,
            account_balance,
            total_expenses,
            net: monthly_income - total_expenses,
            transaction_count: transactions.len(),
            goal_count: goals.len(),
            alert_count: alerts.len(),
        }
    }

    /// Format the report for terminal display, amounts in `symbol`
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("{:<24} {:>15}\n", "Account Balance:", self.account_balance.format_with_symbol(symbol)));
        output.push_str(&format!("{:<24} {:>15}\n", "Monthly Income:", self.monthly_income.format_with_symbol(symbol)));
        output.push_str(&format!("{:<24} {:>15}\n", "Total Expenses:", self.total_expenses.format_with_symbol(symbol)));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!("{:<24} {:>15}\n", "Net:", self.net.format_with_symbol(symbol)));
        output.push('\n');
        output.push_str(&format!("{:<24} {:>15}\n", "Transactions:", self.transaction_count));
        output.push_str(&format!("{:<24} {:>15}\n", "Active Goals:", self.goal_count));
        output.push_str(&format!("{:<24} {:>15}\n", "Budget Alerts:", self.alert_count));

        output
    }
}
