//! Dashboard overview formatting
//!
//! The panels shown by `finsmart` with no arguments: balance, budget alerts,
//! monthly summary, quick stats, recent transactions and goal progress.

use crate::models::{BudgetAlert, Goal, Month, Transaction};
use crate::reports::DashboardSummary;

use super::goal::format_goal_list;
use super::report::{double_separator, format_header, separator};
use super::transaction::format_transaction_register;

const WIDTH: usize = 72;

/// Format budget alerts, one per line
pub fn format_alerts(alerts: &[BudgetAlert], symbol: &str) -> String {
    if alerts.is_empty() {
        return "All categories are within budget.\n".to_string();
    }

    let mut output = String::new();
    for alert in alerts {
        output.push_str(&format!("⚠ {}\n", alert.message(symbol)));
    }
    output
}

/// Everything the overview needs
#[derive(Debug, Clone, Copy)]
pub struct DashboardView<'a> {
    pub month: Month,
    pub summary: &'a DashboardSummary,
    pub alerts: &'a [BudgetAlert],
    pub recent: &'a [Transaction],
    pub goals: &'a [Goal],
    pub currency_symbol: &'a str,
}

impl DashboardView<'_> {
    /// Format the full overview
    pub fn format_terminal(&self) -> String {
        let symbol = self.currency_symbol;
        let summary = self.summary;
        let mut output = String::new();

        output.push_str(&format_header("FinSmart Dashboard", WIDTH));
        output.push('\n');
        output.push_str(&double_separator(WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "Total Balance: {}\n\n",
            summary.account_balance.format_with_symbol(symbol)
        ));

        section(&mut output, &format!("Budget Alerts ({})", self.month.label()));
        output.push_str(&format_alerts(self.alerts, symbol));
        output.push('\n');

        section(&mut output, "Monthly Summary");
        output.push_str(&format!(
            "{:<18} {:>14}\n",
            "Income:",
            summary.monthly_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<18} {:>14}\n",
            "Expenses:",
            summary.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<18} {:>14}\n\n",
            "Net:",
            summary.net.format_with_symbol(symbol)
        ));

        section(&mut output, "Quick Stats");
        output.push_str(&format!("{:<18} {:>14}\n", "Transactions:", summary.transaction_count));
        output.push_str(&format!("{:<18} {:>14}\n", "Active Goals:", summary.goal_count));
        output.push_str(&format!("{:<18} {:>14}\n\n", "Budget Alerts:", summary.alert_count));

        section(&mut output, "Recent Transactions");
        output.push_str(&format_transaction_register(self.recent, symbol));
        output.push('\n');

        section(&mut output, "Savings Goals");
        output.push_str(&format_goal_list(self.goals, symbol));

        output
    }
}

fn section(output: &mut String, title: &str) {
    output.push_str(title);
    output.push('\n');
    output.push_str(&separator(WIDTH));
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use crate::storage::samples::{sample_goals, sample_transactions};

    #[test]
    fn test_alert_lines() {
        let alert = BudgetAlert::check(
            Category::Groceries,
            Money::from_dollars(600),
            Money::from_dollars(650),
        )
        .unwrap();
        let output = format_alerts(&[alert], "$");
        assert_eq!(
            output,
            "⚠ Groceries budget exceeded by $50.00! Spent $650.00 of $600.00 budget.\n"
        );
        assert!(format_alerts(&[], "$").contains("within budget"));
    }

    #[test]
    fn test_overview_sections() {
        let transactions = sample_transactions();
        let goals = sample_goals();
        let summary = DashboardSummary::generate(
            &transactions,
            &goals,
            &[],
            Money::from_dollars(4200),
            Money::from_cents(834_752),
        );
        let alerts = vec![BudgetAlert::check(
            Category::Groceries,
            Money::from_dollars(600),
            Money::from_dollars(650),
        )
        .unwrap()];
        let view = DashboardView {
            month: Month::new(2024, 1).unwrap(),
            summary: &summary,
            alerts: &alerts,
            recent: &transactions[..5],
            goals: &goals,
            currency_symbol: "€",
        };

        let output = view.format_terminal();
        assert!(output.contains("Total Balance: €8347.52"));
        assert!(output.contains("Budget Alerts (Jan 2024)"));
        assert!(output.contains("Coffee Shop"));
        assert!(!output.contains("Amazon Purchase"));
        assert!(output.contains("64.0% complete"));
        assert!(output.contains(
            "⚠ Groceries budget exceeded by €50.00! Spent €650.00 of €600.00 budget."
        ));
        assert!(output.contains("€87.32"));
        assert!(output.contains("€3200.00 / €5000.00"));
        assert!(!output.contains('$'));
    }
}
