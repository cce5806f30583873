//! Spending trend
//!
//! Actual spending for the months leading up to (and including) the current
//! one, followed by a straight-line projection: each projected month is the
//! historical average grown by a fixed rate per month ahead, rounded to a
//! whole currency unit.

use tracing::debug;

use crate::config::ProjectionSettings;
use crate::models::{Money, Month, Transaction};

use super::monthly::monthly_spending;

/// One month on the trend line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendPoint {
    pub month: Month,
    pub amount: Money,
    /// Whether `amount` is a projection rather than recorded spending
    pub projected: bool,
}

/// Actual and projected monthly spending
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingTrend {
    /// History oldest first, then projections nearest first
    pub points: Vec<TrendPoint>,
    /// Average of the historical months
    pub average: Money,
}

impl SpendingTrend {
    /// Build the trend ending at `current`
    pub fn generate(
        transactions: &[Transaction],
        current: Month,
        params: &ProjectionSettings,
    ) -> Self {
        let history_len = params.history_months.max(1);

        let mut months = Vec::with_capacity(history_len as usize);
        let mut month = current;
        for _ in 0..history_len {
            months.push(month);
            month = month.prev();
        }
        months.reverse();

        let mut points: Vec<TrendPoint> = months
            .into_iter()
            .map(|month| TrendPoint {
                month,
                amount: monthly_spending(transactions, month),
                projected: false,
            })
            .collect();

        let total: Money = points.iter().map(|p| p.amount).sum();
        let average_decimal = total.to_decimal() / f64::from(history_len);
        let average = Money::from_decimal(average_decimal).unwrap_or_default();

        let mut month = current;
        for i in 1..=params.horizon_months {
            month = month.next();
            let factor = 1.0 + params.monthly_growth * f64::from(i);
            let amount = Money::from_decimal(average_decimal * factor)
                .map(|m| m.round_to_whole())
                .unwrap_or_default();
            points.push(TrendPoint {
                month,
                amount,
                projected: true,
            });
        }

        debug!(
            "Spending trend to {}: average {}, {} projected months",
            current, average, params.horizon_months
        );

        Self { points, average }
    }

    /// Recorded months only
    pub fn actual(&self) -> impl Iterator<Item = &TrendPoint> {
        self.points.iter().filter(|p| !p.projected)
    }

    /// Projected months only
    pub fn projected(&self) -> impl Iterator<Item = &TrendPoint> {
        self.points.iter().filter(|p| p.projected)
    }

    /// Format the report for terminal display, amounts in `symbol`
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Spending Trend\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("{:<12} {:>14} {:>12}\n", "Month", "Amount", ""));
        output.push_str(&"-".repeat(40));
        output.push('\n');

        for point in &self.points {
            output.push_str(&format!(
                "{:<12} {:>14} {:>12}\n",
                point.month.label(),
                point.amount.format_with_symbol(symbol),
                if point.projected { "(projected)" } else { "" }
            ));
        }

        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!("{:<12} {:>14}\n", "Average", self.average.format_with_symbol(symbol)));

        output
    }
}
