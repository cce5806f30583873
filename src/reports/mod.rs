//! Reports module for FinSmart
//!
//! Aggregation of the transaction list into monthly category totals, and the
//! dashboard reports built on them: category breakdown, headline summary and
//! spending trend.

pub mod categories;
pub mod monthly;
pub mod summary;
pub mod trend;

pub use categories::{CategoryReport, CategoryRow};
pub use monthly::{category_breakdown, monthly_spending, monthly_totals, CategoryShare, CategoryTotals};
pub use summary::DashboardSummary;
pub use trend::{SpendingTrend, TrendPoint};
