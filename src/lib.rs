//! FinSmart - personal finance dashboard
//!
//! Users log expenses and savings goals; FinSmart files each expense under a
//! category by keyword, totals spending per month and category, flags the
//! categories that went over budget, and tracks how close each goal is.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, goals, categories, money)
//! - `storage`: Key-value store for the persisted lists
//! - `services`: Classifier, budget monitor, goal tracker and the dashboard
//! - `reports`: Monthly aggregation, summary and spending trend
//! - `display`, `cli`: Terminal presentation
//!
//! # Example
//!
//! ```rust
//! use finsmart::models::{Category, Month};
//! use finsmart::services::{BudgetLimits, Classifier, Dashboard};
//! use finsmart::storage::MemoryStore;
//!
//! let mut dashboard = Dashboard::open(
//!     MemoryStore::new(),
//!     Classifier::default(),
//!     BudgetLimits::default(),
//! );
//! let txn = dashboard
//!     .add_transaction("Weekly supermarket run", "650", "2024-01-20")
//!     .unwrap();
//! assert_eq!(txn.category, Category::Groceries);
//!
//! let alerts = dashboard.alerts(Month::new(2024, 1).unwrap());
//! assert_eq!(alerts.len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinsmartError, FinsmartResult};
