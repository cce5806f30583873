//! Built-in sample records
//!
//! Substituted whenever a persisted list is missing or unreadable, so a
//! fresh install opens onto a populated dashboard.

use chrono::NaiveDate;

use crate::models::{Category, Goal, Money, Transaction};

fn jan_2024(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or_default()
}

/// Sample transactions, newest first
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::with_id(
            "1",
            "Grocery Store Purchase",
            Money::from_cents(8732),
            jan_2024(15),
            Category::Groceries,
        ),
        Transaction::with_id(
            "2",
            "Uber Ride",
            Money::from_cents(2345),
            jan_2024(14),
            Category::Transportation,
        ),
        Transaction::with_id(
            "3",
            "Netflix Subscription",
            Money::from_cents(1599),
            jan_2024(13),
            Category::Entertainment,
        ),
        Transaction::with_id(
            "4",
            "Electric Bill",
            Money::from_cents(14567),
            jan_2024(12),
            Category::Utilities,
        ),
        Transaction::with_id(
            "5",
            "Coffee Shop",
            Money::from_cents(875),
            jan_2024(11),
            Category::Dining,
        ),
        Transaction::with_id(
            "6",
            "Amazon Purchase",
            Money::from_cents(6789),
            jan_2024(10),
            Category::Shopping,
        ),
    ]
}

/// Sample savings goals
pub fn sample_goals() -> Vec<Goal> {
    vec![
        Goal::with_id(
            "1",
            "Emergency Fund",
            Money::from_dollars(5000),
            Money::from_dollars(3200),
        ),
        Goal::with_id(
            "2",
            "Vacation to Europe",
            Money::from_dollars(3000),
            Money::from_dollars(1800),
        ),
        Goal::with_id(
            "3",
            "New Laptop",
            Money::from_dollars(1500),
            Money::from_dollars(750),
        ),
    ]
}
