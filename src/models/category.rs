//! Spending categories
//!
//! Every transaction carries exactly one category from a fixed, closed set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Groceries,
    Transportation,
    Dining,
    Utilities,
    Bills,
    Entertainment,
    Healthcare,
    Shopping,
    Other,
}

impl Category {
    /// All categories, in display order
    pub fn all() -> &'static [Category] {
        &[
            Category::Groceries,
            Category::Transportation,
            Category::Dining,
            Category::Utilities,
            Category::Bills,
            Category::Entertainment,
            Category::Healthcare,
            Category::Shopping,
            Category::Other,
        ]
    }

    /// The category's display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Transportation => "Transportation",
            Self::Dining => "Dining",
            Self::Utilities => "Utilities",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

/// Error returned when a name is not one of the known categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for CategoryParseError {}
