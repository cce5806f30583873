//! Keyword classifier
//!
//! Assigns a category to a transaction description by scanning an ordered
//! keyword table for the first keyword contained in the lower-cased text.
//! Earlier rules win when several keywords match.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FinsmartError, FinsmartResult};
use crate::models::Category;

/// The stock keyword table, in match order
const DEFAULT_RULES: &[(&str, Category)] = &[
    ("grocery", Category::Groceries),
    ("supermarket", Category::Groceries),
    ("food", Category::Groceries),
    ("uber", Category::Transportation),
    ("gas", Category::Transportation),
    ("taxi", Category::Transportation),
    ("restaurant", Category::Dining),
    ("cafe", Category::Dining),
    ("coffee", Category::Dining),
    ("pizza", Category::Dining),
    ("electric", Category::Utilities),
    ("water", Category::Utilities),
    ("internet", Category::Utilities),
    ("phone", Category::Bills),
    ("netflix", Category::Entertainment),
    ("spotify", Category::Entertainment),
    ("movie", Category::Entertainment),
    ("amazon", Category::Shopping),
    ("target", Category::Shopping),
    ("doctor", Category::Healthcare),
    ("pharmacy", Category::Healthcare),
];

/// One keyword → category mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub keyword: String,
    pub category: Category,
}

/// Ordered keyword table used to categorize descriptions
///
/// Keywords are stored lower-cased; building a classifier with an empty
/// keyword fails because it would match every description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<KeywordRule>", into = "Vec<KeywordRule>")]
pub struct Classifier {
    rules: Vec<KeywordRule>,
}

impl Classifier {
    /// Build a classifier from `(keyword, category)` pairs, in match order
    pub fn new<K: Into<String>>(
        rules: impl IntoIterator<Item = (K, Category)>,
    ) -> FinsmartResult<Self> {
        let rules = rules
            .into_iter()
            .map(|(keyword, category)| KeywordRule {
                keyword: keyword.into(),
                category,
            })
            .collect::<Vec<_>>();
        Self::try_from(rules)
    }

    /// The rules in match order
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Categorize a description. Never fails; unmatched text is `Other`.
    pub fn classify(&self, description: &str) -> Category {
        let lower = description.to_lowercase();

        match self.rules.iter().find(|rule| lower.contains(&rule.keyword)) {
            Some(rule) => {
                debug!(
                    "Keyword '{}' matched '{}': {}",
                    rule.keyword, description, rule.category
                );
                rule.category
            }
            None => {
                debug!("Falling back to 'Other' for '{}'", description);
                Category::Other
            }
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES
                .iter()
                .map(|(keyword, category)| KeywordRule {
                    keyword: (*keyword).to_string(),
                    category: *category,
                })
                .collect(),
        }
    }
}

impl TryFrom<Vec<KeywordRule>> for Classifier {
    type Error = FinsmartError;

    fn try_from(rules: Vec<KeywordRule>) -> Result<Self, Self::Error> {
        let rules = rules
            .into_iter()
            .map(|rule| {
                let keyword = rule.keyword.trim().to_lowercase();
                if keyword.is_empty() {
                    return Err(FinsmartError::Config(format!(
                        "Empty keyword for category {}",
                        rule.category
                    )));
                }
                Ok(KeywordRule {
                    keyword,
                    category: rule.category,
                })
            })
            .collect::<FinsmartResult<Vec<_>>>()?;

        Ok(Self { rules })
    }
}

impl From<Classifier> for Vec<KeywordRule> {
    fn from(classifier: Classifier) -> Self {
        classifier.rules
    }
}
