//! User settings for FinSmart
//!
//! Holds the figures the dashboard cannot derive from the transaction list
//! (income and account balance) together with the classifier keyword table,
//! the budget limits, and the spending projection parameters.

use serde::{Deserialize, Serialize};

use super::paths::FinsmartPaths;
use crate::error::FinsmartError;
use crate::models::Money;
use crate::services::{BudgetLimits, Classifier};
use crate::storage::write_json_atomic;

/// Upper bound for both projection windows (ten years)
pub const MAX_PROJECTION_MONTHS: u32 = 120;

/// Spending trend projection parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSettings {
    /// Number of past months of actual spending, ending at the current month
    #[serde(default = "default_history_months")]
    pub history_months: u32,

    /// Number of months projected past the current one
    #[serde(default = "default_horizon_months")]
    pub horizon_months: u32,

    /// Growth applied per projected month (0.05 = 5%)
    #[serde(default = "default_monthly_growth")]
    pub monthly_growth: f64,
}

fn default_history_months() -> u32 {
    3
}

fn default_horizon_months() -> u32 {
    3
}

fn default_monthly_growth() -> f64 {
    0.05
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            history_months: default_history_months(),
            horizon_months: default_horizon_months(),
            monthly_growth: default_monthly_growth(),
        }
    }
}

/// User settings for FinSmart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Monthly income shown on the dashboard
    #[serde(default = "default_monthly_income")]
    pub monthly_income: Money,

    /// Account balance shown on the dashboard
    #[serde(default = "default_account_balance")]
    pub account_balance: Money,

    /// How many transactions the dashboard lists
    #[serde(default = "default_recent_count")]
    pub recent_transactions: usize,

    /// Keyword table used to categorize new transactions
    #[serde(default)]
    pub keyword_rules: Classifier,

    /// Monthly limit per category
    #[serde(default)]
    pub budget_limits: BudgetLimits,

    #[serde(default)]
    pub projection: ProjectionSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_monthly_income() -> Money {
    Money::from_dollars(4200)
}

fn default_account_balance() -> Money {
    Money::from_cents(834_752)
}

fn default_recent_count() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            monthly_income: default_monthly_income(),
            account_balance: default_account_balance(),
            recent_transactions: default_recent_count(),
            keyword_rules: Classifier::default(),
            budget_limits: BudgetLimits::default(),
            projection: ProjectionSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinsmartPaths) -> Result<Self, FinsmartError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinsmartError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinsmartError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinsmartPaths) -> Result<(), FinsmartError> {
        self.validate()?;
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Check the values serde cannot check on its own
    ///
    /// Keyword and limit rules are already enforced when those tables are
    /// built; this covers the remaining numeric settings.
    pub fn validate(&self) -> Result<(), FinsmartError> {
        if self.projection.history_months == 0 {
            return Err(FinsmartError::Config(
                "projection.history_months must be at least 1".into(),
            ));
        }

        if self.projection.history_months > MAX_PROJECTION_MONTHS {
            return Err(FinsmartError::Config(format!(
                "projection.history_months must be at most {}",
                MAX_PROJECTION_MONTHS
            )));
        }

        if self.projection.horizon_months > MAX_PROJECTION_MONTHS {
            return Err(FinsmartError::Config(format!(
                "projection.horizon_months must be at most {}",
                MAX_PROJECTION_MONTHS
            )));
        }

        if !self.projection.monthly_growth.is_finite() {
            return Err(FinsmartError::Config(
                "projection.monthly_growth must be a finite number".into(),
            ));
        }

        if self.currency_symbol.is_empty() {
            return Err(FinsmartError::Config("currency_symbol cannot be empty".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.monthly_income, Money::from_dollars(4200));
        assert_eq!(settings.account_balance.to_string(), "$8347.52");
        assert_eq!(settings.recent_transactions, 5);
        assert_eq!(settings.projection.history_months, 3);
        assert_eq!(settings.projection.horizon_months, 3);
        assert_eq!(
            settings.budget_limits.get(Category::Groceries),
            Some(Money::from_dollars(600))
        );
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_missing_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsmartPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsmartPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.monthly_income = Money::from_dollars(5100);
        settings.keyword_rules = Classifier::new([("bakery", Category::Groceries)]).unwrap();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.monthly_income, Money::from_dollars(5100));
        assert_eq!(loaded.keyword_rules.classify("Corner Bakery"), Category::Groceries);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsmartPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"monthly_income": 3000}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.monthly_income, Money::from_dollars(3000));
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.keyword_rules, Classifier::default());
    }

    #[test]
    fn test_empty_keyword_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsmartPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"keyword_rules": [{"keyword": "  ", "category": "Dining"}]}"#,
        )
        .unwrap();

        let result = Settings::load_or_create(&paths);
        assert!(matches!(result, Err(FinsmartError::Config(_))));
    }

    #[test]
    fn test_negative_limit_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsmartPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"budget_limits": {"Dining": -5}}"#).unwrap();

        let result = Settings::load_or_create(&paths);
        assert!(matches!(result, Err(FinsmartError::Config(_))));
    }

    #[test]
    fn test_zero_history_rejected() {
        let mut settings = Settings::default();
        settings.projection.history_months = 0;
        assert!(matches!(settings.validate(), Err(FinsmartError::Config(_))));
    }

    #[test]
    fn test_projection_windows_are_bounded() {
        let mut settings = Settings::default();
        settings.projection.history_months = MAX_PROJECTION_MONTHS;
        settings.projection.horizon_months = MAX_PROJECTION_MONTHS;
        assert!(settings.validate().is_ok());

        settings.projection.horizon_months = MAX_PROJECTION_MONTHS + 1;
        assert!(matches!(settings.validate(), Err(FinsmartError::Config(_))));

        let temp_dir = TempDir::new().unwrap();
        let paths = FinsmartPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"projection": {"history_months": 4000000000}}"#,
        )
        .unwrap();

        let result = Settings::load_or_create(&paths);
        assert!(matches!(result, Err(FinsmartError::Config(_))));
    }
}
