//! Dashboard service
//!
//! Owns the in-memory transaction and goal lists, validates form input,
//! and keeps the store in step with every mutation. Reads never touch the
//! store; it is consulted once, when the dashboard is opened.

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use crate::error::{FinsmartError, FinsmartResult};
use crate::models::{
    BudgetAlert, Goal, GoalValidationError, Money, MoneyParseError, Month, Transaction,
};
use crate::reports::{monthly_totals, CategoryTotals};
use crate::storage::samples::{sample_goals, sample_transactions};
use crate::storage::{read_list, write_list, Store, StoreKey};

use super::budget::{budget_alerts, BudgetLimits};
use super::classifier::Classifier;
use super::goal::{goal_progress, GoalProgress};

/// Date format accepted for new transactions
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The dashboard state and its mutations
#[derive(Debug)]
pub struct Dashboard<S: Store> {
    store: S,
    classifier: Classifier,
    limits: BudgetLimits,
    transactions: Vec<Transaction>,
    goals: Vec<Goal>,
}

impl<S: Store> Dashboard<S> {
    /// Load both lists from `store`
    ///
    /// A missing list is replaced by the sample records, which are written
    /// back. A list that cannot be read or decoded is also replaced by the
    /// samples, but only in memory: the stored value stays as it is until
    /// the next mutation overwrites it.
    pub fn open(store: S, classifier: Classifier, limits: BudgetLimits) -> Self {
        let transactions = load_or_seed(&store, StoreKey::Transactions, sample_transactions);
        let goals = load_or_seed(&store, StoreKey::Goals, sample_goals);

        debug!(
            "Opened dashboard with {} transactions and {} goals",
            transactions.len(),
            goals.len()
        );

        Self {
            store,
            classifier,
            limits,
            transactions,
            goals,
        }
    }

    /// All transactions, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All goals, in creation order
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn limits(&self) -> &BudgetLimits {
        &self.limits
    }

    /// The first `count` transactions
    pub fn recent_transactions(&self, count: usize) -> &[Transaction] {
        &self.transactions[..count.min(self.transactions.len())]
    }

    /// Category totals for `month`
    pub fn monthly_totals(&self, month: Month) -> CategoryTotals {
        monthly_totals(&self.transactions, month)
    }

    /// Over-budget alerts for `month`
    pub fn alerts(&self, month: Month) -> Vec<BudgetAlert> {
        budget_alerts(&self.monthly_totals(month), &self.limits)
    }

    /// Progress of every goal, in list order
    pub fn goal_progress(&self) -> FinsmartResult<Vec<GoalProgress>> {
        goal_progress(&self.goals)
    }

    /// Record a new transaction from form input
    ///
    /// `amount` is a non-negative decimal no larger than [`Money::MAX`] and
    /// `date` is `YYYY-MM-DD`. The category is chosen by the classifier. The
    /// transaction goes to the front of the list; nothing changes if
    /// validation or the write fails.
    pub fn add_transaction(
        &mut self,
        description: &str,
        amount: &str,
        date: &str,
    ) -> FinsmartResult<Transaction> {
        let description = description.trim();
        let amount = parse_money("Amount", amount)?;

        let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|_| {
            FinsmartError::invalid_input(format!(
                "Invalid date '{}': expected YYYY-MM-DD",
                date.trim()
            ))
        })?;

        let category = self.classifier.classify(description);
        let transaction = Transaction::new(description, amount, date, category);
        transaction
            .validate()
            .map_err(|e| FinsmartError::invalid_input(e.to_string()))?;

        let mut updated = Vec::with_capacity(self.transactions.len() + 1);
        updated.push(transaction.clone());
        updated.extend(self.transactions.iter().cloned());

        write_list(&self.store, StoreKey::Transactions, &updated)?;
        self.transactions = updated;

        info!(
            "Added transaction {}: {} {} ({})",
            transaction.id, transaction.description, transaction.amount, transaction.category
        );

        Ok(transaction)
    }

    /// Record a new savings goal from form input
    ///
    /// A blank or missing `current` amount means nothing saved yet. The goal
    /// is appended; nothing changes if validation or the write fails.
    pub fn add_goal(
        &mut self,
        name: &str,
        target: &str,
        current: Option<&str>,
    ) -> FinsmartResult<Goal> {
        let name = name.trim();
        let target = parse_money("Target amount", target)?;
        let current = match current.map(str::trim) {
            None | Some("") => Money::zero(),
            Some(text) => parse_money("Current amount", text)?,
        };

        let goal = Goal::new(name, target, current);
        goal.validate().map_err(|e| match e {
            GoalValidationError::NonPositiveTarget(target) => {
                FinsmartError::invalid_goal(name, target)
            }
            other => FinsmartError::invalid_input(other.to_string()),
        })?;

        let mut updated = self.goals.clone();
        updated.push(goal.clone());

        write_list(&self.store, StoreKey::Goals, &updated)?;
        self.goals = updated;

        info!(
            "Added goal {}: {} ({} of {})",
            goal.id, goal.name, goal.current_amount, goal.target_amount
        );

        Ok(goal)
    }

    /// Replace the whole transaction list
    pub fn replace_transactions(&mut self, transactions: Vec<Transaction>) -> FinsmartResult<()> {
        write_list(&self.store, StoreKey::Transactions, &transactions)?;
        info!("Replaced transaction list ({} entries)", transactions.len());
        self.transactions = transactions;
        Ok(())
    }

    /// Replace the whole goal list
    pub fn replace_goals(&mut self, goals: Vec<Goal>) -> FinsmartResult<()> {
        write_list(&self.store, StoreKey::Goals, &goals)?;
        info!("Replaced goal list ({} entries)", goals.len());
        self.goals = goals;
        Ok(())
    }
}

fn load_or_seed<T, S>(store: &S, key: StoreKey, samples: fn() -> Vec<T>) -> Vec<T>
where
    T: Serialize + DeserializeOwned,
    S: Store,
{
    match read_list(store, key) {
        Ok(Some(list)) => list,
        Ok(None) => {
            let list = samples();
            info!("No data under {}, seeding {} sample records", key, list.len());
            if let Err(e) = write_list(store, key, &list) {
                warn!("Could not save sample data under {}: {}", key, e);
            }
            list
        }
        Err(e) => {
            warn!("{}; using sample data", e);
            samples()
        }
    }
}

fn parse_money(field: &str, text: &str) -> FinsmartResult<Money> {
    Money::parse(text).map_err(|e| match e {
        MoneyParseError::OutOfRange(_) => FinsmartError::invalid_input(format!(
            "{} is too large (maximum {})",
            field,
            Money::MAX
        )),
        _ => FinsmartError::invalid_input(format!("{} must be a number: {}", field, e)),
    })
}
