//! Transaction CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_transaction_register;
use crate::error::FinsmartResult;
use crate::models::Month;
use crate::services::dashboard::{Dashboard, DATE_FORMAT};
use crate::storage::Store;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new expense; its category is inferred from the description
    Add {
        /// What the money was spent on (e.g., "Uber ride home")
        description: String,
        /// Amount spent (e.g., "23.45")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List transactions, newest first
    List {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show which category a description would be filed under
    Classify {
        /// Description to classify
        text: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<S: Store>(
    dashboard: &mut Dashboard<S>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinsmartResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            date,
        } => {
            let date =
                date.unwrap_or_else(|| Local::now().date_naive().format(DATE_FORMAT).to_string());

            let txn = dashboard.add_transaction(&description, &amount, &date)?;

            println!("Added transaction: {}", txn.description);
            println!("  Amount:   {}", txn.amount.format_with_symbol(symbol));
            println!("  Date:     {}", txn.date.format(DATE_FORMAT));
            println!("  Category: {}", txn.category);

            let month = Month::from_date(txn.date);
            if let Some(alert) = dashboard
                .alerts(month)
                .into_iter()
                .find(|a| a.category == txn.category)
            {
                println!();
                println!("⚠ {}", alert.message(symbol));
            }
        }

        TransactionCommands::List { limit } => {
            let transactions = match limit {
                Some(n) => dashboard.recent_transactions(n),
                None => dashboard.transactions(),
            };
            print!("{}", format_transaction_register(transactions, symbol));
        }

        TransactionCommands::Classify { text } => {
            println!("{}", dashboard.classifier().classify(&text));
        }
    }

    Ok(())
}
