//! Transaction CLI commands
//!
//! Implements CLI commands for recording and listing ledger transactions.

use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::display::{format_transaction_confirmation, format_transaction_list};
use crate::error::{FinsightError, FinsightResult};
use crate::models::{Money, TransactionKind};
use crate::services::TransactionService;
use crate::storage::Storage;

use super::{parse_date_arg, parse_period_arg};

/// Transaction kind argument
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Money coming in (salary, refunds)
    Income,
    /// Money going out
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Amount (e.g. "42.50" or "$1,234.56")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Category name (any non-empty text; see 'finsight categories')
        category: String,

        /// Free-form description
        description: Option<String>,

        /// Whether this is income or an expense
        #[arg(short, long, value_enum, default_value = "expense")]
        kind: KindArg,

        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List transactions, most recent first
    List {
        /// Restrict to one month (YYYY-MM)
        #[arg(short, long)]
        period: Option<String>,

        /// Maximum number of rows to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinsightResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            description,
            kind,
            date,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| FinsightError::InvalidAmount(e.to_string()))?;
            let date = parse_date_arg(date.as_deref())?;

            let txn = service.record(
                date,
                amount,
                kind.into(),
                &category,
                description.as_deref().unwrap_or(""),
            )?;

            println!("{}", format_transaction_confirmation(&txn));
        }

        TransactionCommands::List { period, limit } => {
            let period = match period {
                Some(s) => Some(parse_period_arg(Some(&s))?),
                None => None,
            };

            // A bare `list` shows the most recent entries; a period shows
            // the whole month unless a limit is given.
            let limit = match (limit, period.is_some()) {
                (Some(n), _) => Some(n),
                (None, true) => None,
                (None, false) => Some(settings.transaction_list_limit),
            };

            let transactions = service.list(period, limit)?;

            match period {
                Some(p) => println!("Transactions for {}:", p),
                None => println!("Recent transactions:"),
            }
            println!();
            println!("{}", format_transaction_list(&transactions));

            if !transactions.is_empty() {
                println!();
                println!("{} transaction(s) shown", transactions.len());
            }
        }
    }

    Ok(())
}
