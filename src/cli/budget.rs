//! Budget CLI commands
//!
//! Implements CLI commands for setting per-category limits and checking
//! spending against them.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_budget_status;
use crate::error::{FinsightError, FinsightResult};
use crate::models::Money;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::parse_period_arg;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set (or replace) the monthly limit for a category
    Set {
        /// Category name
        category: String,

        /// Monthly limit (e.g. "400" or "400.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show spending against every budgeted category
    Status {
        /// Month to report on (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    _settings: &Settings,
    cmd: BudgetCommands,
) -> FinsightResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let limit = Money::parse(&amount)
                .map_err(|e| FinsightError::InvalidAmount(e.to_string()))?;

            let limit = service.set_budget(&category, limit)?;
            println!("Budget set: '{}' at {} per month", category.trim(), limit);
        }

        BudgetCommands::Status { period } => {
            let period = parse_period_arg(period.as_deref())?;
            let statuses = service.status(period)?;
            println!("{}", format_budget_status(&statuses, period));
        }
    }

    Ok(())
}
