//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod export;
pub mod profile;
pub mod report;
pub mod tax;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use profile::{handle_profile_command, ProfileCommands};
pub use report::handle_report_command;
pub use tax::{handle_tax_command, TaxArgs};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{FinsightError, FinsightResult};
use crate::models::Period;

/// Parse a "YYYY-MM" argument, defaulting to the current month
pub(crate) fn parse_period_arg(period: Option<&str>) -> FinsightResult<Period> {
    match period {
        Some(s) => Period::parse(s).map_err(|e| FinsightError::InvalidPeriod(e.to_string())),
        None => Ok(Period::current()),
    }
}

/// Parse a "YYYY-MM-DD" argument, defaulting to today
pub(crate) fn parse_date_arg(date: Option<&str>) -> FinsightResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|_| FinsightError::InvalidDate(format!("expected YYYY-MM-DD, got '{}'", s))),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_period_arg_explicit() {
        let period = parse_period_arg(Some("2025-03")).unwrap();
        assert_eq!(period, Period::new(2025, 3).unwrap());
    }

    #[test]
    fn test_parse_period_arg_default_is_current() {
        assert_eq!(parse_period_arg(None).unwrap(), Period::current());
    }

    #[test]
    fn test_parse_period_arg_rejects_garbage() {
        let err = parse_period_arg(Some("March")).unwrap_err();
        assert!(matches!(err, FinsightError::InvalidPeriod(_)));
    }

    #[test]
    fn test_parse_date_arg() {
        let date = parse_date_arg(Some("2025-03-14")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());

        let err = parse_date_arg(Some("14/03/2025")).unwrap_err();
        assert!(matches!(err, FinsightError::InvalidDate(_)));
    }
}
