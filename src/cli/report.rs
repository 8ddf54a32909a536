//! Financial report CLI command

use crate::config::Settings;
use crate::error::FinsightResult;
use crate::reports::FinancialReport;
use crate::services::{InvestmentAdvisor, TaxEstimator};
use crate::storage::Storage;

use super::parse_period_arg;

/// Generate and print the monthly financial report
///
/// Fails before printing anything when a sub-computation fails, most
/// commonly because no investment profile has been set.
pub fn handle_report_command(
    storage: &Storage,
    _settings: &Settings,
    period: Option<String>,
) -> FinsightResult<()> {
    let period = parse_period_arg(period.as_deref())?;

    let estimator = TaxEstimator::default();
    let advisor = InvestmentAdvisor::new();

    let report = FinancialReport::generate_from_storage(storage, &estimator, &advisor, period)?;

    println!("{}", report.format_terminal());

    Ok(())
}
