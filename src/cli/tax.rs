//! Tax estimate CLI command

use clap::Args;

use crate::error::{FinsightError, FinsightResult};
use crate::models::Money;
use crate::services::TaxEstimator;
use crate::storage::Storage;

use super::parse_period_arg;

/// Arguments for the tax command
#[derive(Args)]
pub struct TaxArgs {
    /// Estimate tax on this gross income instead of ledger data
    #[arg(short, long, conflicts_with = "period", allow_hyphen_values = true)]
    pub income: Option<String>,

    /// Month whose recorded income to estimate on (YYYY-MM, defaults to
    /// the current month)
    #[arg(short, long)]
    pub period: Option<String>,
}

/// Estimate tax on explicit income or on a month's recorded income
pub fn handle_tax_command(storage: &Storage, args: TaxArgs) -> FinsightResult<()> {
    let estimator = TaxEstimator::default();

    let (gross, hints, header) = match args.income {
        Some(amount) => {
            let gross = Money::parse(&amount)
                .map_err(|e| FinsightError::InvalidAmount(e.to_string()))?;
            (gross, Vec::new(), "Tax Estimate".to_string())
        }
        None => {
            let period = parse_period_arg(args.period.as_deref())?;
            let ledger = storage.ledger.snapshot()?;
            let gross = ledger.total_income(period);
            let hints =
                estimator.itemization_hints(gross, &ledger.expenses_by_category(period));
            (gross, hints, format!("Tax Estimate - {}", period))
        }
    };

    let estimate = estimator.estimate(gross)?;

    println!("{}", header);
    println!("{}", "=".repeat(header.len()));
    println!("{:<18} {:>14}", "Gross income:", estimate.gross_income);

    if estimate.deductions_applied.is_empty() {
        println!("{:<18} {:>14}", "Deductions:", "(none)");
    } else {
        println!("Deductions:");
        for deduction in &estimate.deductions_applied {
            println!("  - {}", deduction);
        }
    }

    println!("{:<18} {:>14}", "Taxable income:", estimate.taxable_income);
    println!("{:<18} {:>14}", "Estimated tax:", estimate.tax);
    println!(
        "{:<18} {:>13.1}%",
        "Effective rate:",
        estimate.effective_rate() * 100.0
    );

    if !hints.is_empty() {
        println!();
        println!("Itemization hints:");
        for hint in &hints {
            println!("  - {}", hint);
        }
    }

    Ok(())
}
