//! Investment recommendation service
//!
//! Maps (risk tolerance, savings ratio bucket) onto canned recommendation
//! text through a fixed decision table. Identical inputs always produce
//! identical output in the same order.

use crate::error::{FinsightError, FinsightResult};
use crate::models::{InvestmentProfile, Money, RiskTolerance};

/// Where the savings ratio (income − expenses) / income lands
///
/// Ratio is defined as zero when income is zero, so a zero-income
/// period buckets as `Low` even when money went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsBucket {
    /// Spending exceeds income
    Deficit,
    /// Ratio in [0, 0.1)
    Low,
    /// Ratio in [0.1, 0.3)
    Moderate,
    /// Ratio at or above 0.3
    High,
}

impl SavingsBucket {
    /// Classify a period's totals
    ///
    /// Works in integer cents so the 0.1 and 0.3 boundaries are exact:
    /// ratio >= 0.1 iff 10 * savings >= income, and likewise for 0.3.
    pub fn from_totals(income: Money, expenses: Money) -> Self {
        if income.is_zero() {
            return SavingsBucket::Low;
        }
        let savings = income - expenses;
        if savings.is_negative() {
            return SavingsBucket::Deficit;
        }
        let scaled = savings.cents() as i128 * 10;
        let income = income.cents() as i128;
        if scaled >= income * 3 {
            SavingsBucket::High
        } else if scaled >= income {
            SavingsBucket::Moderate
        } else {
            SavingsBucket::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SavingsBucket::Deficit => "deficit",
            SavingsBucket::Low => "low",
            SavingsBucket::Moderate => "moderate",
            SavingsBucket::High => "high",
        }
    }
}

const FOCUS_ON_SAVINGS: &str =
    "Focus on increasing your savings rate before making significant investments.";
const REVIEW_SPENDING: &str =
    "Review your largest spending categories to bring expenses back under income.";
const LOW_RISK_LINE: &str =
    "Consider low-risk investments like high-yield savings accounts or government bonds.";
const MEDIUM_RISK_LINE: &str =
    "A balanced portfolio of stocks and bonds could be suitable for your risk tolerance.";
const HIGH_RISK_LINE: &str =
    "You might consider a stock-heavy portfolio or exploring alternative investments.";

/// The full decision table, one row per (bucket, risk tolerance) cell
///
/// The match is the table: each arm maps one key to its fixed, ordered
/// list of lines, and exhaustiveness checking guarantees every cell is
/// covered.
pub fn recommendation_lines(
    bucket: SavingsBucket,
    risk: RiskTolerance,
) -> &'static [&'static str] {
    match (bucket, risk) {
        (SavingsBucket::Deficit, _) => &[FOCUS_ON_SAVINGS, REVIEW_SPENDING],
        (SavingsBucket::Low, RiskTolerance::Low) => &[
            FOCUS_ON_SAVINGS,
            "Park new savings in a high-yield savings account until you have an emergency fund.",
        ],
        (SavingsBucket::Low, RiskTolerance::Medium) => &[
            FOCUS_ON_SAVINGS,
            "Build an emergency fund before adding market exposure.",
        ],
        (SavingsBucket::Low, RiskTolerance::High) => &[
            FOCUS_ON_SAVINGS,
            "Hold off on higher-risk positions until your savings rate improves.",
        ],
        (SavingsBucket::Moderate, RiskTolerance::Low) => &[LOW_RISK_LINE],
        (SavingsBucket::Moderate, RiskTolerance::Medium) => &[MEDIUM_RISK_LINE],
        (SavingsBucket::Moderate, RiskTolerance::High) => &[HIGH_RISK_LINE],
        (SavingsBucket::High, RiskTolerance::Low) => &[
            LOW_RISK_LINE,
            "With a strong savings rate, laddered CDs or Treasury bills can add yield with little risk.",
        ],
        (SavingsBucket::High, RiskTolerance::Medium) => &[
            MEDIUM_RISK_LINE,
            "Your savings rate leaves room to increase automatic monthly contributions.",
        ],
        (SavingsBucket::High, RiskTolerance::High) => &[
            HIGH_RISK_LINE,
            "Your savings rate leaves room to increase automatic monthly contributions.",
        ],
    }
}

/// Stateless recommendation engine
#[derive(Debug, Clone, Copy, Default)]
pub struct InvestmentAdvisor;

impl InvestmentAdvisor {
    pub fn new() -> Self {
        InvestmentAdvisor
    }

    /// Recommendations for a profile given period totals
    ///
    /// Fails with `NoProfileSet` when no profile has been stored. The
    /// output is the decision-table row for (risk tolerance, bucket),
    /// always in the same order for the same inputs.
    pub fn recommend(
        &self,
        profile: Option<&InvestmentProfile>,
        total_income: Money,
        total_expenses: Money,
    ) -> FinsightResult<Vec<String>> {
        let profile = profile.ok_or(FinsightError::NoProfileSet)?;
        let bucket = SavingsBucket::from_totals(total_income, total_expenses);
        let lines = recommendation_lines(bucket, profile.risk_tolerance);
        Ok(lines.iter().map(|line| line.to_string()).collect())
    }
}
