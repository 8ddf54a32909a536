//! Tax estimation service
//!
//! Applies an ordered set of income-predicated deduction rules, then a
//! progressive bracket schedule, to a gross income figure. The default
//! schedule uses illustrative 2021 US single-filer values; it is not tax
//! advice and makes no claim of jurisdictional accuracy.

use crate::error::{FinsightError, FinsightResult};
use crate::models::{DeductionRule, Money, TaxBracket, TaxEstimate};

/// Progressive tax estimator over a fixed bracket schedule
#[derive(Debug, Clone)]
pub struct TaxEstimator {
    brackets: Vec<TaxBracket>,
    deduction_rules: Vec<DeductionRule>,
}

impl TaxEstimator {
    /// Build an estimator from a schedule, validating its shape
    ///
    /// The brackets must start at zero, be contiguous (each lower bound
    /// equal to the previous upper bound), and end with an unbounded
    /// bracket.
    pub fn new(
        brackets: Vec<TaxBracket>,
        deduction_rules: Vec<DeductionRule>,
    ) -> FinsightResult<Self> {
        if brackets.is_empty() {
            return Err(FinsightError::Config("tax schedule has no brackets".into()));
        }
        if !brackets[0].lower.is_zero() {
            return Err(FinsightError::Config(
                "tax schedule must start at zero income".into(),
            ));
        }
        for pair in brackets.windows(2) {
            match pair[0].upper {
                Some(upper) if upper == pair[1].lower => {}
                Some(_) => {
                    return Err(FinsightError::Config(format!(
                        "tax brackets not contiguous at {}",
                        pair[1].lower
                    )))
                }
                None => {
                    return Err(FinsightError::Config(
                        "only the last tax bracket may be unbounded".into(),
                    ))
                }
            }
        }
        if brackets
            .last()
            .map_or(false, |last| last.upper.is_some())
        {
            return Err(FinsightError::Config(
                "last tax bracket must be unbounded".into(),
            ));
        }

        Ok(Self {
            brackets,
            deduction_rules,
        })
    }

    /// Estimate tax on a gross income
    ///
    /// Fails with `InvalidAmount` for negative income. Deduction rules
    /// whose predicate holds reduce taxable income (clamped at zero) and
    /// are recorded in definition order; the brackets then tax each slice
    /// of what remains.
    pub fn estimate(&self, gross_income: Money) -> FinsightResult<TaxEstimate> {
        if gross_income.is_negative() {
            return Err(FinsightError::negative_amount(gross_income));
        }

        let mut deductions_applied = Vec::new();
        let mut total_deduction = Money::zero();
        for rule in &self.deduction_rules {
            if rule.applies(gross_income) {
                deductions_applied.push(rule.description.clone());
                total_deduction += rule.amount;
            }
        }

        let taxable_income = if total_deduction >= gross_income {
            Money::zero()
        } else {
            gross_income - total_deduction
        };

        let tax: Money = self
            .brackets
            .iter()
            .map(|bracket| bracket.tax_on(taxable_income))
            .sum();

        Ok(TaxEstimate {
            gross_income,
            taxable_income,
            tax,
            deductions_applied,
        })
    }

    /// The bracket schedule, lowest first
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// The deduction rules, in application order
    pub fn deduction_rules(&self) -> &[DeductionRule] {
        &self.deduction_rules
    }

    /// Hints about itemizable spending, from per-category expense totals
    ///
    /// Looks at the deductible reference categories (mortgage interest,
    /// charitable contributions, medical expenses over 7.5% of income,
    /// child care, education) and returns one hint per match.
    pub fn itemization_hints(
        &self,
        gross_income: Money,
        expenses_by_category: &[(String, Money)],
    ) -> Vec<String> {
        let spent = |name: &str| -> Money {
            expenses_by_category
                .iter()
                .find(|(category, _)| category == name)
                .map(|(_, amount)| *amount)
                .unwrap_or_else(Money::zero)
        };

        let mut hints = Vec::new();
        if spent("mortgage_interest").is_positive() {
            hints.push("You may be eligible for the mortgage interest deduction.".to_string());
        }
        if spent("charitable_contributions").is_positive() {
            hints.push(
                "Don't forget to claim your charitable contributions as deductions.".to_string(),
            );
        }
        // Medical expenses count once they exceed 7.5% of gross income
        let medical = spent("medical_expenses");
        if medical.cents() as i128 * 1000 > gross_income.cents() as i128 * 75 {
            hints.push(
                "You may be eligible to deduct medical expenses exceeding 7.5% of your income."
                    .to_string(),
            );
        }
        if spent("child_care").is_positive() {
            hints.push("Look into the Child and Dependent Care Credit.".to_string());
        }
        if spent("education").is_positive() {
            hints.push(
                "You might be eligible for education-related tax credits like the American \
                 Opportunity Credit or Lifetime Learning Credit."
                    .to_string(),
            );
        }
        hints
    }
}

impl Default for TaxEstimator {
    /// Illustrative 2021 US single-filer schedule
    fn default() -> Self {
        let brackets = vec![
            TaxBracket::new(Money::zero(), Some(Money::from_dollars(9_950)), 1000),
            TaxBracket::new(
                Money::from_dollars(9_950),
                Some(Money::from_dollars(40_525)),
                1200,
            ),
            TaxBracket::new(
                Money::from_dollars(40_525),
                Some(Money::from_dollars(86_375)),
                2200,
            ),
            TaxBracket::new(
                Money::from_dollars(86_375),
                Some(Money::from_dollars(164_925)),
                2400,
            ),
            TaxBracket::new(
                Money::from_dollars(164_925),
                Some(Money::from_dollars(209_425)),
                3200,
            ),
            TaxBracket::new(
                Money::from_dollars(209_425),
                Some(Money::from_dollars(523_600)),
                3500,
            ),
            TaxBracket::new(Money::from_dollars(523_600), None, 3700),
        ];
        let deduction_rules = vec![
            DeductionRule::new(
                "standard deduction",
                Money::from_dollars(12_550),
                Money::zero(),
                None,
            ),
            DeductionRule::new(
                "retirement contribution deduction",
                Money::from_dollars(6_000),
                Money::zero(),
                Some(Money::from_dollars(66_000)),
            ),
        ];

        // The built-in schedule always satisfies the shape checks
        Self {
            brackets,
            deduction_rules,
        }
    }
}
