//! Tax reference data and estimate results
//!
//! Brackets and deduction rules are plain data; the estimator in
//! `services::tax` owns an ordered schedule of them. Rates are stored in
//! basis points so slice tax stays in integer cents.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// One progressive tax bracket: income in `[lower, upper)` is taxed at
/// `rate_bp` basis points. The last bracket of a schedule has no upper
/// bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower: Money,
    pub upper: Option<Money>,
    /// Rate in basis points (1000 = 10.00%)
    pub rate_bp: u32,
}

impl TaxBracket {
    pub const fn new(lower: Money, upper: Option<Money>, rate_bp: u32) -> Self {
        Self { lower, upper, rate_bp }
    }

    /// The rate as a fraction in [0, 1]
    pub fn rate(&self) -> f64 {
        self.rate_bp as f64 / 10_000.0
    }

    /// How much of `taxable` falls inside this bracket
    pub fn slice_of(&self, taxable: Money) -> Money {
        let capped = match self.upper {
            Some(upper) => taxable.min(upper),
            None => taxable,
        };
        if capped <= self.lower {
            Money::zero()
        } else {
            capped - self.lower
        }
    }

    /// Tax owed on this bracket's slice of `taxable`, floored to whole cents
    pub fn tax_on(&self, taxable: Money) -> Money {
        let slice = self.slice_of(taxable);
        // i128 keeps the basis-point product from overflowing
        let cents = slice.cents() as i128 * self.rate_bp as i128 / 10_000;
        Money::from_cents(cents as i64)
    }
}

impl fmt::Display for TaxBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper {
            Some(upper) => write!(
                f,
                "{} - {} @ {:.0}%",
                self.lower,
                upper,
                self.rate() * 100.0
            ),
            None => write!(f, "{} and up @ {:.0}%", self.lower, self.rate() * 100.0),
        }
    }
}

/// An income-predicated deduction
///
/// The rule applies when gross income is strictly above `floor` and, if a
/// ceiling is set, strictly below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionRule {
    pub description: String,
    pub amount: Money,
    /// Exclusive lower bound on gross income
    pub floor: Money,
    /// Exclusive upper bound on gross income, if the deduction phases out
    pub ceiling: Option<Money>,
}

impl DeductionRule {
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        floor: Money,
        ceiling: Option<Money>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            floor,
            ceiling,
        }
    }

    /// Whether the rule applies at the given gross income
    pub fn applies(&self, gross_income: Money) -> bool {
        gross_income > self.floor
            && self.ceiling.map_or(true, |ceiling| gross_income < ceiling)
    }
}

/// Result of a tax estimate (derived, never stored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxEstimate {
    pub gross_income: Money,
    pub taxable_income: Money,
    pub tax: Money,
    /// Descriptions of the deduction rules that applied, in rule order
    pub deductions_applied: Vec<String>,
}

impl TaxEstimate {
    /// Tax as a fraction of gross income (0 when gross income is 0)
    pub fn effective_rate(&self) -> f64 {
        if self.gross_income.is_zero() {
            0.0
        } else {
            self.tax.cents() as f64 / self.gross_income.cents() as f64
        }
    }
}

impl fmt::Display for TaxEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} taxable ({:.1}% effective)",
            self.tax,
            self.taxable_income,
            self.effective_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bracket() -> TaxBracket {
        // $100 - $200 at 10%
        TaxBracket::new(
            Money::from_dollars(100),
            Some(Money::from_dollars(200)),
            1000,
        )
    }

    #[test]
    fn test_slice_below_bracket() {
        assert_eq!(bracket().slice_of(Money::from_dollars(50)), Money::zero());
        assert_eq!(bracket().slice_of(Money::from_dollars(100)), Money::zero());
    }

    #[test]
    fn test_slice_inside_bracket() {
        assert_eq!(
            bracket().slice_of(Money::from_dollars(150)),
            Money::from_dollars(50)
        );
    }

    #[test]
    fn test_slice_above_bracket_caps_at_upper() {
        assert_eq!(
            bracket().slice_of(Money::from_dollars(500)),
            Money::from_dollars(100)
        );
    }

    #[test]
    fn test_unbounded_bracket() {
        let top = TaxBracket::new(Money::from_dollars(100), None, 3700);
        assert_eq!(
            top.slice_of(Money::from_dollars(1100)),
            Money::from_dollars(1000)
        );
    }

    #[test]
    fn test_tax_on_floors_to_cents() {
        // $0.33 slice at 10% = 3.3 cents, floored to 3
        let b = TaxBracket::new(Money::zero(), None, 1000);
        assert_eq!(b.tax_on(Money::from_cents(33)), Money::from_cents(3));
    }

    #[test]
    fn test_rule_window() {
        let rule = DeductionRule::new(
            "retirement contribution deduction",
            Money::from_dollars(6000),
            Money::zero(),
            Some(Money::from_dollars(66_000)),
        );
        assert!(!rule.applies(Money::zero()));
        assert!(rule.applies(Money::from_cents(1)));
        assert!(rule.applies(Money::from_dollars(65_999)));
        assert!(!rule.applies(Money::from_dollars(66_000)));
        assert!(!rule.applies(Money::from_dollars(100_000)));
    }

    #[test]
    fn test_rule_without_ceiling() {
        let rule = DeductionRule::new(
            "standard deduction",
            Money::from_dollars(12_550),
            Money::zero(),
            None,
        );
        assert!(!rule.applies(Money::zero()));
        assert!(rule.applies(Money::from_dollars(1_000_000)));
    }

    #[test]
    fn test_effective_rate() {
        let estimate = TaxEstimate {
            gross_income: Money::from_dollars(1000),
            taxable_income: Money::from_dollars(1000),
            tax: Money::from_dollars(100),
            deductions_applied: vec![],
        };
        assert!((estimate.effective_rate() - 0.1).abs() < 1e-9);

        let zero = TaxEstimate {
            gross_income: Money::zero(),
            taxable_income: Money::zero(),
            tax: Money::zero(),
            deductions_applied: vec![],
        };
        assert_eq!(zero.effective_rate(), 0.0);
    }

    #[test]
    fn test_bracket_display() {
        assert_eq!(format!("{}", bracket()), "$100.00 - $200.00 @ 10%");
        let top = TaxBracket::new(Money::from_dollars(523_600), None, 3700);
        assert_eq!(format!("{}", top), "$523600.00 and up @ 37%");
    }
}
