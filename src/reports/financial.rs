//! Monthly financial report
//!
//! Pulls one period's totals, budget status, tax estimate, and
//! investment recommendations into a single report. Generation is a
//! pure function of its inputs: no storage access, no hidden state.

use serde::{Deserialize, Serialize};

use crate::error::FinsightResult;
use crate::models::{
    BudgetStatus, BudgetTracker, InvestmentProfile, Ledger, Money, Period, TaxEstimate,
};
use crate::services::{InvestmentAdvisor, TaxEstimator};
use crate::storage::Storage;

/// A complete financial report for one period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialReport {
    /// The period covered
    pub period: Period,
    /// Sum of income transactions in the period
    pub total_income: Money,
    /// Sum of expense transactions in the period
    pub total_expenses: Money,
    /// Income minus expenses (negative when spending exceeded income)
    pub net: Money,
    /// Expense totals per category, in category order
    pub spending_by_category: Vec<(String, Money)>,
    /// One row per budgeted category, in category order
    pub budget_statuses: Vec<BudgetStatus>,
    /// Tax estimate on the period's income
    pub tax_estimate: TaxEstimate,
    /// Recommendation lines, exactly as the advisor produced them
    pub recommendations: Vec<String>,
}

impl FinancialReport {
    /// Generate a report for a period
    ///
    /// Fails with whatever error the first failing sub-computation
    /// raises; in particular `NoProfileSet` when advice is requested
    /// without a stored profile. No partial report is ever produced.
    pub fn generate(
        ledger: &Ledger,
        budgets: &BudgetTracker,
        estimator: &TaxEstimator,
        advisor: &InvestmentAdvisor,
        profile: Option<&InvestmentProfile>,
        period: Period,
    ) -> FinsightResult<Self> {
        let total_income = ledger.total_income(period);
        let total_expenses = ledger.total_expenses(period);
        let spending_by_category = ledger.expenses_by_category(period);
        let budget_statuses = budgets.status(ledger, period);
        let tax_estimate = estimator.estimate(total_income)?;
        let recommendations = advisor.recommend(profile, total_income, total_expenses)?;

        Ok(Self {
            period,
            total_income,
            total_expenses,
            net: total_income - total_expenses,
            spending_by_category,
            budget_statuses,
            tax_estimate,
            recommendations,
        })
    }

    /// Generate a report from the current storage snapshots
    pub fn generate_from_storage(
        storage: &Storage,
        estimator: &TaxEstimator,
        advisor: &InvestmentAdvisor,
        period: Period,
    ) -> FinsightResult<Self> {
        let ledger = storage.ledger.snapshot()?;
        let budgets = storage.budgets.snapshot()?;
        let profile = storage.profile.get()?;

        Self::generate(
            &ledger,
            &budgets,
            estimator,
            advisor,
            profile.as_ref(),
            period,
        )
    }

    /// Savings rate as a percentage (0 when there was no income)
    pub fn savings_rate(&self) -> f64 {
        if self.total_income.is_zero() {
            return 0.0;
        }
        (self.net.cents() as f64 / self.total_income.cents() as f64) * 100.0
    }

    /// General observations derived from the report figures
    ///
    /// These are display-layer notes, deliberately kept out of
    /// `recommendations` so that field stays exactly the advisor's
    /// output.
    pub fn general_notes(&self) -> Vec<String> {
        let mut notes = Vec::new();

        if self.savings_rate() < 20.0 {
            notes.push(
                "Consider increasing your savings rate to at least 20% of income".to_string(),
            );
        }

        let housing = self
            .spending_by_category
            .iter()
            .find(|(category, _)| category == "Housing")
            .map(|(_, total)| *total);
        if let Some(housing) = housing {
            // Strictly above 30% of income
            if housing.cents() as i128 * 10 > self.total_income.cents() as i128 * 3 {
                notes.push(
                    "Housing costs exceed 30% of income - consider ways to reduce housing expenses"
                        .to_string(),
                );
            }
        }

        notes
    }

    /// Number of budgeted categories currently over their limit
    pub fn over_budget_count(&self) -> usize {
        self.budget_statuses.iter().filter(|s| s.over_budget).count()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Financial Report - {}\n", self.period));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!("{:<18} {:>14}\n", "Total Income:", self.total_income));
        output.push_str(&format!(
            "{:<18} {:>14}\n",
            "Total Expenses:", self.total_expenses
        ));
        output.push_str(&format!("{:<18} {:>14}\n", "Net Income:", self.net));
        output.push_str(&format!(
            "{:<18} {:>13.1}%\n",
            "Savings Rate:",
            self.savings_rate()
        ));

        if !self.budget_statuses.is_empty() {
            output.push_str("\nBudget Status:\n");
            output.push_str(&format!(
                "  {:<20} {:>12} {:>12} {:>12}\n",
                "Category", "Limit", "Spent", "Remaining"
            ));
            output.push_str(&format!("  {}\n", "-".repeat(58)));
            for status in &self.budget_statuses {
                let remaining_display = if status.over_budget {
                    format!("{} *", status.remaining)
                } else {
                    status.remaining.to_string()
                };
                output.push_str(&format!(
                    "  {:<20} {:>12} {:>12} {:>12}\n",
                    status.category, status.limit, status.spent, remaining_display
                ));
            }
            if self.over_budget_count() > 0 {
                output.push_str("  * = Over budget\n");
            }
        }

        output.push_str("\nTax Estimate:\n");
        output.push_str(&format!(
            "  {:<16} {:>14}\n",
            "Gross Income:", self.tax_estimate.gross_income
        ));
        if !self.tax_estimate.deductions_applied.is_empty() {
            output.push_str(&format!(
                "  {:<16} {}\n",
                "Deductions:",
                self.tax_estimate.deductions_applied.join(", ")
            ));
        }
        output.push_str(&format!(
            "  {:<16} {:>14}\n",
            "Taxable Income:", self.tax_estimate.taxable_income
        ));
        output.push_str(&format!(
            "  {:<16} {:>14}\n",
            "Estimated Tax:", self.tax_estimate.tax
        ));
        output.push_str(&format!(
            "  {:<16} {:>13.1}%\n",
            "Effective Rate:",
            self.tax_estimate.effective_rate() * 100.0
        ));

        output.push_str("\nRecommendations:\n");
        for line in &self.recommendations {
            output.push_str(&format!("- {}\n", line));
        }

        let notes = self.general_notes();
        if !notes.is_empty() {
            output.push_str("\nNotes:\n");
            for note in &notes {
                output.push_str(&format!("- {}\n", note));
            }
        }

        output
    }
}
