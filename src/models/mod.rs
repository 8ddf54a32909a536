//! Core data models for finsight
//!
//! This module contains the data structures of the finance domain: the
//! transaction ledger, budget tracker, investment profile, and the tax
//! reference data, plus the money/period/id primitives they share.

pub mod budget;
pub mod category;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod period;
pub mod profile;
pub mod tax;
pub mod transaction;

pub use budget::{BudgetStatus, BudgetTracker};
pub use category::{reference_category, CategoryRef, REFERENCE_CATEGORIES};
pub use ids::TransactionId;
pub use ledger::Ledger;
pub use money::Money;
pub use period::Period;
pub use profile::{InvestmentProfile, RiskTolerance};
pub use tax::{DeductionRule, TaxBracket, TaxEstimate};
pub use transaction::{Transaction, TransactionKind};
