//! Business logic services for finsight
//!
//! Services coordinate between models and storage: they validate input,
//! apply mutations, persist, and audit-log. The estimator and advisor
//! are pure computation and never touch storage.

pub mod advisor;
pub mod budget;
pub mod profile;
pub mod tax;
pub mod transaction;

pub use advisor::{InvestmentAdvisor, SavingsBucket};
pub use budget::BudgetService;
pub use profile::ProfileService;
pub use tax::TaxEstimator;
pub use transaction::TransactionService;
