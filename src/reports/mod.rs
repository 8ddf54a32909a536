//! Report generation for finsight
//!
//! Reports are point-in-time computations over the stores; they are
//! generated fresh on every request and never persisted.

pub mod financial;

pub use financial::FinancialReport;
