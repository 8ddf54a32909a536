//! Display formatting for terminal output
//!
//! Formats data models for the terminal, including tables, colors, and
//! usage bars. Nothing here mutates state; every function renders to a
//! `String` the CLI layer prints.

pub mod budget;
pub mod format;
pub mod transaction;

pub use budget::format_budget_status;
pub use format::{format_bar, format_money_colored, format_percentage};
pub use transaction::{format_transaction_confirmation, format_transaction_list};
