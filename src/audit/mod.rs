//! Audit logging for finsight
//!
//! Provides an append-only audit trail of all data mutations.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
