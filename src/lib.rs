//! finsight - Personal finance assistant for the terminal
//!
//! This library provides the core functionality for the finsight CLI. It
//! keeps a validated transaction ledger, tracks spending against monthly
//! budgets, estimates income tax from a bracket schedule, and gives
//! savings-rate-aware investment guidance, all persisted as JSON files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (ledger, budgets, profile, tax schedule)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Derived monthly report
//! - `audit`: Audit logging system
//! - `display`: Terminal rendering helpers
//! - `export`: Full data export (JSON, CSV, YAML)
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finsight::config::{FinsightPaths, Settings};
//!
//! let paths = FinsightPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinsightError, FinsightResult};
