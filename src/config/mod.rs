//! Configuration management for finsight
//!
//! Handles path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::FinsightPaths;
pub use settings::Settings;
