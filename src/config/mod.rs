//! Configuration module for spendlog
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpendlogPaths;
pub use settings::Settings;
