//! spendlog - Personal expense tracking from the terminal
//!
//! This library provides the core functionality for the spendlog expense
//! tracker. Expenses are dated, categorized records kept in a single JSON
//! file, with both a scriptable CLI and an interactive TUI on top.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, filters)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Summary and trend aggregations
//! - `display`: Terminal table formatting
//! - `export`: CSV and JSON export
//! - `cli`: Command-line subcommand handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use spendlog::config::{paths::SpendlogPaths, settings::Settings};
//! use spendlog::storage::Storage;
//!
//! let paths = SpendlogPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::SpendlogError;
