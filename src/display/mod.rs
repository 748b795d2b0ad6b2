//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod expense;

pub use expense::{expense_table, format_expense_details, truncate};
