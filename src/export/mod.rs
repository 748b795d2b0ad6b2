//! Export module for spendlog
//!
//! Provides expense data export in multiple formats:
//! - CSV: For spreadsheet-compatible expense lists
//! - JSON: For machine-readable export with schema versioning

pub mod csv;
pub mod json;

pub use csv::export_expenses_csv;
pub use json::{export_expenses_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
