//! JSON Export functionality
//!
//! Exports expense records to JSON format with schema versioning.

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::Expense;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Expense export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Exported expenses
    pub expenses: Vec<Expense>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of expenses
    pub expense_count: usize,

    /// Date range of expenses (earliest)
    pub earliest_date: Option<String>,

    /// Date range of expenses (latest)
    pub latest_date: Option<String>,
}

impl ExpenseExport {
    /// Create an export from a set of expenses
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let earliest_date = expenses.iter().map(|e| e.date).min().map(|d| d.to_string());
        let latest_date = expenses.iter().map(|e| e.date).max().map(|d| d.to_string());

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            earliest_date,
            latest_date,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses: expenses.to_vec(),
            metadata,
        }
    }
}

/// Export expenses to JSON
pub fn export_expenses_json<W: Write>(
    expenses: &[Expense],
    writer: &mut W,
    pretty: bool,
) -> SpendlogResult<()> {
    let export = ExpenseExport::from_expenses(expenses);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| SpendlogError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Category, ExpenseId};
    use chrono::NaiveDate;

    fn sample(id: u64, date: (i32, u32, u32)) -> Expense {
        Expense::new(
            ExpenseId::new(id),
            Amount::parse("12.50").unwrap(),
            Category::Food,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            "Lunch",
        )
    }

    #[test]
    fn test_export_structure() {
        let expenses = vec![sample(1, (2024, 6, 10)), sample(2, (2024, 6, 15))];
        let export = ExpenseExport::from_expenses(&expenses);

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.expenses.len(), 2);
        assert_eq!(export.metadata.expense_count, 2);
        assert_eq!(export.metadata.earliest_date.as_deref(), Some("2024-06-10"));
        assert_eq!(export.metadata.latest_date.as_deref(), Some("2024-06-15"));
    }

    #[test]
    fn test_export_json_parses_back() {
        let expenses = vec![sample(1, (2024, 6, 15))];

        let mut output = Vec::new();
        export_expenses_json(&expenses, &mut output, true).unwrap();

        let json_str = String::from_utf8(output).unwrap();
        let parsed: ExpenseExport = serde_json::from_str(&json_str).unwrap();

        assert_eq!(parsed.expenses.len(), 1);
        assert_eq!(parsed.expenses[0].description, "Lunch");
    }

    #[test]
    fn test_export_empty_metadata() {
        let export = ExpenseExport::from_expenses(&[]);

        assert_eq!(export.metadata.expense_count, 0);
        assert!(export.metadata.earliest_date.is_none());
        assert!(export.metadata.latest_date.is_none());
    }
}
