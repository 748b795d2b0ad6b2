//! CSV Export functionality
//!
//! Exports expense records to CSV format for spreadsheet use.

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::Expense;
use std::io::Write;

/// Export expenses to CSV, one row per record
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> SpendlogResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["id", "date", "category", "amount", "description", "created_at"])
        .map_err(|e| SpendlogError::Export(e.to_string()))?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.date.to_string(),
                expense.category.name().to_string(),
                expense.amount.text().to_string(),
                expense.description.clone(),
                expense.created_at.to_rfc3339(),
            ])
            .map_err(|e| SpendlogError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| SpendlogError::Export(e.to_string()))?;

    Ok(())
}
