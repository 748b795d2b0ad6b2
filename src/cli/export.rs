//! CLI commands for data export
//!
//! Provides commands for exporting expense data in various formats.

use crate::error::{SpendlogError, SpendlogResult};
use crate::export::{export_expenses_csv, export_expenses_json};
use crate::models::{Expense, FilterMode};
use crate::services::ExpenseService;
use crate::storage::Storage;
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (spreadsheet-compatible)
    Csv,
    /// JSON format (schema-versioned)
    Json,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
    pretty: bool,
) -> SpendlogResult<()> {
    let service = ExpenseService::new(storage);
    let today = chrono::Local::now().date_naive();
    let expenses = service.list(FilterMode::All, today)?;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                SpendlogError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(&expenses, format, &mut writer, pretty)?;
            println!("Exported {} expenses to: {}", expenses.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(&expenses, format, &mut writer, pretty)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    expenses: &[Expense],
    format: ExportFormat,
    writer: &mut W,
    pretty: bool,
) -> SpendlogResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(expenses, writer),
        ExportFormat::Json => export_expenses_json(expenses, writer, pretty),
    }
}
