//! CLI commands for reports
//!
//! Provides commands for generating and exporting spending reports.

use crate::config::Settings;
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::FilterMode;
use crate::reports::{DailyTrend, StatsDigest, Summary};
use crate::services::ExpenseService;
use crate::storage::Storage;
use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Spending totals grouped by category
    Summary {
        /// Time filter (all, week, month)
        #[arg(short, long, default_value = "all")]
        filter: String,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Daily spending over the last ten days
    Trend,

    /// Spending totals for common time windows
    Stats,
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> SpendlogResult<()> {
    match cmd {
        ReportCommands::Summary { filter, output } => {
            handle_summary_report(storage, settings, filter, output)
        }
        ReportCommands::Trend => handle_trend_report(storage, settings),
        ReportCommands::Stats => handle_stats_report(storage, settings),
    }
}

/// Handle category summary report
fn handle_summary_report(
    storage: &Storage,
    settings: &Settings,
    filter: String,
    output: Option<PathBuf>,
) -> SpendlogResult<()> {
    let mode = FilterMode::parse(&filter).ok_or_else(|| {
        SpendlogError::Validation(format!(
            "Invalid filter: '{}'. Use all, week, or month",
            filter
        ))
    })?;

    let service = ExpenseService::new(storage);
    let today = chrono::Local::now().date_naive();
    let expenses = service.list(mode, today)?;
    let report = Summary::from_expenses(&expenses);

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            SpendlogError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Summary report exported to: {}", path.display());
    } else {
        println!(
            "{}",
            report.format_terminal(mode.title(), &settings.currency_symbol)
        );
    }

    Ok(())
}

/// Handle daily trend report
fn handle_trend_report(storage: &Storage, settings: &Settings) -> SpendlogResult<()> {
    let service = ExpenseService::new(storage);
    let today = chrono::Local::now().date_naive();
    let expenses = service.list(FilterMode::All, today)?;
    let report = DailyTrend::from_expenses(&expenses, today);

    println!("{}", report.format_terminal(&settings.currency_symbol));

    Ok(())
}

/// Handle stats digest report
fn handle_stats_report(storage: &Storage, settings: &Settings) -> SpendlogResult<()> {
    let service = ExpenseService::new(storage);
    let today = chrono::Local::now().date_naive();
    let expenses = service.list(FilterMode::All, today)?;
    let report = StatsDigest::from_expenses(&expenses, today);

    println!("{}", report.format_terminal(&settings.currency_symbol));

    Ok(())
}
