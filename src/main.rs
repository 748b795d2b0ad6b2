use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{
    handle_expense_command, handle_export_command, handle_report_command, ExpenseCommands,
    ExportFormat, ReportCommands,
};
use spendlog::config::{paths::SpendlogPaths, settings::Settings};
use spendlog::storage::Storage;
use spendlog::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "spendlog",
    author = "Mara Ellison",
    version,
    about = "Personal expense tracking from the terminal",
    long_about = "spendlog keeps a dated, categorized log of your spending in a \
                  single JSON file. Record expenses from the command line, browse \
                  and edit them in the interactive TUI, and pull category and \
                  trend reports whenever you want to know where the money went."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Reporting commands
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export all expenses to a file or stdout
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SpendlogPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Tui) => {
            run_tui(&storage, &settings)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export { format, output, pretty }) => {
            handle_export_command(&storage, format, output, pretty)?;
        }
        Some(Commands::Init) => {
            let paths = storage.paths();
            println!("Initializing spendlog at: {}", paths.data_dir().display());
            storage.save_all()?;
            settings.save(paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'spendlog expense add 12.50 food \"Lunch\"' to record your first expense.");
            println!("Run 'spendlog tui' to launch the interactive interface.");
        }
        Some(Commands::Config) => {
            let paths = storage.paths();
            println!("spendlog Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Default filter:   {}", settings.default_filter.title());
            println!("  Date format:      {}", settings.date_format);
        }
        None => {
            println!("spendlog - Personal expense tracking from the terminal");
            println!();
            println!("Run 'spendlog --help' for usage information.");
            println!("Run 'spendlog tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
