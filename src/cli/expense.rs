//! Expense CLI commands
//!
//! Implements CLI commands for expense management.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::expense::{expense_table, format_expense_details};
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Category, ExpenseId, FilterMode};
use crate::services::{ExpenseInput, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Amount spent (e.g., "12.50")
        amount: String,
        /// Category (food, transport, utilities, entertainment, healthcare, shopping, other)
        category: String,
        /// What the money went to
        description: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List expenses, most recent first
    List {
        /// Time filter (all, week, month)
        #[arg(short, long)]
        filter: Option<String>,
        /// Start date (YYYY-MM-DD), requires --to
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD), requires --from
        #[arg(long)]
        to: Option<String>,
    },
    /// Show expense details
    Show {
        /// Expense ID
        id: String,
    },
    /// Edit an expense
    Edit {
        /// Expense ID
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(short = 'D', long)]
        description: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SpendlogResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let category = parse_category(&category)?;

            let date = if let Some(date_str) = date {
                parse_date(&date_str)?
            } else {
                chrono::Local::now().date_naive()
            };

            let input = ExpenseInput {
                amount,
                category,
                date,
                description,
            };

            let expense = service.add(input)?;

            println!("Created expense:");
            println!("  ID:          {}", expense.id);
            println!("  Date:        {}", expense.date);
            println!("  Category:    {}", expense.category);
            println!(
                "  Amount:      {}",
                expense.amount.format_with_symbol(symbol)
            );
            println!("  Description: {}", expense.description);
        }

        ExpenseCommands::List { filter, from, to } => {
            let expenses = match (from, to) {
                (Some(from_str), Some(to_str)) => {
                    let start = parse_date(&from_str)?;
                    let end = parse_date(&to_str)?;
                    service.list_range(start, end)?
                }
                (None, None) => {
                    let mode = match filter {
                        Some(f) => FilterMode::parse(&f).ok_or_else(|| {
                            SpendlogError::Validation(format!(
                                "Invalid filter: '{}'. Use all, week, or month",
                                f
                            ))
                        })?,
                        None => settings.default_filter,
                    };
                    service.list(mode, chrono::Local::now().date_naive())?
                }
                _ => {
                    return Err(SpendlogError::Validation(
                        "Date ranges need both --from and --to".to_string(),
                    ))
                }
            };

            println!("{}", expense_table(&expenses, symbol));

            if !expenses.is_empty() {
                let total: f64 = expenses.iter().map(|e| e.amount.value()).sum();
                println!(
                    "\nShowing {} expenses, {}{:.2} total",
                    expenses.len(),
                    symbol,
                    total
                );
            }
        }

        ExpenseCommands::Show { id } => {
            let id = parse_expense_id(&id)?;
            let expense = service
                .get(id)?
                .ok_or_else(|| SpendlogError::expense_not_found(id))?;

            print!("{}", format_expense_details(&expense, symbol));
        }

        ExpenseCommands::Edit {
            id,
            amount,
            category,
            date,
            description,
        } => {
            let id = parse_expense_id(&id)?;
            let existing = service
                .get(id)?
                .ok_or_else(|| SpendlogError::expense_not_found(id))?;

            let category = match category {
                Some(name) => parse_category(&name)?,
                None => existing.category,
            };

            let date = match date {
                Some(date_str) => parse_date(&date_str)?,
                None => existing.date,
            };

            let input = ExpenseInput {
                amount: amount.unwrap_or_else(|| existing.amount.text().to_string()),
                category,
                date,
                description: description.unwrap_or_else(|| existing.description.clone()),
            };

            let updated = service.update(id, input)?;

            println!("Updated expense #{}", updated.id);
            println!("  Date:        {}", updated.date);
            println!("  Category:    {}", updated.category);
            println!(
                "  Amount:      {}",
                updated.amount.format_with_symbol(symbol)
            );
            println!("  Description: {}", updated.description);
        }

        ExpenseCommands::Delete { id, force } => {
            let id = parse_expense_id(&id)?;

            let expense = match service.get(id)? {
                Some(e) => e,
                None => {
                    println!("Expense #{} not found; nothing to delete", id);
                    return Ok(());
                }
            };

            if !force {
                println!("About to delete expense:");
                println!("  Date:        {}", expense.date);
                println!("  Category:    {}", expense.category);
                println!(
                    "  Amount:      {}",
                    expense.amount.format_with_symbol(symbol)
                );
                println!("  Description: {}", expense.description);
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            service.delete(id)?;
            println!(
                "Deleted expense #{} ({} {})",
                expense.id, expense.date, expense.description
            );
        }
    }

    Ok(())
}

/// Parse an expense ID argument, tolerating a leading '#'
pub(crate) fn parse_expense_id(s: &str) -> SpendlogResult<ExpenseId> {
    s.parse::<ExpenseId>()
        .map_err(|_| SpendlogError::Validation(format!("Invalid expense ID: '{}'", s)))
}

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(s: &str) -> SpendlogResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| SpendlogError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s)))
}

/// Parse a category argument
pub(crate) fn parse_category(s: &str) -> SpendlogResult<Category> {
    Category::parse(s).ok_or_else(|| {
        SpendlogError::Validation(format!(
            "Unknown category: '{}'. Use one of: {}",
            s,
            Category::ALL
                .iter()
                .map(|c| c.name().to_lowercase())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })
}
