//! Display formatting for expense records

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Render expenses as a table, one row per record
pub fn expense_table(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow {
            id: e.id.value(),
            date: e.date.to_string(),
            category: e.category.name(),
            amount: e.amount.format_with_symbol(symbol),
            description: truncate(&e.description, 40),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));
    table.to_string()
}

/// Render a single expense as a detail block
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense #{}\n", expense.id));
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!("Date:        {}\n", expense.date));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Created:     {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

/// Truncate a string to a maximum display length
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Category, ExpenseId};
    use chrono::NaiveDate;

    fn sample() -> Expense {
        Expense::new(
            ExpenseId::new(7),
            Amount::parse("12.50").unwrap(),
            Category::Food,
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            "Lunch at the corner place",
        )
    }

    #[test]
    fn test_expense_table() {
        let table = expense_table(&[sample()], "$");
        assert!(table.contains("ID"));
        assert!(table.contains("2024-06-15"));
        assert!(table.contains("Food"));
        assert!(table.contains("$12.50"));
        assert!(table.contains("Lunch at the corner place"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(expense_table(&[], "$"), "No expenses recorded.");
    }

    #[test]
    fn test_details() {
        let details = format_expense_details(&sample(), "$");
        assert!(details.contains("Expense #7"));
        assert!(details.contains("Date:        2024-06-15"));
        assert!(details.contains("Category:    Food"));
        assert!(details.contains("Amount:      $12.50"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly ten", 11), "exactly ten");
        assert_eq!(truncate("this is too long", 10), "this is...");
    }
}
