//! Category summary report
//!
//! Reduces a set of expense records to per-category totals. The reduction is
//! pure: it works on whatever slice the caller passes (usually the currently
//! filtered view) and never touches storage or the clock.

use std::collections::HashMap;
use std::io::Write;

use chrono::NaiveDate;

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Category, Expense, FilterMode};

use super::round_cents;

/// One category's share of the summary
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Which category
    pub category: Category,
    /// Sum of amounts, rounded to cents
    pub total: f64,
    /// Number of records
    pub count: usize,
    /// Share of the grand total
    pub percentage: f64,
}

/// Totals over a set of expense records
#[derive(Debug, Clone)]
pub struct Summary {
    /// Grand total, rounded to cents
    pub total: f64,
    /// Number of records
    pub count: usize,
    /// Number of distinct categories that appear
    pub category_count: usize,
    /// Per-category totals, largest first; categories with no records are absent
    pub by_category: Vec<CategoryTotal>,
}

impl Summary {
    /// Reduce a slice of records to a summary
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut totals: HashMap<Category, (f64, usize)> = HashMap::new();
        let mut grand_total = 0.0;

        for expense in expenses {
            let value = expense.amount.value();
            grand_total += value;
            let entry = totals.entry(expense.category).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }

        let mut by_category: Vec<CategoryTotal> = totals
            .into_iter()
            .map(|(category, (total, count))| CategoryTotal {
                category,
                total: round_cents(total),
                count,
                percentage: if grand_total > 0.0 {
                    total / grand_total * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        // Largest first; equal totals fall back to name so output is stable
        by_category.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.category.name().cmp(b.category.name()))
        });

        Self {
            total: round_cents(grand_total),
            count: expenses.len(),
            category_count: by_category.len(),
            by_category,
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, title: &str, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Spending Summary: {}\n", title));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total: {}{:.2}    Records: {}    Categories: {}\n\n",
            symbol, self.total, self.count, self.category_count
        ));

        output.push_str(&format!(
            "{:<16} {:>12} {:>8} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for entry in &self.by_category {
            output.push_str(&format!(
                "{:<16} {:>12} {:>8} {:>7.1}%\n",
                entry.category.name(),
                format!("{}{:.2}", symbol, entry.total),
                entry.count,
                entry.percentage
            ));
        }

        if self.by_category.is_empty() {
            output.push_str("(no expenses)\n");
        }

        output
    }

    /// Export the summary to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SpendlogResult<()> {
        writeln!(writer, "Category,Amount,Count,Percentage")
            .map_err(|e| SpendlogError::Export(e.to_string()))?;

        for entry in &self.by_category {
            writeln!(
                writer,
                "{},{:.2},{},{:.2}",
                entry.category.name(),
                entry.total,
                entry.count,
                entry.percentage
            )
            .map_err(|e| SpendlogError::Export(e.to_string()))?;
        }

        writeln!(writer, "Total,{:.2},{},100.00", self.total, self.count)
            .map_err(|e| SpendlogError::Export(e.to_string()))?;

        Ok(())
    }
}

/// The all time / this month / past week digest
#[derive(Debug, Clone)]
pub struct StatsDigest {
    pub all_time: Summary,
    pub this_month: Summary,
    pub past_week: Summary,
}

impl StatsDigest {
    /// Build the digest from the full record set
    ///
    /// Each window reduces over the whole log, regardless of whatever filter
    /// the caller is viewing.
    pub fn from_expenses(expenses: &[Expense], today: NaiveDate) -> Self {
        let window = |mode: FilterMode| -> Vec<Expense> {
            expenses
                .iter()
                .filter(|e| mode.matches(e.date, today))
                .cloned()
                .collect()
        };

        Self {
            all_time: Summary::from_expenses(expenses),
            this_month: Summary::from_expenses(&window(FilterMode::Month)),
            past_week: Summary::from_expenses(&window(FilterMode::Week)),
        }
    }

    /// Format the digest for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Spending Statistics\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<12} {:>12} {:>10} {:>12}\n",
            "Window", "Total", "Records", "Categories"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        let rows = [
            (FilterMode::All.title(), &self.all_time),
            (FilterMode::Month.title(), &self.this_month),
            (FilterMode::Week.title(), &self.past_week),
        ];
        for (title, summary) in rows {
            output.push_str(&format!(
                "{:<12} {:>12} {:>10} {:>12}\n",
                title,
                format!("{}{:.2}", symbol, summary.total),
                summary.count,
                summary.category_count
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, ExpenseId};

    fn expense(id: u64, amount: &str, category: Category, date: NaiveDate) -> Expense {
        Expense::new(
            ExpenseId::new(id),
            Amount::parse(amount).unwrap(),
            category,
            date,
            "test",
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_category_totals() {
        let d = date(2024, 6, 15);
        let expenses = vec![
            expense(1, "10", Category::Food, d),
            expense(2, "5", Category::Food, d),
            expense(3, "3", Category::Transport, d),
        ];

        let summary = Summary::from_expenses(&expenses);

        assert_eq!(summary.total, 18.0);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.category_count, 2);
        assert_eq!(summary.by_category.len(), 2);
        assert_eq!(summary.by_category[0].category, Category::Food);
        assert_eq!(summary.by_category[0].total, 15.0);
        assert_eq!(summary.by_category[0].count, 2);
        assert_eq!(summary.by_category[1].category, Category::Transport);
        assert_eq!(summary.by_category[1].total, 3.0);
    }

    #[test]
    fn test_absent_categories_are_omitted() {
        let expenses = vec![expense(1, "10", Category::Food, date(2024, 6, 15))];
        let summary = Summary::from_expenses(&expenses);

        assert_eq!(summary.by_category.len(), 1);
        assert!(summary
            .by_category
            .iter()
            .all(|c| c.category != Category::Shopping));
    }

    #[test]
    fn test_empty_set() {
        let summary = Summary::from_expenses(&[]);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.category_count, 0);
        assert!(summary.by_category.is_empty());
    }

    #[test]
    fn test_percentages() {
        let d = date(2024, 6, 15);
        let expenses = vec![
            expense(1, "75", Category::Food, d),
            expense(2, "25", Category::Transport, d),
        ];

        let summary = Summary::from_expenses(&expenses);
        assert!((summary.by_category[0].percentage - 75.0).abs() < 0.001);
        assert!((summary.by_category[1].percentage - 25.0).abs() < 0.001);
    }

    #[test]
    fn test_equal_totals_sort_by_name() {
        let d = date(2024, 6, 15);
        let expenses = vec![
            expense(1, "5", Category::Transport, d),
            expense(2, "5", Category::Food, d),
        ];

        let summary = Summary::from_expenses(&expenses);
        assert_eq!(summary.by_category[0].category, Category::Food);
        assert_eq!(summary.by_category[1].category, Category::Transport);
    }

    #[test]
    fn test_totals_are_rounded_to_cents() {
        let d = date(2024, 6, 15);
        let expenses = vec![
            expense(1, "0.10", Category::Food, d),
            expense(2, "0.20", Category::Food, d),
        ];

        let summary = Summary::from_expenses(&expenses);
        assert_eq!(summary.total, 0.30);
        assert_eq!(summary.by_category[0].total, 0.30);
    }

    #[test]
    fn test_format_terminal() {
        let d = date(2024, 6, 15);
        let expenses = vec![
            expense(1, "10", Category::Food, d),
            expense(2, "3", Category::Transport, d),
        ];

        let out = Summary::from_expenses(&expenses).format_terminal("All Time", "$");
        assert!(out.contains("Spending Summary: All Time"));
        assert!(out.contains("Food"));
        assert!(out.contains("$10.00"));
        assert!(out.contains("Transport"));
    }

    #[test]
    fn test_export_csv() {
        let d = date(2024, 6, 15);
        let expenses = vec![
            expense(1, "10", Category::Food, d),
            expense(2, "3", Category::Transport, d),
        ];

        let mut out = Vec::new();
        Summary::from_expenses(&expenses)
            .export_csv(&mut out)
            .unwrap();

        let csv = String::from_utf8(out).unwrap();
        assert!(csv.starts_with("Category,Amount,Count,Percentage"));
        assert!(csv.contains("Food,10.00,1"));
        assert!(csv.contains("Total,13.00,2,100.00"));
    }

    #[test]
    fn test_stats_digest_windows() {
        let today = date(2024, 6, 15);
        let expenses = vec![
            expense(1, "10", Category::Food, date(2024, 6, 14)),
            expense(2, "5", Category::Food, date(2024, 6, 2)),
            expense(3, "2", Category::Food, date(2024, 3, 1)),
        ];

        let digest = StatsDigest::from_expenses(&expenses, today);
        assert_eq!(digest.all_time.total, 17.0);
        assert_eq!(digest.this_month.total, 15.0);
        assert_eq!(digest.past_week.total, 10.0);
    }

    #[test]
    fn test_stats_digest_format() {
        let digest = StatsDigest::from_expenses(&[], date(2024, 6, 15));
        let out = digest.format_terminal("$");
        assert!(out.contains("All Time"));
        assert!(out.contains("This Month"));
        assert!(out.contains("Past Week"));
    }
}
