//! Daily spending trend
//!
//! Buckets a set of expense records into the trailing ten calendar days.
//! Every day in the window is present, zero when nothing was spent, so the
//! series always has the same shape no matter the data. Like the summary,
//! the reduction is pure and works on whatever slice the caller passes.

use chrono::{Duration, NaiveDate};

use crate::models::Expense;

use super::round_cents;

/// Number of days in the trend window, ending today
pub const TREND_DAYS: usize = 10;

/// Spending total for one calendar day
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: f64,
}

/// Spending totals for the trailing [`TREND_DAYS`] days, earliest first
#[derive(Debug, Clone)]
pub struct DailyTrend {
    pub days: Vec<DailyTotal>,
}

impl DailyTrend {
    /// Bucket records into the window ending at `today`
    ///
    /// A record contributes only when its date exactly matches a bucket;
    /// anything outside the window is ignored.
    pub fn from_expenses(expenses: &[Expense], today: NaiveDate) -> Self {
        let start = today - Duration::days(TREND_DAYS as i64 - 1);

        let mut days: Vec<DailyTotal> = (0..TREND_DAYS)
            .map(|offset| DailyTotal {
                date: start + Duration::days(offset as i64),
                total: 0.0,
            })
            .collect();

        for expense in expenses {
            if expense.date < start || expense.date > today {
                continue;
            }
            let index = (expense.date - start).num_days() as usize;
            days[index].total += expense.amount.value();
        }

        for day in &mut days {
            day.total = round_cents(day.total);
        }

        Self { days }
    }

    /// The largest single-day total in the window
    pub fn max_total(&self) -> f64 {
        self.days.iter().fold(0.0, |max, d| d.total.max(max))
    }

    /// Day totals in cents, for sparkline-style rendering
    pub fn values(&self) -> Vec<u64> {
        self.days
            .iter()
            .map(|d| (d.total * 100.0).round() as u64)
            .collect()
    }

    /// Format the trend for terminal display with proportional bars
    pub fn format_terminal(&self, symbol: &str) -> String {
        const BAR_WIDTH: f64 = 30.0;

        let mut output = String::new();
        output.push_str(&format!("Daily Spending (last {} days)\n", TREND_DAYS));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        let max = self.max_total();
        for day in &self.days {
            let bar = if max > 0.0 {
                let len = (day.total / max * BAR_WIDTH).round() as usize;
                "#".repeat(len)
            } else {
                String::new()
            };
            output.push_str(&format!(
                "{}  {:>10}  {}\n",
                day.date,
                format!("{}{:.2}", symbol, day.total),
                bar
            ));
        }

        output
    }
}
