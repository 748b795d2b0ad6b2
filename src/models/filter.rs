//! Time-window filters over the expense log
//!
//! Filtering is pure: the reference date is always passed in, never read from
//! the clock, so every window computation is reproducible in tests.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::Expense;

/// Width of the trailing-week window, in days
const WEEK_WINDOW_DAYS: i64 = 7;

/// Which slice of the log is in view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Every record
    All,
    /// Records dated within the trailing seven days
    Week,
    /// Records from the current calendar month
    Month,
}

impl FilterMode {
    /// Whether a record dated `date` falls inside this window relative to `today`
    ///
    /// The week window keeps everything dated on or after `today - 7 days`,
    /// boundary day included and with no upper bound. The month window keeps
    /// records sharing `today`'s calendar year and month.
    pub fn matches(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Week => date >= today - Duration::days(WEEK_WINDOW_DAYS),
            Self::Month => date.year() == today.year() && date.month() == today.month(),
        }
    }

    /// Parse a filter mode from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(Self::All),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            _ => None,
        }
    }

    /// The next mode in the cycle all -> week -> month -> all
    pub fn cycle(&self) -> Self {
        match self {
            Self::All => Self::Week,
            Self::Week => Self::Month,
            Self::Month => Self::All,
        }
    }

    /// Human title for report headers
    pub fn title(&self) -> &'static str {
        match self {
            Self::All => "All Time",
            Self::Week => "Past Week",
            Self::Month => "This Month",
        }
    }
}

impl Default for FilterMode {
    fn default() -> Self {
        Self::All
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Week => write!(f, "Week"),
            Self::Month => write!(f, "Month"),
        }
    }
}

/// Apply a filter mode and return the records sorted by date descending
///
/// The sort is stable, so records sharing a date keep their insertion order.
pub fn filter_and_sort(expenses: &[Expense], mode: FilterMode, today: NaiveDate) -> Vec<Expense> {
    let mut out: Vec<Expense> = expenses
        .iter()
        .filter(|e| mode.matches(e.date, today))
        .cloned()
        .collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

/// Records dated within `start..=end`, sorted by date descending
///
/// An inverted range matches nothing.
pub fn in_range(expenses: &[Expense], start: NaiveDate, end: NaiveDate) -> Vec<Expense> {
    let mut out: Vec<Expense> = expenses
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .cloned()
        .collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Category, ExpenseId};

    fn expense(id: u64, date: NaiveDate) -> Expense {
        Expense::new(
            ExpenseId::new(id),
            Amount::parse("5").unwrap(),
            Category::Other,
            date,
            "test",
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_all_matches_everything() {
        let today = date(2024, 6, 15);
        assert!(FilterMode::All.matches(date(1999, 1, 1), today));
        assert!(FilterMode::All.matches(date(2030, 12, 31), today));
    }

    #[test]
    fn test_week_includes_boundary_day() {
        let today = date(2024, 6, 15);
        assert!(FilterMode::Week.matches(date(2024, 6, 8), today));
        assert!(!FilterMode::Week.matches(date(2024, 6, 7), today));
        assert!(FilterMode::Week.matches(today, today));
    }

    #[test]
    fn test_week_has_no_upper_bound() {
        let today = date(2024, 6, 15);
        assert!(FilterMode::Week.matches(date(2024, 6, 16), today));
    }

    #[test]
    fn test_month_boundaries() {
        let today = date(2024, 6, 15);
        assert!(FilterMode::Month.matches(date(2024, 6, 1), today));
        assert!(FilterMode::Month.matches(date(2024, 6, 30), today));
        assert!(!FilterMode::Month.matches(date(2024, 5, 31), today));
        assert!(!FilterMode::Month.matches(date(2024, 7, 1), today));
        // Same month of a different year is out
        assert!(!FilterMode::Month.matches(date(2023, 6, 15), today));
    }

    #[test]
    fn test_filter_and_sort_descending() {
        let expenses = vec![
            expense(1, date(2024, 6, 1)),
            expense(2, date(2024, 6, 10)),
            expense(3, date(2024, 6, 5)),
        ];
        let sorted = filter_and_sort(&expenses, FilterMode::All, date(2024, 6, 15));
        let dates: Vec<NaiveDate> = sorted.iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 6, 10), date(2024, 6, 5), date(2024, 6, 1)]
        );
    }

    #[test]
    fn test_sort_keeps_insertion_order_on_ties() {
        let expenses = vec![
            expense(1, date(2024, 6, 10)),
            expense(2, date(2024, 6, 10)),
            expense(3, date(2024, 6, 10)),
        ];
        let sorted = filter_and_sort(&expenses, FilterMode::All, date(2024, 6, 15));
        let ids: Vec<u64> = sorted.iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_week_filter_drops_old_records() {
        let today = date(2024, 6, 15);
        let expenses = vec![
            expense(1, date(2024, 6, 14)),
            expense(2, date(2024, 6, 7)),
            expense(3, date(2024, 6, 8)),
        ];
        let filtered = filter_and_sort(&expenses, FilterMode::Week, today);
        let ids: Vec<u64> = filtered.iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_in_range_inclusive() {
        let expenses = vec![
            expense(1, date(2024, 6, 1)),
            expense(2, date(2024, 6, 10)),
            expense(3, date(2024, 6, 20)),
        ];
        let ranged = in_range(&expenses, date(2024, 6, 1), date(2024, 6, 10));
        let ids: Vec<u64> = ranged.iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_in_range_inverted_is_empty() {
        let expenses = vec![expense(1, date(2024, 6, 5))];
        assert!(in_range(&expenses, date(2024, 6, 10), date(2024, 6, 1)).is_empty());
    }

    #[test]
    fn test_cycle() {
        assert_eq!(FilterMode::All.cycle(), FilterMode::Week);
        assert_eq!(FilterMode::Week.cycle(), FilterMode::Month);
        assert_eq!(FilterMode::Month.cycle(), FilterMode::All);
    }

    #[test]
    fn test_parse() {
        assert_eq!(FilterMode::parse("all"), Some(FilterMode::All));
        assert_eq!(FilterMode::parse("WEEK"), Some(FilterMode::Week));
        assert_eq!(FilterMode::parse("Month"), Some(FilterMode::Month));
        assert_eq!(FilterMode::parse("year"), None);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&FilterMode::Week).unwrap(),
            "\"week\""
        );
        let back: FilterMode = serde_json::from_str("\"month\"").unwrap();
        assert_eq!(back, FilterMode::Month);
    }
}
