//! Reports module for spendlog
//!
//! Pure reductions over expense records: per-category summaries, the
//! all/month/week statistics digest, and the trailing daily trend.

pub mod summary;
pub mod trend;

pub use summary::{CategoryTotal, StatsDigest, Summary};
pub use trend::{DailyTotal, DailyTrend, TREND_DAYS};

/// Round a floating total to cents
pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
