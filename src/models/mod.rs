//! Core data models for spendlog
//!
//! This module contains the data structures that represent the expense log
//! domain: expense records, amounts, categories, and time-window filters.

pub mod amount;
pub mod category;
pub mod expense;
pub mod filter;
pub mod ids;

pub use amount::{Amount, AmountParseError, MAX_AMOUNT};
pub use category::Category;
pub use expense::{Expense, ExpenseValidationError, MAX_DESCRIPTION_LEN};
pub use filter::{filter_and_sort, in_range, FilterMode};
pub use ids::ExpenseId;
