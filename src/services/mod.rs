//! Service layer for spendlog
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, id assignment, and persistence.

pub mod expense;

pub use expense::{ExpenseInput, ExpenseService};
