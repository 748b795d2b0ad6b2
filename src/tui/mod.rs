//! Terminal User Interface module
//!
//! This module provides an interactive TUI for spendlog using ratatui.
//! It includes a register view for browsing expenses, a charts view for
//! spending breakdowns, and dialogs for data entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
