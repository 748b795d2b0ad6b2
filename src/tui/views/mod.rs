//! TUI Views module
//!
//! Contains the register and charts views plus the tab line and status bar.

pub mod charts;
pub mod register;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);

    match app.active_view {
        ActiveView::Register => {
            register::render(frame, app, layout.main);
        }
        ActiveView::Charts => {
            charts::render(frame, app, layout.main);
        }
    }

    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render the view tab line
fn render_tabs(frame: &mut Frame, app: &mut App, area: Rect) {
    let active = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(Color::DarkGray);

    let (register_style, charts_style) = match app.active_view {
        ActiveView::Register => (active, inactive),
        ActiveView::Charts => (inactive, active),
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled("[1] Register", register_style),
        Span::raw("  "),
        Span::styled("[2] Charts", charts_style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::Help => {
            dialogs::help::render(frame, app);
        }
        ActiveDialog::ConfirmDelete(_) => {
            dialogs::confirm::render(frame, "Delete this expense?");
        }
        ActiveDialog::AddExpense | ActiveDialog::EditExpense(_) => {
            dialogs::expense::render(frame, app);
        }
        ActiveDialog::None => {}
    }
}
