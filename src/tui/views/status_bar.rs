//! Status bar view
//!
//! Shows the active filter, record count, filtered total, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let expenses = app.visible_expenses();
    let total: f64 = expenses.iter().map(|e| e.amount.value()).sum();
    let symbol = &app.settings.currency_symbol;

    let mut spans = vec![
        Span::styled(" Filter: ", Style::default().fg(Color::White)),
        Span::styled(
            app.filter_mode.title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("{} expenses", expenses.len()),
            Style::default().fg(Color::White),
        ),
        Span::raw(" | "),
        Span::styled("Total: ", Style::default().fg(Color::White)),
        Span::styled(
            format!("{}{:.2}", symbol, total),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    // Status message if any
    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Green),
        ));
    }

    // Key hints (right-aligned)
    let hints = " q:Quit  ?:Help  Tab:View  f:Filter ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);

    frame.render_widget(paragraph, area);
}
