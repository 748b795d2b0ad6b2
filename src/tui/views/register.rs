//! Expense register view
//!
//! Shows the filtered expense list with a selectable row

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::truncate;
use crate::tui::app::App;
use crate::tui::layout::MainPanelLayout;

/// Render the expense register
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);

    render_header(frame, app, layout.header);
    render_expense_table(frame, app, layout.content);
}

/// Render register header
fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = format!(" Expenses - {} ", app.filter_mode.title());
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let hints = "a:Add  e:Edit  d:Delete  f:Filter";

    let paragraph = Paragraph::new(hints)
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Render the expense table
fn render_expense_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let expenses = app.visible_expenses();

    if expenses.is_empty() {
        let text = Paragraph::new("No expenses. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(6),  // ID
        Constraint::Length(12), // Date
        Constraint::Length(15), // Category
        Constraint::Length(12), // Amount
        Constraint::Min(10),    // Description
    ];

    let header = Row::new(vec![
        Cell::from("ID").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Description").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = &app.settings.currency_symbol;

    let rows: Vec<Row> = expenses
        .iter()
        .map(|expense| {
            Row::new(vec![
                Cell::from(format!("#{}", expense.id)),
                Cell::from(expense.date.format("%Y-%m-%d").to_string()),
                Cell::from(expense.category.name()),
                Cell::from(expense.amount.format_with_symbol(symbol))
                    .style(Style::default().fg(Color::Red)),
                Cell::from(truncate(&expense.description, 40)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index.min(expenses.len().saturating_sub(1))));

    frame.render_stateful_widget(table, area, &mut state);
}
