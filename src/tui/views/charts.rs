//! Charts view
//!
//! Category totals as a bar chart plus the trailing ten days of
//! spending as a sparkline, both under the current filter.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Sparkline},
    Frame,
};

use crate::display::truncate;
use crate::reports::{DailyTrend, Summary};
use crate::tui::app::App;
use crate::tui::layout::ChartsLayout;

/// Render the charts view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = ChartsLayout::new(area);
    let expenses = app.visible_expenses();

    render_category_chart(frame, app, layout.categories, &expenses);
    render_trend_sparkline(frame, app, layout.trend, &expenses);
}

/// Render spending-by-category bars
fn render_category_chart(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    expenses: &[crate::models::Expense],
) {
    let title = format!(" Spending by Category - {} ", app.filter_mode.title());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

    let summary = Summary::from_expenses(expenses);

    if summary.by_category.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No expenses under this filter.",
            Style::default().fg(Color::DarkGray),
        )))
        .centered()
        .block(block);
        frame.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = summary
        .by_category
        .iter()
        .map(|cat| {
            let label = truncate(cat.category.name(), 10);
            Bar::default()
                .value(cat.total.round() as u64)
                .label(Line::from(label))
                .style(Style::default().fg(Color::Cyan))
                .value_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::White));

    frame.render_widget(chart, area);
}

/// Render the ten-day spending sparkline
fn render_trend_sparkline(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    expenses: &[crate::models::Expense],
) {
    let trend = DailyTrend::from_expenses(expenses, app.today);
    let data = trend.values();

    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Last 10 Days ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .data(&data)
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(sparkline, area);
}
