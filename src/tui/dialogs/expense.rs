//! Expense entry/edit dialog
//!
//! Modal dialog for adding or editing an expense with form fields,
//! tab navigation, validation, and save/cancel handling.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Amount, Category, Expense};
use crate::services::{ExpenseInput, ExpenseService};
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Amount,
    Category,
    Date,
    Description,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Description,
            Self::Description => Self::Amount,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Description,
            Self::Category => Self::Amount,
            Self::Date => Self::Category,
            Self::Description => Self::Date,
        }
    }
}

/// State for the expense form dialog
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,

    /// Amount input
    pub amount_input: TextInput,

    /// Selected category index into [`Category::ALL`]
    pub category_index: usize,

    /// Date input
    pub date_input: TextInput,

    /// Description input
    pub description_input: TextInput,

    /// Whether this is an edit (vs new expense)
    pub is_edit: bool,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Create a new form state dated today
    pub fn new() -> Self {
        Self::new_for(chrono::Local::now().date_naive())
    }

    /// Create a new form state with the given default date
    pub fn new_for(date: NaiveDate) -> Self {
        let mut state = Self {
            focused_field: ExpenseField::Amount,
            amount_input: TextInput::new().placeholder("0.00"),
            category_index: 0,
            date_input: TextInput::new()
                .placeholder("YYYY-MM-DD")
                .content(date.format("%Y-%m-%d").to_string()),
            description_input: TextInput::new().placeholder("What was this for?"),
            is_edit: false,
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// Create form state pre-populated from an existing expense
    pub fn from_expense(expense: &Expense) -> Self {
        let mut state = Self {
            focused_field: ExpenseField::Amount,
            amount_input: TextInput::new().content(expense.amount.text()),
            category_index: Category::ALL
                .iter()
                .position(|c| *c == expense.category)
                .unwrap_or(0),
            date_input: TextInput::new().content(expense.date.format("%Y-%m-%d").to_string()),
            description_input: TextInput::new().content(&expense.description),
            is_edit: true,
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    /// Update which input has focus
    fn update_focus(&mut self) {
        self.amount_input.focused = self.focused_field == ExpenseField::Amount;
        self.date_input.focused = self.focused_field == ExpenseField::Date;
        self.description_input.focused = self.focused_field == ExpenseField::Description;
    }

    /// The currently focused text input, if the focused field has one
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Amount => Some(&mut self.amount_input),
            ExpenseField::Category => None,
            ExpenseField::Date => Some(&mut self.date_input),
            ExpenseField::Description => Some(&mut self.description_input),
        }
    }

    /// The currently selected category
    pub fn category(&self) -> Category {
        Category::ALL[self.category_index % Category::ALL.len()]
    }

    /// Select the next category
    pub fn next_category(&mut self) {
        self.category_index = (self.category_index + 1) % Category::ALL.len();
    }

    /// Select the previous category
    pub fn prev_category(&mut self) {
        self.category_index = (self.category_index + Category::ALL.len() - 1) % Category::ALL.len();
    }

    /// Validate the form and return any error
    pub fn validate(&self) -> Result<(), String> {
        if let Err(e) = Amount::parse(self.amount_input.value()) {
            return Err(e.to_string());
        }

        if NaiveDate::parse_from_str(self.date_input.value(), "%Y-%m-%d").is_err() {
            return Err("Invalid date format. Use YYYY-MM-DD".to_string());
        }

        if self.description_input.value().trim().is_empty() {
            return Err("Description is required".to_string());
        }

        Ok(())
    }

    /// Build service input from the form state
    pub fn build_input(&self) -> Result<ExpenseInput, String> {
        self.validate()?;

        let date = NaiveDate::parse_from_str(self.date_input.value(), "%Y-%m-%d")
            .map_err(|_| "Invalid date")?;

        Ok(ExpenseInput {
            amount: self.amount_input.value().to_string(),
            category: self.category(),
            date,
            description: self.description_input.value().to_string(),
        })
    }

    /// Clear any error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the expense dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(56, 12, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let title = match &app.active_dialog {
        ActiveDialog::AddExpense => " Add Expense ",
        ActiveDialog::EditExpense(_) => " Edit Expense ",
        _ => " Expense ",
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    // Inner area for content
    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Date
            Constraint::Length(1), // Description
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

    let form = &app.expense_form;

    render_field(
        frame,
        chunks[0],
        "Amount",
        &form.amount_input,
        form.focused_field == ExpenseField::Amount,
    );

    render_category_field(frame, chunks[1], form);

    render_field(
        frame,
        chunks[2],
        "Date",
        &form.date_input,
        form.focused_field == ExpenseField::Date,
    );

    render_field(
        frame,
        chunks[3],
        "Description",
        &form.description_input,
        form.focused_field == ExpenseField::Description,
    );

    // Render error message if any
    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[5]);
    }

    // Render buttons/hints
    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

/// Render a single text form field
fn render_field(frame: &mut Frame, area: Rect, label: &str, input: &TextInput, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let label_span = Span::styled(format!("{:>12}: ", label), label_style);

    let value = input.value();
    let display_value = if value.is_empty() && !focused {
        input.placeholder.clone()
    } else {
        value.to_string()
    };

    let value_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut spans = vec![label_span];

    if focused {
        // Show value with a block cursor
        let chars: Vec<char> = display_value.chars().collect();
        let cursor_pos = input.cursor.min(chars.len());

        let before: String = chars[..cursor_pos].iter().collect();
        let cursor_char = chars.get(cursor_pos).copied().unwrap_or(' ');
        let after: String = chars[cursor_pos..].iter().skip(1).collect();

        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        if !after.is_empty() {
            spans.push(Span::styled(after, value_style));
        }
    } else {
        spans.push(Span::styled(display_value, value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the category selector field
fn render_category_field(frame: &mut Frame, area: Rect, form: &ExpenseFormState) {
    let focused = form.focused_field == ExpenseField::Category;

    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let value_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let arrow_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let spans = vec![
        Span::styled(format!("{:>12}: ", "Category"), label_style),
        Span::styled("< ", arrow_style),
        Span::styled(form.category().name(), value_style),
        Span::styled(" >", arrow_style),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Handle key input for the expense dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.prev_field();
            } else {
                form.next_field();
            }
        }

        KeyCode::BackTab => {
            form.prev_field();
        }

        KeyCode::Down => {
            form.next_field();
        }

        KeyCode::Up => {
            form.prev_field();
        }

        KeyCode::Enter => {
            if let Err(e) = save_expense(app) {
                app.expense_form.set_error(e);
            }
        }

        KeyCode::Left => {
            if form.focused_field == ExpenseField::Category {
                form.prev_category();
            } else if let Some(input) = form.focused_input() {
                input.move_left();
            }
        }

        KeyCode::Right => {
            if form.focused_field == ExpenseField::Category {
                form.next_category();
            } else if let Some(input) = form.focused_input() {
                input.move_right();
            }
        }

        KeyCode::Home => {
            if let Some(input) = form.focused_input() {
                input.move_start();
            }
        }

        KeyCode::End => {
            if let Some(input) = form.focused_input() {
                input.move_end();
            }
        }

        KeyCode::Backspace => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.backspace();
            }
        }

        KeyCode::Delete => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.delete();
            }
        }

        KeyCode::Char(c) => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.insert(c);
            }
        }

        _ => {}
    }
}

/// Save the expense through the service layer
fn save_expense(app: &mut App) -> Result<(), String> {
    let input = app.expense_form.build_input()?;

    let service = ExpenseService::new(app.storage);

    let is_edit = match app.active_dialog {
        ActiveDialog::EditExpense(id) => {
            service.update(id, input).map_err(|e| e.to_string())?;
            true
        }
        _ => {
            service.add(input).map_err(|e| e.to_string())?;
            false
        }
    };

    app.close_dialog();
    app.clamp_selection();
    app.set_status(if is_edit {
        "Expense updated"
    } else {
        "Expense added"
    });

    Ok(())
}
