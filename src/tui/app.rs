//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::models::{Expense, ExpenseId, FilterMode};
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::dialogs::expense::ExpenseFormState;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Register,
    Charts,
}

/// Currently active dialog (if any)
///
/// At most one expense is ever being entered or edited; everything
/// outside a dialog is read-only navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    EditExpense(ExpenseId),
    ConfirmDelete(ExpenseId),
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Active time filter for the expense list
    pub filter_mode: FilterMode,

    /// Selected row in the register
    pub selected_index: usize,

    /// Today's date, refreshed on tick so the window filters stay current
    pub today: NaiveDate,

    /// Status message to display
    pub status_message: Option<String>,

    /// Expense entry form state
    pub expense_form: ExpenseFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::default(),
            filter_mode: settings.default_filter,
            selected_index: 0,
            today: chrono::Local::now().date_naive(),
            status_message: None,
            expense_form: ExpenseFormState::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Refresh today's date (called on tick)
    pub fn refresh_today(&mut self) {
        self.today = chrono::Local::now().date_naive();
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    /// Toggle between register and charts
    pub fn toggle_view(&mut self) {
        self.active_view = match self.active_view {
            ActiveView::Register => ActiveView::Charts,
            ActiveView::Charts => ActiveView::Register,
        };
    }

    /// Advance the time filter (all -> week -> month -> all)
    pub fn cycle_filter(&mut self) {
        self.filter_mode = self.filter_mode.cycle();
        self.clamp_selection();
    }

    /// Expenses under the current filter, in display order
    pub fn visible_expenses(&self) -> Vec<Expense> {
        let service = ExpenseService::new(self.storage);
        service.list(self.filter_mode, self.today).unwrap_or_default()
    }

    /// The currently selected expense, if any
    pub fn selected_expense(&self) -> Option<Expense> {
        self.visible_expenses().get(self.selected_index).cloned()
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_down(&mut self, max: usize) {
        if self.selected_index < max.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the visible list
    pub fn clamp_selection(&mut self) {
        let count = self.visible_expenses().len();
        self.selected_index = self.selected_index.min(count.saturating_sub(1));
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::AddExpense => {
                self.expense_form = ExpenseFormState::new_for(self.today);
            }
            ActiveDialog::EditExpense(id) => {
                let service = ExpenseService::new(self.storage);
                if let Ok(Some(expense)) = service.get(id) {
                    self.expense_form = ExpenseFormState::from_expense(&expense);
                }
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpendlogPaths;
    use crate::models::Category;
    use crate::services::ExpenseInput;
    use tempfile::TempDir;

    fn test_app_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn add_expense(storage: &Storage, date: NaiveDate) {
        let service = ExpenseService::new(storage);
        service
            .add(ExpenseInput {
                amount: "10.00".to_string(),
                category: Category::Food,
                date,
                description: "Lunch".to_string(),
            })
            .unwrap();
    }

    #[test]
    fn test_dialog_state_machine() {
        let (_temp_dir, storage) = test_app_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        assert!(!app.has_dialog());

        app.open_dialog(ActiveDialog::AddExpense);
        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);
        assert!(app.has_dialog());

        app.close_dialog();
        assert_eq!(app.active_dialog, ActiveDialog::None);
    }

    #[test]
    fn test_edit_dialog_populates_form() {
        let (_temp_dir, storage) = test_app_storage();
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        add_expense(&storage, date);

        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        let id = app.visible_expenses()[0].id;
        app.open_dialog(ActiveDialog::EditExpense(id));

        assert_eq!(app.expense_form.amount_input.value(), "10.00");
        assert_eq!(app.expense_form.description_input.value(), "Lunch");
        assert!(app.expense_form.is_edit);
    }

    #[test]
    fn test_selection_bounds() {
        let (_temp_dir, storage) = test_app_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        app.move_up();
        assert_eq!(app.selected_index, 0);

        app.move_down(0);
        assert_eq!(app.selected_index, 0);

        app.move_down(3);
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_toggle_view() {
        let (_temp_dir, storage) = test_app_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        assert_eq!(app.active_view, ActiveView::Register);
        app.toggle_view();
        assert_eq!(app.active_view, ActiveView::Charts);
        app.toggle_view();
        assert_eq!(app.active_view, ActiveView::Register);
    }
}
