//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the
//! current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::services::ExpenseService;

use super::app::{ActiveDialog, ActiveView, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.refresh_today();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Dialogs swallow input first
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    handle_normal_key(app, key)
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }

        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }

        KeyCode::Tab => {
            app.toggle_view();
            return Ok(());
        }

        KeyCode::Char('1') => {
            app.switch_view(ActiveView::Register);
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.switch_view(ActiveView::Charts);
            return Ok(());
        }

        KeyCode::Char('f') => {
            app.clear_status();
            app.cycle_filter();
            return Ok(());
        }

        _ => {}
    }

    match app.active_view {
        ActiveView::Register => handle_register_key(app, key),
        ActiveView::Charts => Ok(()),
    }
}

/// Handle keys in the register view
fn handle_register_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let expense_count = app.visible_expenses().len();

    match key.code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down(expense_count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
        }
        KeyCode::Char('g') => {
            app.selected_index = 0;
        }
        KeyCode::Char('G') => {
            if expense_count > 0 {
                app.selected_index = expense_count - 1;
            }
        }

        // Add expense
        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.clear_status();
            app.open_dialog(ActiveDialog::AddExpense);
        }

        // Edit selected expense
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(expense) = app.selected_expense() {
                app.clear_status();
                app.open_dialog(ActiveDialog::EditExpense(expense.id));
            }
        }

        // Delete selected expense
        KeyCode::Char('d') => {
            if let Some(expense) = app.selected_expense() {
                app.clear_status();
                app.open_dialog(ActiveDialog::ConfirmDelete(expense.id));
            }
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Close help on any key
            app.close_dialog();
        }
        ActiveDialog::ConfirmDelete(id) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.close_dialog();
                let service = ExpenseService::new(app.storage);
                match service.delete(id) {
                    Ok(Some(_)) => {
                        app.clamp_selection();
                        app.set_status("Expense deleted");
                    }
                    Ok(None) => {
                        app.set_status("Expense already gone");
                    }
                    Err(e) => {
                        app.set_status(format!("Failed to delete: {}", e));
                    }
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.close_dialog();
            }
            _ => {}
        },
        ActiveDialog::AddExpense | ActiveDialog::EditExpense(_) => {
            super::dialogs::expense::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, SpendlogPaths};
    use crate::models::Category;
    use crate::services::ExpenseInput;
    use crate::storage::Storage;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_storage_with_expense() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let service = ExpenseService::new(&storage);
        service
            .add(ExpenseInput {
                amount: "10.00".to_string(),
                category: Category::Food,
                date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
                description: "Lunch".to_string(),
            })
            .unwrap();

        (temp_dir, storage)
    }

    #[test]
    fn test_quit_key() {
        let (_temp_dir, storage) = test_storage_with_expense();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        handle_event(&mut app, Event::Key(key(KeyCode::Char('q')))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_edit_key_opens_dialog() {
        let (_temp_dir, storage) = test_storage_with_expense();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        handle_event(&mut app, Event::Key(key(KeyCode::Char('e')))).unwrap();

        let id = app.visible_expenses()[0].id;
        assert_eq!(app.active_dialog, ActiveDialog::EditExpense(id));
    }

    #[test]
    fn test_delete_flow() {
        let (_temp_dir, storage) = test_storage_with_expense();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        handle_event(&mut app, Event::Key(key(KeyCode::Char('d')))).unwrap();
        assert!(matches!(app.active_dialog, ActiveDialog::ConfirmDelete(_)));

        handle_event(&mut app, Event::Key(key(KeyCode::Char('y')))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert!(app.visible_expenses().is_empty());
        assert_eq!(app.status_message.as_deref(), Some("Expense deleted"));
    }

    #[test]
    fn test_delete_declined_keeps_expense() {
        let (_temp_dir, storage) = test_storage_with_expense();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        handle_event(&mut app, Event::Key(key(KeyCode::Char('d')))).unwrap();
        handle_event(&mut app, Event::Key(key(KeyCode::Char('n')))).unwrap();

        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert_eq!(app.visible_expenses().len(), 1);
    }

    #[test]
    fn test_escape_cancels_form_without_mutation() {
        let (_temp_dir, storage) = test_storage_with_expense();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        handle_event(&mut app, Event::Key(key(KeyCode::Char('a')))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);

        handle_event(&mut app, Event::Key(key(KeyCode::Char('5')))).unwrap();
        handle_event(&mut app, Event::Key(key(KeyCode::Esc))).unwrap();

        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert_eq!(app.visible_expenses().len(), 1);
    }

    #[test]
    fn test_filter_cycle_key() {
        let (_temp_dir, storage) = test_storage_with_expense();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        use crate::models::FilterMode;
        assert_eq!(app.filter_mode, FilterMode::All);
        handle_event(&mut app, Event::Key(key(KeyCode::Char('f')))).unwrap();
        assert_eq!(app.filter_mode, FilterMode::Week);
    }
}
