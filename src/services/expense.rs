//! Expense service
//!
//! Orchestrates expense CRUD: validation, id assignment, persistence. All
//! mutations go through here so the CLI and TUI share one code path.

use chrono::NaiveDate;

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{filter_and_sort, in_range, Amount, Category, Expense, ExpenseId, FilterMode};
use crate::storage::Storage;

/// Field set for creating or fully replacing an expense
///
/// The amount stays raw text here; parsing it is part of validation.
#[derive(Debug, Clone)]
pub struct ExpenseInput {
    pub amount: String,
    pub category: Category,
    pub date: NaiveDate,
    pub description: String,
}

/// Service for expense operations
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new expense record
    pub fn add(&self, input: ExpenseInput) -> SpendlogResult<Expense> {
        let amount = Amount::parse(&input.amount)
            .map_err(|e| SpendlogError::validation(e.to_string()))?;

        let expense = Expense::new(
            self.storage.expenses.allocate_id()?,
            amount,
            input.category,
            input.date,
            input.description.trim(),
        );
        expense
            .validate()
            .map_err(|e| SpendlogError::validation(e.to_string()))?;

        self.storage.expenses.insert(expense.clone())?;
        self.storage.expenses.save()?;

        Ok(expense)
    }

    /// Replace every field of an existing expense
    ///
    /// The id and creation timestamp are preserved; everything else comes
    /// from the input, which passes the same validation as [`Self::add`].
    pub fn update(&self, id: ExpenseId, input: ExpenseInput) -> SpendlogResult<Expense> {
        let mut expense = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| SpendlogError::expense_not_found(id))?;

        let amount = Amount::parse(&input.amount)
            .map_err(|e| SpendlogError::validation(e.to_string()))?;

        expense.amount = amount;
        expense.category = input.category;
        expense.date = input.date;
        expense.description = input.description.trim().to_string();
        expense
            .validate()
            .map_err(|e| SpendlogError::validation(e.to_string()))?;

        self.storage.expenses.update(expense.clone())?;
        self.storage.expenses.save()?;

        Ok(expense)
    }

    /// Delete an expense
    ///
    /// Returns the removed record, or `None` when no record had that id.
    /// Deleting an absent id is not an error; nothing is written in that
    /// case.
    pub fn delete(&self, id: ExpenseId) -> SpendlogResult<Option<Expense>> {
        let existing = self.storage.expenses.get(id)?;

        if existing.is_some() {
            self.storage.expenses.delete(id)?;
            self.storage.expenses.save()?;
        }

        Ok(existing)
    }

    /// Look up an expense by id
    pub fn get(&self, id: ExpenseId) -> SpendlogResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// Records matching a filter mode, sorted by date descending
    pub fn list(&self, mode: FilterMode, today: NaiveDate) -> SpendlogResult<Vec<Expense>> {
        let all = self.storage.expenses.get_all()?;
        Ok(filter_and_sort(&all, mode, today))
    }

    /// Records dated within an inclusive range, sorted by date descending
    pub fn list_range(&self, start: NaiveDate, end: NaiveDate) -> SpendlogResult<Vec<Expense>> {
        let all = self.storage.expenses.get_all()?;
        Ok(in_range(&all, start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendlogPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn input(amount: &str, category: Category, date: NaiveDate, description: &str) -> ExpenseInput {
        ExpenseInput {
            amount: amount.to_string(),
            category,
            date,
            description: description.to_string(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_expense() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service
            .add(input("12.50", Category::Food, date(2024, 6, 15), "Lunch"))
            .unwrap();

        assert_eq!(expense.id, ExpenseId::new(1));
        assert_eq!(expense.amount.value(), 12.5);
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.description, "Lunch");
    }

    #[test]
    fn test_add_trims_description() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service
            .add(input("5", Category::Other, date(2024, 6, 15), "  padded  "))
            .unwrap();
        assert_eq!(expense.description, "padded");
    }

    #[test]
    fn test_add_rejects_bad_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        for bad in ["", "abc", "-5", "0", "1000001"] {
            let err = service
                .add(input(bad, Category::Food, date(2024, 6, 15), "x"))
                .unwrap_err();
            assert!(err.is_validation(), "expected validation error for {:?}", bad);
        }
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_add_rejects_empty_description() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service
            .add(input("5", Category::Food, date(2024, 6, 15), "   "))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_add_persists() {
        let (temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        service
            .add(input("5", Category::Food, date(2024, 6, 15), "x"))
            .unwrap();

        let paths = SpendlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(reloaded.expenses.count().unwrap(), 1);
    }

    #[test]
    fn test_update_replaces_fields() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let original = service
            .add(input("5", Category::Food, date(2024, 6, 15), "Lunch"))
            .unwrap();

        let updated = service
            .update(
                original.id,
                input("7.25", Category::Transport, date(2024, 6, 16), "Taxi"),
            )
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.amount.value(), 7.25);
        assert_eq!(updated.category, Category::Transport);
        assert_eq!(updated.date, date(2024, 6, 16));
        assert_eq!(updated.description, "Taxi");
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service
            .update(
                ExpenseId::new(99),
                input("5", Category::Food, date(2024, 6, 15), "x"),
            )
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_update_validation_leaves_record_alone() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let original = service
            .add(input("5", Category::Food, date(2024, 6, 15), "Lunch"))
            .unwrap();

        let err = service
            .update(
                original.id,
                input("nope", Category::Food, date(2024, 6, 15), "Lunch"),
            )
            .unwrap_err();
        assert!(err.is_validation());

        let current = service.get(original.id).unwrap().unwrap();
        assert_eq!(current.amount.value(), 5.0);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service
            .add(input("5", Category::Food, date(2024, 6, 15), "x"))
            .unwrap();

        let removed = service.delete(expense.id).unwrap();
        assert_eq!(removed.map(|e| e.id), Some(expense.id));
        assert_eq!(storage.expenses.count().unwrap(), 0);

        // Second delete of the same id is a quiet no-op
        assert!(service.delete(expense.id).unwrap().is_none());
    }

    #[test]
    fn test_list_applies_filter_and_order() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let today = date(2024, 6, 15);

        service
            .add(input("1", Category::Food, date(2024, 6, 1), "old"))
            .unwrap();
        service
            .add(input("2", Category::Food, date(2024, 6, 14), "recent"))
            .unwrap();
        service
            .add(input("3", Category::Food, date(2024, 6, 8), "boundary"))
            .unwrap();

        let week = service.list(FilterMode::Week, today).unwrap();
        let descriptions: Vec<&str> = week.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["recent", "boundary"]);

        let all = service.list(FilterMode::All, today).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].description, "recent");
    }

    #[test]
    fn test_list_range() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service
            .add(input("1", Category::Food, date(2024, 6, 1), "a"))
            .unwrap();
        service
            .add(input("2", Category::Food, date(2024, 6, 10), "b"))
            .unwrap();

        let ranged = service
            .list_range(date(2024, 6, 5), date(2024, 6, 30))
            .unwrap();
        assert_eq!(ranged.len(), 1);
        assert_eq!(ranged[0].description, "b");
    }
}
