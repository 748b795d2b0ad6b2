//! Expense repository for JSON storage
//!
//! Manages loading and saving the expense log to expenses.json. The persisted
//! form is a single JSON array of expense records. Insertion order is kept
//! both in memory and on disk, so reloading and resaving a document leaves it
//! unchanged and records sharing a date keep a stable relative order.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SpendlogError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
    /// Next id to hand out; seeded from the loaded document, never rewound
    next_id: RwLock<u64>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
            next_id: RwLock::new(1),
        }
    }

    /// Load expenses from disk and seed the id counter
    pub fn load(&self) -> Result<(), SpendlogError> {
        let expenses: Vec<Expense> = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SpendlogError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut next_id = self
            .next_id
            .write()
            .map_err(|e| SpendlogError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *next_id = expenses
            .iter()
            .map(|e| e.id.value())
            .max()
            .map_or(1, |max| max + 1);
        *data = expenses;

        Ok(())
    }

    /// Save expenses to disk, replacing the whole document
    pub fn save(&self) -> Result<(), SpendlogError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendlogError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Hand out the next unique id
    pub fn allocate_id(&self) -> Result<ExpenseId, SpendlogError> {
        let mut next_id = self
            .next_id
            .write()
            .map_err(|e| SpendlogError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let id = ExpenseId::new(*next_id);
        *next_id += 1;
        Ok(id)
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, SpendlogError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendlogError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Get all expenses in insertion order
    pub fn get_all(&self) -> Result<Vec<Expense>, SpendlogError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendlogError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Append a new expense
    pub fn insert(&self, expense: Expense) -> Result<(), SpendlogError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SpendlogError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if data.iter().any(|e| e.id == expense.id) {
            return Err(SpendlogError::Storage(format!(
                "Duplicate expense id: {}",
                expense.id
            )));
        }

        data.push(expense);
        Ok(())
    }

    /// Replace an existing expense in place, keeping its position
    ///
    /// Returns false if no record with that id exists.
    pub fn update(&self, expense: Expense) -> Result<bool, SpendlogError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SpendlogError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|e| e.id == expense.id) {
            Some(slot) => {
                *slot = expense;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete an expense
    ///
    /// Returns false if no record with that id exists.
    pub fn delete(&self, id: ExpenseId) -> Result<bool, SpendlogError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SpendlogError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|e| e.id != id);
        Ok(data.len() < before)
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, SpendlogError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendlogError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
