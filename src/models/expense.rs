//! Expense record model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::category::Category;
use super::ids::ExpenseId;

/// Longest accepted description, in characters
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// A single expense record
///
/// The persisted form is a JSON object with `id` as a number, `amount` as the
/// entered decimal text, `category` as the capitalized name, `date` as an ISO
/// `YYYY-MM-DD` string, and `description` as free text. `created_at` is
/// written with new records and defaulted when older documents lack it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier within the collection
    pub id: ExpenseId,

    /// How much was spent
    pub amount: Amount,

    /// What kind of spending
    pub category: Category,

    /// Calendar date the expense happened
    pub date: NaiveDate,

    /// What the money went to
    pub description: String,

    /// When the record was created
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense record
    pub fn new(
        id: ExpenseId,
        amount: Amount,
        category: Category,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            amount,
            category,
            date,
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    /// Validate the record
    ///
    /// Amount, category, and date are already valid by construction; this
    /// checks the free-text description.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        let len = self.description.chars().count();
        if len > MAX_DESCRIPTION_LEN {
            return Err(ExpenseValidationError::DescriptionTooLong(len));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {}",
            self.id, self.date, self.category, self.amount
        )
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    DescriptionTooLong(usize),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description is required"),
            Self::DescriptionTooLong(len) => {
                write!(
                    f,
                    "Description too long ({} chars, max {})",
                    len, MAX_DESCRIPTION_LEN
                )
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expense {
        Expense::new(
            ExpenseId::new(1),
            Amount::parse("12.50").unwrap(),
            Category::Food,
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            "Lunch",
        )
    }

    #[test]
    fn test_new_expense() {
        let expense = sample();
        assert_eq!(expense.id, ExpenseId::new(1));
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.description, "Lunch");
    }

    #[test]
    fn test_validation() {
        let mut expense = sample();
        assert!(expense.validate().is_ok());

        expense.description = "   ".into();
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::EmptyDescription)
        );

        expense.description = "a".repeat(256);
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::DescriptionTooLong(256))
        ));

        expense.description = "a".repeat(255);
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_persisted_field_layout() {
        let expense = sample();
        let value = serde_json::to_value(&expense).unwrap();

        assert!(value["id"].is_u64());
        assert_eq!(value["amount"], "12.50");
        assert_eq!(value["category"], "Food");
        assert_eq!(value["date"], "2024-06-15");
        assert_eq!(value["description"], "Lunch");
        assert!(value["created_at"].is_string());
    }

    #[test]
    fn test_serialization_round_trip() {
        let expense = sample();
        let json = serde_json::to_string(&expense).unwrap();
        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expense);
    }

    #[test]
    fn test_deserialize_without_created_at() {
        let json = r#"{
            "id": 3,
            "amount": "4.20",
            "category": "Transport",
            "date": "2024-06-01",
            "description": "Bus fare"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id, ExpenseId::new(3));
        assert_eq!(expense.amount.value(), 4.2);
    }

    #[test]
    fn test_display() {
        let expense = sample();
        assert_eq!(format!("{}", expense), "#1 2024-06-15 Food 12.50");
    }
}
