//! Expense categories
//!
//! The category set is fixed. Persisted documents store the capitalized
//! category name as a plain string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Groceries and dining out
    Food,
    /// Fuel, transit fares, ride shares
    Transport,
    /// Recurring household bills: power, water, internet
    Utilities,
    /// Movies, games, subscriptions
    Entertainment,
    /// Medical, dental, pharmacy
    Healthcare,
    /// Clothing and general retail
    Shopping,
    /// Anything that fits nowhere else
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Entertainment,
        Category::Healthcare,
        Category::Shopping,
        Category::Other,
    ];

    /// Parse a category from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "transport" => Some(Self::Transport),
            "utilities" => Some(Self::Utilities),
            "entertainment" => Some(Self::Entertainment),
            "healthcare" => Some(Self::Healthcare),
            "shopping" => Some(Self::Shopping),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// The persisted/display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
