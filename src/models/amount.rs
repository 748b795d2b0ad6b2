//! Amount type for expense values
//!
//! Amounts are kept as the decimal text they were entered with and parsed to
//! floating point for arithmetic. Validation happens at construction, so every
//! `Amount` in the system is positive, finite, and within bounds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest accepted expense value
pub const MAX_AMOUNT: f64 = 1_000_000.0;

/// A validated positive monetary amount
///
/// Serializes as the original decimal text (a JSON string), so a persisted
/// document keeps exactly what was entered. Deserialization runs the same
/// validation as [`Amount::parse`], which makes a tampered document fail on
/// load instead of producing a nonsense value.
///
/// # Examples
/// ```
/// use spendlog::models::Amount;
/// let amount = Amount::parse("12.50").unwrap();
/// assert_eq!(amount.value(), 12.5);
/// assert!(Amount::parse("-3").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount {
    text: String,
    value: f64,
}

impl Amount {
    /// Parse an amount from user input
    ///
    /// Accepts any decimal number strictly greater than zero and no larger
    /// than [`MAX_AMOUNT`]. Whitespace is trimmed; the trimmed text is kept
    /// as the canonical form.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let text = s.trim();
        if text.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let value: f64 = text
            .parse()
            .map_err(|_| AmountParseError::InvalidNumber(text.to_string()))?;

        if !value.is_finite() {
            return Err(AmountParseError::InvalidNumber(text.to_string()));
        }
        if value <= 0.0 {
            return Err(AmountParseError::NotPositive);
        }
        if value > MAX_AMOUNT {
            return Err(AmountParseError::TooLarge);
        }

        Ok(Self {
            text: text.to_string(),
            value,
        })
    }

    /// The numeric value, for arithmetic
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The canonical text, as persisted
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Format with a currency symbol, two decimal places
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{:.2}", symbol, self.value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value)
    }
}

impl TryFrom<String> for Amount {
    type Error = AmountParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.text
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidNumber(String),
    NotPositive,
    TooLarge,
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "Amount is required"),
            AmountParseError::InvalidNumber(s) => write!(f, "Amount must be a valid number: {}", s),
            AmountParseError::NotPositive => write!(f, "Amount must be greater than 0"),
            AmountParseError::TooLarge => write!(f, "Amount cannot exceed 1,000,000"),
        }
    }
}

impl std::error::Error for AmountParseError {}
