//! Transaction value type for the expense tracker
//!
//! A transaction records one expense: an amount, a category and the moment it
//! was created. Fields are private and only readable through accessors, so a
//! transaction never changes after construction.

use crate::types::TrackerError;
use chrono::{DateTime, Local};
use rust_decimal::Decimal;

/// Display format for transaction timestamps (`dd-mm-YYYY HH:MM`)
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";

/// A single recorded expense
///
/// Created through [`Transaction::new`], which validates the amount and category
/// and stamps the current local time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    amount: Decimal,
    category: String,
    timestamp: DateTime<Local>,
}

impl Transaction {
    /// Create a new transaction stamped with the current time
    ///
    /// # Arguments
    ///
    /// * `amount` - The expense amount (must be greater than zero)
    /// * `category` - The expense category (must not be empty)
    ///
    /// # Returns
    ///
    /// * `Ok(Transaction)` - If both fields are valid
    /// * `Err(TrackerError)` - `InvalidAmount` or `EmptyCategory`
    pub fn new(amount: Decimal, category: impl Into<String>) -> Result<Self, TrackerError> {
        let category = category.into();
        Self::validate(amount, &category)?;

        Ok(Transaction {
            amount,
            category,
            timestamp: Local::now(),
        })
    }

    /// Check the invariants a transaction must satisfy
    ///
    /// Exposed so callers can reject input before building anything.
    pub fn validate(amount: Decimal, category: &str) -> Result<(), TrackerError> {
        if amount <= Decimal::ZERO {
            return Err(TrackerError::invalid_amount(amount));
        }
        if category.is_empty() {
            return Err(TrackerError::EmptyCategory);
        }
        Ok(())
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Timestamp rendered with [`TIMESTAMP_FORMAT`]
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}
