//! Transaction filters
//!
//! A filter selects the subset of transactions shown to the user. Filters are
//! pure: they read a slice of transactions and return the matching ones in their
//! original order, never touching the model.
//!
//! - [`AmountFilter`] - Transactions with exactly the given amount
//! - [`CategoryFilter`] - Transactions with exactly the given category

mod amount;
mod category;

pub use amount::AmountFilter;
pub use category::CategoryFilter;

use crate::types::Transaction;
use std::fmt::Debug;

/// Predicate-based selection over a list of transactions
///
/// Implementors only need [`matches`](TransactionFilter::matches); `apply`
/// keeps matching transactions in their relative order.
pub trait TransactionFilter: Debug {
    /// Whether a single transaction passes the filter
    fn matches(&self, transaction: &Transaction) -> bool;

    /// Select the matching transactions, preserving order
    fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|tx| self.matches(tx))
            .cloned()
            .collect()
    }
}
