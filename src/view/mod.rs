//! Headless table view
//!
//! The TableView keeps the tabular rendering of the transactions: one row per
//! transaction followed by a total row. It listens to the model (re-reading the
//! full list on every change) and accepts filtered lists pushed by the
//! controller. Rendering the rows on screen or to a file is left to callers.

use crate::core::{ExpenseTrackerModel, ModelListener, TransactionView};
use crate::types::{TrackerError, Transaction};
use rust_decimal::Decimal;

/// One row of the transaction table
#[derive(Debug, Clone, PartialEq)]
pub enum TableRow {
    /// A recorded transaction; `serial` starts at 1
    Transaction {
        serial: usize,
        amount: Decimal,
        category: String,
        timestamp: String,
    },
    /// Sum of the displayed amounts, always the last row
    Total { amount: Decimal },
}

/// Table model fed by the model and the controller
#[derive(Debug, Default)]
pub struct TableView {
    rows: Vec<TableRow>,
    displayed: Vec<Transaction>,
}

impl TableView {
    /// Create a view with no rows; the table stays empty until the first refresh
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Transactions currently shown in the table
    pub fn displayed_transactions(&self) -> &[Transaction] {
        &self.displayed
    }

    /// Value of the total row, or zero before the first refresh
    pub fn total_cost(&self) -> Decimal {
        match self.rows.last() {
            Some(TableRow::Total { amount }) => *amount,
            _ => Decimal::ZERO,
        }
    }

    /// Rebuild the rows from `transactions`
    ///
    /// Leaves the current rows in place if the total would overflow.
    fn refresh(&mut self, transactions: Vec<Transaction>) -> Result<(), TrackerError> {
        let mut total = Decimal::ZERO;
        let mut rows = Vec::with_capacity(transactions.len() + 1);

        for (index, tx) in transactions.iter().enumerate() {
            total = total
                .checked_add(tx.amount())
                .ok_or_else(|| TrackerError::arithmetic_overflow("total"))?;
            rows.push(TableRow::Transaction {
                serial: index + 1,
                amount: tx.amount(),
                category: tx.category().to_string(),
                timestamp: tx.formatted_timestamp(),
            });
        }
        rows.push(TableRow::Total { amount: total });

        self.rows = rows;
        self.displayed = transactions;
        Ok(())
    }
}

impl ModelListener for TableView {
    fn update(&mut self, model: &ExpenseTrackerModel) -> Result<(), TrackerError> {
        self.refresh(model.transactions().to_vec())
    }
}

impl TransactionView for TableView {
    fn display_transactions(
        &mut self,
        transactions: Vec<Transaction>,
    ) -> Result<(), TrackerError> {
        self.refresh(transactions)
    }
}
