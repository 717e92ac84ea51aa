//! Controller between user intents and the model
//!
//! This module provides the ExpenseTrackerController which validates user
//! requests before they reach the model, and owns the active display filter.
//!
//! The controller enforces:
//! - Amounts greater than zero and non-empty categories on add
//! - Running totals that stay within `Decimal::MAX`
//! - Undo indices within the bounds of the current transaction list
//! - Filtered display pushes that never mutate the model

use crate::core::model::{ExpenseTrackerModel, ModelListener};
use crate::filter::TransactionFilter;
use crate::types::{TrackerError, Transaction};
use rust_decimal::Decimal;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

/// Display side of the view, fed by the controller
pub trait TransactionView {
    /// Show the given transactions, replacing whatever was displayed
    fn display_transactions(
        &mut self,
        transactions: Vec<Transaction>,
    ) -> Result<(), TrackerError>;
}

/// Validates and forwards user intents to the model
///
/// The view is shared: the controller pushes filtered lists to it, and the
/// model notifies it (through a weak registration) after every mutation.
pub struct ExpenseTrackerController<V> {
    model: ExpenseTrackerModel,
    view: Rc<RefCell<V>>,
    filter: Option<Box<dyn TransactionFilter>>,
}

impl<V> ExpenseTrackerController<V>
where
    V: ModelListener + TransactionView + 'static,
{
    /// Create a controller and register the view with the model
    ///
    /// A view that is already registered stays registered once.
    pub fn new(mut model: ExpenseTrackerModel, view: Rc<RefCell<V>>) -> Self {
        if let Err(e) = model.register(&Rc::downgrade(&view)) {
            warn!(error = %e, "view not registered with model");
        }

        ExpenseTrackerController {
            model,
            view,
            filter: None,
        }
    }

    /// Validate and record a new transaction
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The transaction was added and listeners notified
    /// * `Err(TrackerError)` - `InvalidAmount`, `EmptyCategory`, or `ArithmeticOverflow`
    ///   when the running total would exceed `Decimal::MAX`; the model is untouched
    pub fn add_transaction(
        &mut self,
        amount: Decimal,
        category: &str,
    ) -> Result<(), TrackerError> {
        let transaction = Transaction::new(amount, category)
            .and_then(|transaction| {
                self.model
                    .total_cost()?
                    .checked_add(amount)
                    .ok_or_else(|| TrackerError::arithmetic_overflow("total"))?;
                Ok(transaction)
            })
            .inspect_err(|e| {
                warn!(%amount, category, error = %e, "rejected transaction");
            })?;

        self.model.add_transaction(transaction);
        Ok(())
    }

    /// Remove the transaction displayed at `row_index`
    ///
    /// # Returns
    ///
    /// * `Ok(Transaction)` - The removed transaction
    /// * `Err(TrackerError::UndoIndexOutOfRange)` - The index does not exist
    ///   (always the case for an empty list); the model is untouched
    pub fn undo_transaction(&mut self, row_index: usize) -> Result<Transaction, TrackerError> {
        let transaction = self
            .model
            .transactions()
            .get(row_index)
            .cloned()
            .ok_or_else(|| TrackerError::undo_out_of_range(row_index, self.model.len()))
            .inspect_err(|e| warn!(error = %e, "rejected undo"))?;

        self.model.remove_transaction(&transaction);
        debug!(row_index, "undid transaction");
        Ok(transaction)
    }

    /// Undo the most recently added transaction
    pub fn undo_last_transaction(&mut self) -> Result<Transaction, TrackerError> {
        match self.model.len() {
            0 => self.undo_transaction(0),
            len => self.undo_transaction(len - 1),
        }
    }

    /// Replace the active filter
    ///
    /// Nothing is displayed until [`apply_filter`](Self::apply_filter) is called.
    pub fn set_filter(&mut self, filter: impl TransactionFilter + 'static) {
        debug!(?filter, "filter set");
        self.filter = Some(Box::new(filter));
    }

    /// Drop the active filter so the full list is displayed
    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// Push the filtered transactions (or all of them, without a filter) to the view
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of transactions displayed
    /// * `Err(TrackerError::ListenerFailed)` - The view is currently borrowed
    /// * `Err(TrackerError)` - Whatever the view reported while displaying
    pub fn apply_filter(&self) -> Result<usize, TrackerError> {
        let transactions = self.model.transactions();
        let displayed = match &self.filter {
            Some(filter) => filter.apply(transactions),
            None => transactions.to_vec(),
        };
        let count = displayed.len();

        let mut view = self
            .view
            .try_borrow_mut()
            .map_err(|_| TrackerError::listener_failed("view is busy"))?;
        view.display_transactions(displayed)?;

        debug!(count, total = transactions.len(), "applied filter");
        Ok(count)
    }

    pub fn model(&self) -> &ExpenseTrackerModel {
        &self.model
    }

    /// Direct model access for callers that bypass validation
    pub fn model_mut(&mut self) -> &mut ExpenseTrackerModel {
        &mut self.model
    }

    pub fn view(&self) -> &Rc<RefCell<V>> {
        &self.view
    }
}
