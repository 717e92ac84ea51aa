//! Transaction model with listener notification
//!
//! This module provides the ExpenseTrackerModel which owns the ordered list of
//! recorded transactions and the registrations of the listeners observing it.
//!
//! # Notification
//!
//! Every mutation that changes the list (add, successful remove) notifies all
//! live listeners synchronously, in registration order, after the change has
//! been committed. Listeners receive a shared reference to the model and re-read
//! whatever state they need; no delta is passed.
//!
//! # Listener Ownership
//!
//! The model holds only `Weak` references. It never keeps a listener alive, and
//! registrations whose listener has been dropped are pruned before the next
//! notification.
//!
//! # Failure Isolation
//!
//! A listener returning an error, or one that is already mutably borrowed, is
//! logged and skipped; the remaining listeners are still notified.

use crate::types::{TrackerError, Transaction};
use rust_decimal::Decimal;
use std::cell::RefCell;
use std::fmt;
use std::rc::Weak;
use tracing::{debug, warn};

/// Observer of model changes
pub trait ModelListener {
    /// Called after every mutation of the model
    fn update(&mut self, model: &ExpenseTrackerModel) -> Result<(), TrackerError>;
}

type ListenerRef = Weak<RefCell<dyn ModelListener>>;

/// Ordered store of transactions plus registered listeners
#[derive(Default)]
pub struct ExpenseTrackerModel {
    /// Transactions in insertion order (also display order)
    transactions: Vec<Transaction>,

    /// Non-owning listener registrations in registration order
    listeners: Vec<ListenerRef>,
}

impl ExpenseTrackerModel {
    /// Create an empty model with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction and notify listeners
    ///
    /// The transaction was validated at construction; the model does not
    /// re-check it.
    pub fn add_transaction(&mut self, transaction: Transaction) {
        debug!(
            amount = %transaction.amount(),
            category = transaction.category(),
            "adding transaction"
        );
        self.transactions.push(transaction);
        self.notify_listeners();
    }

    /// Remove the first transaction equal to `transaction`
    ///
    /// # Returns
    ///
    /// `true` if a transaction was removed (listeners were notified),
    /// `false` if nothing matched (no-op, no notification)
    pub fn remove_transaction(&mut self, transaction: &Transaction) -> bool {
        let Some(position) = self.transactions.iter().position(|tx| tx == transaction) else {
            debug!(
                category = transaction.category(),
                "transaction to remove not found"
            );
            return false;
        };

        let removed = self.transactions.remove(position);
        debug!(
            position,
            amount = %removed.amount(),
            category = removed.category(),
            "removed transaction"
        );
        self.notify_listeners();
        true
    }

    /// Read-only view of the transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of all transaction amounts
    ///
    /// Returns `ArithmeticOverflow` if the sum exceeds `Decimal::MAX`, which
    /// only happens when unvalidated transactions were added directly.
    pub fn total_cost(&self) -> Result<Decimal, TrackerError> {
        self.transactions
            .iter()
            .try_fold(Decimal::ZERO, |total, tx| total.checked_add(tx.amount()))
            .ok_or_else(|| TrackerError::arithmetic_overflow("total"))
    }

    /// Register a listener for change notifications
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The listener was added
    /// * `Err(TrackerError::ListenerUnavailable)` - The reference is dangling
    /// * `Err(TrackerError::DuplicateListener)` - The listener is already registered
    pub fn register<L>(&mut self, listener: &Weak<RefCell<L>>) -> Result<(), TrackerError>
    where
        L: ModelListener + 'static,
    {
        let listener: ListenerRef = listener.clone();

        if listener.strong_count() == 0 {
            return Err(TrackerError::ListenerUnavailable);
        }
        if self.position_of(&listener).is_some() {
            return Err(TrackerError::DuplicateListener);
        }

        self.listeners.push(listener);
        debug!(listeners = self.listeners.len(), "registered listener");
        Ok(())
    }

    /// Remove a listener registration
    ///
    /// Returns `false` if the listener was not registered.
    pub fn unregister<L>(&mut self, listener: &Weak<RefCell<L>>) -> bool
    where
        L: ModelListener + 'static,
    {
        let listener: ListenerRef = listener.clone();
        match self.position_of(&listener) {
            Some(position) => {
                self.listeners.remove(position);
                true
            }
            None => false,
        }
    }

    /// Whether the listener is currently registered
    pub fn contains_listener<L>(&self, listener: &Weak<RefCell<L>>) -> bool
    where
        L: ModelListener + 'static,
    {
        let listener: ListenerRef = listener.clone();
        self.position_of(&listener).is_some()
    }

    /// Number of registered listeners that are still alive
    pub fn number_of_listeners(&self) -> usize {
        self.listeners
            .iter()
            .filter(|listener| listener.strong_count() > 0)
            .count()
    }

    fn position_of(&self, listener: &ListenerRef) -> Option<usize> {
        self.listeners
            .iter()
            .position(|registered| registered.strong_count() > 0 && registered.ptr_eq(listener))
    }

    fn notify_listeners(&mut self) {
        self.listeners.retain(|listener| listener.strong_count() > 0);

        for (index, registered) in self.listeners.iter().enumerate() {
            let Some(cell) = registered.upgrade() else {
                continue;
            };
            let Ok(mut listener) = cell.try_borrow_mut() else {
                warn!(index, "listener is busy, skipping notification");
                continue;
            };
            if let Err(e) = listener.update(self) {
                warn!(index, error = %e, "listener failed to handle update");
            }
        }
    }
}

impl fmt::Debug for ExpenseTrackerModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpenseTrackerModel")
            .field("transactions", &self.transactions)
            .field("listeners", &self.number_of_listeners())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::rc::Rc;

    /// Listener that records the transaction count seen on every update
    #[derive(Default)]
    struct RecordingListener {
        seen: Vec<usize>,
    }

    impl ModelListener for RecordingListener {
        fn update(&mut self, model: &ExpenseTrackerModel) -> Result<(), TrackerError> {
            self.seen.push(model.len());
            Ok(())
        }
    }

    /// Listener that always fails
    struct FailingListener;

    impl ModelListener for FailingListener {
        fn update(&mut self, _model: &ExpenseTrackerModel) -> Result<(), TrackerError> {
            Err(TrackerError::listener_failed("render error"))
        }
    }

    fn tx(cents: i64, category: &str) -> Transaction {
        Transaction::new(Decimal::new(cents, 2), category).unwrap()
    }

    #[test]
    fn test_new_model_is_empty() {
        let model = ExpenseTrackerModel::new();
        assert!(model.is_empty());
        assert_eq!(model.number_of_listeners(), 0);
        assert_eq!(model.total_cost(), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_add_transaction_appends_in_order() {
        let mut model = ExpenseTrackerModel::new();
        let first = tx(5000, "food");
        let second = tx(3000, "entertainment");

        model.add_transaction(first.clone());
        model.add_transaction(second.clone());

        assert_eq!(model.transactions(), &[first, second]);
        assert_eq!(model.total_cost(), Ok(Decimal::new(8000, 2)));
    }

    #[test]
    fn test_remove_transaction() {
        let mut model = ExpenseTrackerModel::new();
        let added = tx(5000, "food");
        model.add_transaction(added.clone());
        assert_eq!(model.total_cost(), Ok(Decimal::new(5000, 2)));

        assert!(model.remove_transaction(&added));

        assert!(model.is_empty());
        assert_eq!(model.total_cost(), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_total_cost_overflow() {
        let mut model = ExpenseTrackerModel::new();
        model.add_transaction(Transaction::new(Decimal::MAX, "food").unwrap());
        assert_eq!(model.total_cost(), Ok(Decimal::MAX));

        model.add_transaction(Transaction::new(Decimal::MAX, "food").unwrap());

        assert_eq!(
            model.total_cost(),
            Err(TrackerError::arithmetic_overflow("total"))
        );
    }

    #[test]
    fn test_remove_only_first_match() {
        let mut model = ExpenseTrackerModel::new();
        let added = tx(5000, "food");
        model.add_transaction(added.clone());
        model.add_transaction(tx(1000, "bills"));
        model.add_transaction(added.clone());

        assert!(model.remove_transaction(&added));

        assert_eq!(model.len(), 2);
        assert_eq!(model.transactions()[0].category(), "bills");
        assert_eq!(model.transactions()[1], added);
    }

    #[test]
    fn test_remove_missing_transaction_is_noop() {
        let mut model = ExpenseTrackerModel::new();
        let listener = Rc::new(RefCell::new(RecordingListener::default()));
        model.add_transaction(tx(5000, "food"));
        model.register(&Rc::downgrade(&listener)).unwrap();

        assert!(!model.remove_transaction(&tx(9900, "travel")));

        assert_eq!(model.len(), 1);
        assert!(listener.borrow().seen.is_empty());
    }

    #[test]
    fn test_register_succeeds_once() {
        let mut model = ExpenseTrackerModel::new();
        let listener = Rc::new(RefCell::new(RecordingListener::default()));
        let weak = Rc::downgrade(&listener);

        assert_eq!(model.register(&weak), Ok(()));
        assert_eq!(model.number_of_listeners(), 1);
        assert!(model.contains_listener(&weak));

        assert_eq!(model.register(&weak), Err(TrackerError::DuplicateListener));
        assert_eq!(model.number_of_listeners(), 1);
    }

    #[test]
    fn test_register_dangling_listener_fails() {
        let mut model = ExpenseTrackerModel::new();
        let dangling: Weak<RefCell<RecordingListener>> = Weak::new();

        assert_eq!(
            model.register(&dangling),
            Err(TrackerError::ListenerUnavailable)
        );
        assert_eq!(model.number_of_listeners(), 0);
        assert!(!model.contains_listener(&dangling));
    }

    #[test]
    fn test_register_dropped_listener_fails() {
        let mut model = ExpenseTrackerModel::new();
        let listener = Rc::new(RefCell::new(RecordingListener::default()));
        let weak = Rc::downgrade(&listener);
        drop(listener);

        assert_eq!(model.register(&weak), Err(TrackerError::ListenerUnavailable));
    }

    #[test]
    fn test_unregister() {
        let mut model = ExpenseTrackerModel::new();
        let listener = Rc::new(RefCell::new(RecordingListener::default()));
        let weak = Rc::downgrade(&listener);
        model.register(&weak).unwrap();

        assert!(model.unregister(&weak));
        assert!(!model.unregister(&weak));
        assert_eq!(model.number_of_listeners(), 0);

        model.add_transaction(tx(100, "food"));
        assert!(listener.borrow().seen.is_empty());
    }

    #[test]
    fn test_models_are_independent() {
        let mut first = ExpenseTrackerModel::new();
        let second = ExpenseTrackerModel::new();
        let listener = Rc::new(RefCell::new(RecordingListener::default()));
        first.register(&Rc::downgrade(&listener)).unwrap();
        first.add_transaction(tx(100, "food"));

        assert_eq!(second.number_of_listeners(), 0);
        assert!(second.is_empty());
    }

    #[test]
    fn test_listeners_notified_on_every_mutation() {
        let mut model = ExpenseTrackerModel::new();
        let listener = Rc::new(RefCell::new(RecordingListener::default()));
        model.register(&Rc::downgrade(&listener)).unwrap();

        let food = tx(5000, "food");
        model.add_transaction(food.clone());
        model.add_transaction(tx(3000, "entertainment"));
        model.remove_transaction(&food);

        assert_eq!(listener.borrow().seen, vec![1, 2, 1]);
    }

    #[test]
    fn test_listeners_notified_in_registration_order() {
        struct OrderListener {
            id: u8,
            log: Rc<RefCell<Vec<u8>>>,
        }

        impl ModelListener for OrderListener {
            fn update(&mut self, _model: &ExpenseTrackerModel) -> Result<(), TrackerError> {
                self.log.borrow_mut().push(self.id);
                Ok(())
            }
        }

        let log = Rc::new(RefCell::new(Vec::new()));
        let listeners: Vec<_> = (0..3)
            .map(|id| {
                Rc::new(RefCell::new(OrderListener {
                    id,
                    log: Rc::clone(&log),
                }))
            })
            .collect();

        let mut model = ExpenseTrackerModel::new();
        for listener in listeners.iter().rev() {
            model.register(&Rc::downgrade(listener)).unwrap();
        }
        model.add_transaction(tx(100, "food"));

        assert_eq!(*log.borrow(), vec![2, 1, 0]);
    }

    #[rstest]
    #[case::failing_first(true)]
    #[case::failing_last(false)]
    fn test_failing_listener_does_not_block_others(#[case] failing_first: bool) {
        let mut model = ExpenseTrackerModel::new();
        let failing = Rc::new(RefCell::new(FailingListener));
        let recording = Rc::new(RefCell::new(RecordingListener::default()));

        if failing_first {
            model.register(&Rc::downgrade(&failing)).unwrap();
            model.register(&Rc::downgrade(&recording)).unwrap();
        } else {
            model.register(&Rc::downgrade(&recording)).unwrap();
            model.register(&Rc::downgrade(&failing)).unwrap();
        }

        model.add_transaction(tx(100, "food"));

        assert_eq!(model.len(), 1);
        assert_eq!(recording.borrow().seen, vec![1]);
    }

    #[test]
    fn test_busy_listener_is_skipped() {
        let mut model = ExpenseTrackerModel::new();
        let listener = Rc::new(RefCell::new(RecordingListener::default()));
        model.register(&Rc::downgrade(&listener)).unwrap();

        {
            let _guard = listener.borrow_mut();
            model.add_transaction(tx(100, "food"));
        }
        model.add_transaction(tx(200, "food"));

        assert_eq!(listener.borrow().seen, vec![2]);
    }

    #[test]
    fn test_dropped_listener_is_pruned() {
        let mut model = ExpenseTrackerModel::new();
        let kept = Rc::new(RefCell::new(RecordingListener::default()));
        let dropped = Rc::new(RefCell::new(RecordingListener::default()));
        model.register(&Rc::downgrade(&kept)).unwrap();
        model.register(&Rc::downgrade(&dropped)).unwrap();
        assert_eq!(model.number_of_listeners(), 2);

        drop(dropped);
        assert_eq!(model.number_of_listeners(), 1);

        model.add_transaction(tx(100, "food"));
        assert_eq!(kept.borrow().seen, vec![1]);
    }
}
