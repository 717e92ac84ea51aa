//! Expense Tracker Library
//! # Overview
//!
//! This library provides the model/controller core of a personal expense
//! tracker: transactions are added and undone through a validating controller,
//! stored in a model that notifies registered listeners after every change, and
//! displayed through optional filters.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Transaction, TrackerError)
//! - [`core`] - Business logic components:
//!   - [`core::model`] - Transaction storage and listener notification
//!   - [`core::controller`] - Input validation, undo and filter application
//! - [`filter`] - Amount and category filters
//! - [`view`] - Headless table view (rows plus running total)
//! - [`io`] - Command script parsing and table CSV output
//! - [`session`] - Script replay wiring model, view and controller together
//! - [`cli`] - CLI arguments parsing
//!
//! # Data Flow
//!
//! User command → controller validates → controller mutates model → model
//! notifies listeners → view re-reads the full transaction list.

// Module declarations
pub mod cli;
pub mod core;
pub mod filter;
pub mod io;
pub mod session;
pub mod types;
pub mod view;

pub use crate::core::{ExpenseTrackerController, ExpenseTrackerModel, ModelListener, TransactionView};
pub use filter::{AmountFilter, CategoryFilter, TransactionFilter};
pub use types::{TrackerError, Transaction};
pub use view::{TableRow, TableView};
