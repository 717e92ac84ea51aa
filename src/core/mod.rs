//! Core business logic module
//!
//! This module contains the model/controller pair:
//! - `model` - Transaction storage and listener notification
//! - `controller` - Validation of user intents and filter application

pub mod controller;
pub mod model;

pub use controller::{ExpenseTrackerController, TransactionView};
pub use model::{ExpenseTrackerModel, ModelListener};
