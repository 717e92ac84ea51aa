//! Types module
//!
//! Contains core data structures used throughout the application.
//! - `transaction`: The immutable transaction record
//! - `error`: Error types for the expense tracker

pub mod error;
pub mod transaction;

pub use error::TrackerError;
pub use transaction::{Transaction, TIMESTAMP_FORMAT};
