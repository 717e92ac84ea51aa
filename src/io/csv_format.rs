//! CSV format handling for command scripts and table output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CommandRecord structure for deserialization
//! - Conversion from CSV records to [`Command`] values
//! - Table output serialization
//!
//! All functions are pure (no file I/O) for easy testing.
//!
//! # Script Format
//!
//! ```text
//! command,amount,category,index
//! add,50.00,food,
//! add,30.00,entertainment,
//! filter_category,,food,
//! apply,,,
//! undo,,,0
//! ```

use crate::types::TrackerError;
use crate::view::TableRow;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Every column except `command` is optional; which ones are required depends
/// on the command.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CommandRecord {
    pub command: String,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub index: Option<String>,
}

/// A user intent replayed against the controller
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Record a new transaction
    Add { amount: Decimal, category: String },
    /// Undo the row at `index`, or the most recent addition when absent
    Undo { index: Option<usize> },
    /// Show only transactions with this exact amount
    FilterAmount(Decimal),
    /// Show only transactions with this exact category
    FilterCategory(String),
    /// Remove the active filter
    ClearFilter,
    /// Push the (filtered) list to the view
    Apply,
}

/// Convert a CommandRecord to a Command
///
/// Command names are case-insensitive. Amounts are parsed but not validated
/// here; rejecting non-positive amounts is the controller's job.
///
/// # Arguments
///
/// * `record` - The deserialized CSV record
/// * `line` - Line number of the record, used in error messages
pub fn convert_command_record(
    record: CommandRecord,
    line: Option<u64>,
) -> Result<Command, TrackerError> {
    let name = record.command.trim().to_lowercase();
    let command = match name.as_str() {
        "add" => Command::Add {
            amount: parse_amount(record.amount.as_deref(), line)?
                .ok_or_else(|| missing(&record.command, "amount", line))?,
            category: non_empty(record.category.as_deref()).unwrap_or_default(),
        },
        "undo" => Command::Undo {
            index: parse_index(record.index.as_deref(), line)?,
        },
        "filter_amount" => Command::FilterAmount(
            parse_amount(record.amount.as_deref(), line)?
                .ok_or_else(|| missing(&record.command, "amount", line))?,
        ),
        "filter_category" => Command::FilterCategory(
            non_empty(record.category.as_deref())
                .ok_or_else(|| missing(&record.command, "category", line))?,
        ),
        "clear_filter" => Command::ClearFilter,
        "apply" => Command::Apply,
        _ => return Err(TrackerError::invalid_command(&record.command, line)),
    };
    Ok(command)
}

fn non_empty(field: Option<&str>) -> Option<String> {
    field
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn parse_amount(field: Option<&str>, line: Option<u64>) -> Result<Option<Decimal>, TrackerError> {
    non_empty(field)
        .map(|value| {
            Decimal::from_str(&value)
                .map_err(|_| TrackerError::parse_error(line, format!("Invalid amount '{}'", value)))
        })
        .transpose()
}

fn parse_index(field: Option<&str>, line: Option<u64>) -> Result<Option<usize>, TrackerError> {
    non_empty(field)
        .map(|value| {
            value
                .parse::<usize>()
                .map_err(|_| TrackerError::parse_error(line, format!("Invalid index '{}'", value)))
        })
        .transpose()
}

fn missing(command: &str, field: &str, line: Option<u64>) -> TrackerError {
    TrackerError::parse_error(line, format!("'{}' requires {}", command.trim(), field))
}

/// Write table rows to CSV format
///
/// Writes rows with columns: serial, amount, category, timestamp. The total
/// row is written as `total,,,<amount>`, with the sum in the last column.
/// Amounts use two decimal places.
pub fn write_table_csv(rows: &[TableRow], output: &mut dyn Write) -> Result<(), TrackerError> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer.write_record(["serial", "amount", "category", "timestamp"])?;

    for row in rows {
        match row {
            TableRow::Transaction {
                serial,
                amount,
                category,
                timestamp,
            } => writer.write_record([
                serial.to_string(),
                format!("{:.2}", amount),
                category.clone(),
                timestamp.clone(),
            ])?,
            TableRow::Total { amount } => writer.write_record([
                "total".to_string(),
                String::new(),
                String::new(),
                format!("{:.2}", amount),
            ])?,
        }
    }

    writer.flush()?;
    Ok(())
}
