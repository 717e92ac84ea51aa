//! I/O module
//!
//! Handles command script parsing and table output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (command conversion, table serialization)
//! - `script_reader` - Command script reader with iterator interface

pub mod csv_format;
pub mod script_reader;

pub use csv_format::{convert_command_record, write_table_csv, Command, CommandRecord};
pub use script_reader::ScriptReader;
