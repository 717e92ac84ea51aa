use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

/// Replay an expense tracker command script and print the resulting table
#[derive(Parser, Debug)]
#[command(name = "expense-tracker")]
#[command(about = "Replay an expense tracker command script and print the resulting table", long_about = None)]
pub struct CliArgs {
    /// Command script (CSV) to replay
    #[arg(value_name = "SCRIPT", help = "Path to the command script CSV file")]
    pub script: PathBuf,

    /// Verbosity of diagnostics written to stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Diagnostics level: 'error', 'warn', 'info', 'debug' or 'trace'"
    )]
    pub log_level: LogLevel,
}

/// Log levels accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}
