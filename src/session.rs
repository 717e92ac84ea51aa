//! Command script replay
//!
//! A Session wires a model, a [`TableView`] and a controller together the way
//! an interactive front end would, then replays [`Command`]s against them.
//! [`run_script`] drives a whole script file and writes the final table.
//!
//! Rejected commands (invalid amounts, bad undo rows, malformed CSV rows) are
//! logged and skipped; only failures to open the script or write the output
//! abort the run.

use crate::core::{ExpenseTrackerController, ExpenseTrackerModel};
use crate::filter::{AmountFilter, CategoryFilter};
use crate::io::{write_table_csv, Command, ScriptReader};
use crate::types::TrackerError;
use crate::view::{TableRow, TableView};
use std::cell::RefCell;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;
use tracing::{debug, error, info, warn};

/// Counts of how a script run went
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Commands that were executed successfully
    pub executed: usize,
    /// Commands the tracker refused (invalid amount, bad undo row, ...)
    pub rejected: usize,
    /// Rows that could not be turned into a command, or that failed outside validation
    pub malformed: usize,
}

/// Model, view and controller of one tracker instance
pub struct Session {
    controller: ExpenseTrackerController<TableView>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            controller: ExpenseTrackerController::new(
                ExpenseTrackerModel::new(),
                Rc::new(RefCell::new(TableView::new())),
            ),
        }
    }

    /// Execute one command against the controller
    pub fn execute(&mut self, command: Command) -> Result<(), TrackerError> {
        debug!(?command, "executing command");
        match command {
            Command::Add { amount, category } => {
                self.controller.add_transaction(amount, &category)?;
            }
            Command::Undo { index: Some(index) } => {
                self.controller.undo_transaction(index)?;
            }
            Command::Undo { index: None } => {
                self.controller.undo_last_transaction()?;
            }
            Command::FilterAmount(amount) => self.controller.set_filter(AmountFilter::new(amount)),
            Command::FilterCategory(category) => {
                self.controller.set_filter(CategoryFilter::new(category))
            }
            Command::ClearFilter => self.controller.clear_filter(),
            Command::Apply => {
                self.controller.apply_filter()?;
            }
        }
        Ok(())
    }

    /// Execute every command, logging and counting the ones that fail
    pub fn run<I>(&mut self, commands: I) -> ScriptSummary
    where
        I: IntoIterator<Item = Result<Command, TrackerError>>,
    {
        let mut summary = ScriptSummary::default();

        for result in commands {
            match result.and_then(|command| self.execute(command)) {
                Ok(()) => summary.executed += 1,
                Err(e) if e.is_validation() => {
                    warn!(error = %e, "command rejected");
                    summary.rejected += 1;
                }
                Err(e) => {
                    error!(error = %e, "command skipped");
                    summary.malformed += 1;
                }
            }
        }

        summary
    }

    pub fn controller(&self) -> &ExpenseTrackerController<TableView> {
        &self.controller
    }

    /// Snapshot of the current table rows
    pub fn rows(&self) -> Vec<TableRow> {
        self.controller.view().borrow().rows().to_vec()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Replay a command script and write the resulting table as CSV
///
/// # Arguments
///
/// * `input_path` - Path to the command script
/// * `output` - Writer receiving the table CSV
///
/// # Errors
///
/// Returns an error if the script cannot be opened or the output cannot be
/// written. Individual command failures are logged and counted instead.
pub fn run_script(
    input_path: &Path,
    output: &mut dyn Write,
) -> Result<ScriptSummary, TrackerError> {
    let reader = ScriptReader::new(input_path)?;

    let mut session = Session::new();
    let summary = session.run(reader);
    info!(
        executed = summary.executed,
        rejected = summary.rejected,
        malformed = summary.malformed,
        transactions = session.controller().model().len(),
        "script finished"
    );

    write_table_csv(&session.rows(), output)?;
    Ok(summary)
}
