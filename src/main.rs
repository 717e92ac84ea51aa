//! Expense tracker CLI
//!
//! Replays a command script against the tracker and prints the final
//! transaction table as CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- script.csv > table.csv
//! cargo run -- --log-level debug script.csv > table.csv
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success (rejected commands are reported on stderr)
//! - 1: Error (script not found or unreadable, output not writable)

use expense_tracker::cli;
use expense_tracker::session;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(args.log_level);

    let mut output = std::io::stdout();
    if let Err(e) = session::run_script(&args.script, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
