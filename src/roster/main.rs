//! # Roster CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and turns an error into a red message on stderr
//! and exit status 1.
//!
//! Every invocation runs exactly one operation: load, act, save if something
//! changed, print. There is no prompt loop.

use colored::Colorize;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {}", "Error:".red().bold(), e.to_string().red());
        std::process::exit(1);
    }
}
