//! Command-line interface module
//!
//! Provides argument parsing and command execution.

pub mod args;
pub mod commands;

pub use args::{Args, Command, parse_args, report_parse_error, usage};
pub use commands::execute_command;
