//! Command-line interface: argument parsing and exit codes.

pub mod args;
pub mod exit_code;

pub use args::{Cli, normalize_args};
pub use exit_code::ExitCode;
