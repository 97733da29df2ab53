/*!
 * Driver Errors
 * Configuration failures (fatal) and malformed command lines (recoverable)
 */

use miette::Diagnostic;
use std::io;
use thiserror::Error;

/// Driver operation result
pub type DriverResult<T> = Result<T, DriverError>;

/// Errors that stop a simulation run before or while reading its input
#[derive(Error, Debug, Diagnostic)]
pub enum DriverError {
    #[error("Usage: {program} <input_file>")]
    #[diagnostic(
        code(driver::usage),
        help("Pass exactly one argument: the path of the request file.")
    )]
    Usage { program: String },

    #[error("Error reading file: {path}: {source}")]
    #[diagnostic(
        code(driver::open_failed),
        help("Check that the file exists and is readable.")
    )]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Error reading file: {0}")]
    #[diagnostic(code(driver::read_failed))]
    Read(#[source] io::Error),

    #[error("Error: input file is empty.")]
    #[diagnostic(
        code(driver::empty_input),
        help("The first line must hold the total memory size.")
    )]
    EmptyInput,

    #[error("Invalid total memory size: {line:?}")]
    #[diagnostic(
        code(driver::invalid_capacity),
        help("The first line must be a single non-negative integer.")
    )]
    InvalidCapacity { line: String },

    #[error("Failed to write report: {0}")]
    #[diagnostic(code(driver::output_failed))]
    Output(#[source] io::Error),
}

/// A command line that cannot be executed
///
/// The `Display` text is the exact line the report prints before moving on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid {keyword} line: {line}")]
    WrongArity { keyword: &'static str, line: String },

    #[error("Invalid size in REQUEST line: {line}")]
    InvalidSize { line: String },

    #[error("Unknown command: {line}")]
    UnknownCommand { line: String },
}
