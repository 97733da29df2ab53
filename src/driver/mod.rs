/*!
 * Request Driver
 * Parses the request stream, drives the allocator, renders the report
 */

pub mod command;
pub mod error;
pub mod report;
pub mod runner;

pub use command::{parse_capacity, Command};
pub use error::{CommandError, DriverError, DriverResult};
pub use runner::{RunSummary, Simulator};
