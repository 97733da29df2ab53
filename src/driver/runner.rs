/*!
 * Request Runner
 * Drives an allocator from a line-oriented request stream
 */

use super::command::{parse_capacity, Command};
use super::error::{DriverError, DriverResult};
use super::report;
use crate::memory::{Allocator, FirstFitManager, MemoryInfo, MemoryStats};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// What a completed run processed
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub commands: usize,
    pub invalid_lines: usize,
    pub stats: MemoryStats,
}

/// One simulation: an injected allocator plus the request loop around it
#[derive(Debug)]
pub struct Simulator<A> {
    memory: A,
}

impl Default for Simulator<FirstFitManager> {
    fn default() -> Self {
        Self::new(FirstFitManager::with_capacity(0))
    }
}

impl<A> Simulator<A>
where
    A: Allocator + MemoryInfo,
{
    pub fn new(memory: A) -> Self {
        Self { memory }
    }

    pub fn memory(&self) -> &A {
        &self.memory
    }

    /// Open `path` and run it, writing the full report to `out`
    pub fn run_file(&mut self, path: impl AsRef<Path>, out: &mut impl Write) -> DriverResult<RunSummary> {
        let path = path.as_ref();
        let source = path.display().to_string();
        report::write_source(out, &source).map_err(DriverError::Output)?;

        let file = File::open(path).map_err(|e| DriverError::Open {
            path: source.clone(),
            source: e,
        })?;
        self.run(BufReader::new(file), out)
    }

    /// Read the capacity line, execute every command, then print the final report
    pub fn run(&mut self, mut input: impl BufRead, out: &mut impl Write) -> DriverResult<RunSummary> {
        let mut buf = Vec::new();

        let Some(first) = read_line(&mut input, &mut buf)? else {
            return Err(DriverError::EmptyInput);
        };
        let total = parse_capacity(&first)?;

        self.memory.reset(total);
        info!(total, "Simulation started");
        report::write_capacity(out, total).map_err(DriverError::Output)?;

        let mut commands = 0;
        let mut invalid_lines = 0;
        // Line 1 is the capacity, so commands start at line 2.
        let mut line_number = 1;

        while let Some(line) = read_line(&mut input, &mut buf)? {
            line_number += 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let executed = match Command::parse(line) {
                Ok(command) => self.execute(command, line, out)?,
                Err(e) => {
                    warn!(line_number, error = %e, "Skipping malformed command");
                    writeln!(out, "{}", e).map_err(DriverError::Output)?;
                    false
                }
            };

            if executed {
                commands += 1;
            } else {
                invalid_lines += 1;
            }
        }

        let stats = self.memory.stats();
        report::write_final_report(out, &self.memory.snapshot(), &stats)
            .map_err(DriverError::Output)?;
        out.flush().map_err(DriverError::Output)?;

        info!(
            commands,
            invalid_lines,
            allocated = stats.allocated_memory,
            free = stats.free_memory,
            "Simulation finished"
        );

        Ok(RunSummary {
            commands,
            invalid_lines,
            stats,
        })
    }

    /// Apply one command; returns false when the allocator rejected it as a caller error
    fn execute(&mut self, command: Command, line: &str, out: &mut impl Write) -> DriverResult<bool> {
        match command {
            Command::Request { owner, size } => match self.memory.allocate(&owner, size) {
                Ok(outcome) => {
                    debug!(owner = %owner, size, ?outcome, "REQUEST");
                    report::write_allocation(out, &owner, size, outcome)
                        .map_err(DriverError::Output)?;
                    Ok(true)
                }
                Err(e) => {
                    warn!(error = %e, line, "Allocator rejected request");
                    writeln!(out, "Invalid REQUEST line: {}", line).map_err(DriverError::Output)?;
                    Ok(false)
                }
            },
            Command::Release { owner } => {
                let outcome = self.memory.release(&owner);
                debug!(owner = %owner, ?outcome, "RELEASE");
                report::write_release(out, &owner, outcome).map_err(DriverError::Output)?;
                Ok(true)
            }
        }
    }
}

/// Next line without its terminator, or `None` at end of input
///
/// Bytes that are not valid UTF-8 become U+FFFD so one badly encoded line
/// cannot end the run; only real I/O failures are errors.
fn read_line(input: &mut impl BufRead, buf: &mut Vec<u8>) -> DriverResult<Option<String>> {
    buf.clear();
    let read = input.read_until(b'\n', buf).map_err(DriverError::Read)?;
    if read == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
