/*!
 * Memory Allocation Simulator - Main Entry Point
 *
 * Reads a request file, runs it through a first-fit allocator, and prints
 * per-request results followed by the final block layout and statistics.
 */

use first_fit_sim::driver::report;
use first_fit_sim::{init_tracing, DriverError, FirstFitManager, Simulator};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = report::write_banner(&mut out) {
        error!(error = %e, "Failed to write banner");
        return ExitCode::FAILURE;
    }

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "memsim".to_string());
    let path = match (args.next(), args.next()) {
        (Some(path), None) => path,
        _ => {
            let usage = DriverError::Usage { program };
            eprintln!("{}", usage);
            return ExitCode::from(2);
        }
    };

    let mut simulator = Simulator::new(FirstFitManager::with_capacity(0));
    let result = simulator.run_file(&path, &mut out).and_then(|summary| {
        out.flush().map_err(DriverError::Output)?;
        Ok(summary)
    });

    match result {
        Ok(summary) => {
            info!(
                commands = summary.commands,
                invalid_lines = summary.invalid_lines,
                "Run complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, path = %path, "Simulation aborted");
            eprintln!("{:?}", miette::Report::new(e));
            ExitCode::FAILURE
        }
    }
}
