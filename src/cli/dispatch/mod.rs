use std::io::{self, Write};
use std::time::Instant;

use crate::cli::Cli;
use crate::driver::{LowerRequest, LoweringDriver};
use crate::error::{Error, Result};
use crate::lowering::LoweredProgram;

mod commands;
mod logging;
mod reporting;

/// Seam between command dispatch and the lowering driver, so dispatch can be
/// exercised without touching the filesystem.
pub trait DispatchDriver {
    fn lower(&self, request: &LowerRequest) -> Result<LoweredProgram>;
}

impl DispatchDriver for LoweringDriver {
    fn lower(&self, request: &LowerRequest) -> Result<LoweredProgram> {
        LoweringDriver::lower(self, request)
    }
}

/// Execute a parsed CLI command using the provided driver. Logging is
/// configured here so the binary entrypoint can stay thin.
pub fn run<D: DispatchDriver>(driver: &D, cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(driver, cli, &mut out)
}

pub(crate) fn run_with_output<D: DispatchDriver>(
    driver: &D,
    cli: Cli,
    out: &mut dyn Write,
) -> Result<()> {
    let log_options = cli.log_options.resolved();
    logging::init_logging(&log_options);
    let start = Instant::now();
    logging::log_run_start(&cli.command, &log_options);
    let result = commands::dispatch_command(driver, &cli.command, out);
    logging::log_run_complete(&cli.command, start.elapsed(), &result);
    result
}

pub fn report_error(err: &Error) {
    reporting::report_error(err);
}
