//! File-level driver: reads an AST document, runs the lowering pipeline and
//! enforces the entry-point policy.

use std::fs;
use std::time::Instant;

use crate::ast::CompilationUnit;
use crate::error::{Error, Result};
use crate::lowering::{EntryPolicy, LoweredProgram, LoweringOptions, lower};

mod logging;
pub mod types;

pub use self::types::LowerRequest;

#[derive(Debug, Default, Clone, Copy)]
pub struct LoweringDriver;

impl LoweringDriver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Lower the AST document named by `request`.
    ///
    /// # Errors
    /// Fails when the file cannot be read or decoded, when the hierarchy is
    /// malformed, or when the entry-point policy is violated.
    pub fn lower(&self, request: &LowerRequest) -> Result<LoweredProgram> {
        let start = Instant::now();
        let source = fs::read_to_string(&request.input)?;
        logging::log_stage("driver.read", &request.input, start);
        let start = Instant::now();
        let program = self.lower_source(&source, &request.options)?;
        logging::log_stage("driver.lower", &request.input, start);
        Ok(program)
    }

    /// Lower an in-memory AST document.
    ///
    /// # Errors
    /// As [`LoweringDriver::lower`], minus I/O.
    pub fn lower_source(&self, source: &str, options: &LoweringOptions) -> Result<LoweredProgram> {
        let unit = CompilationUnit::from_json(source)?;
        let program = lower(&unit, options)?;
        enforce_entry_policy(&program, options)?;
        Ok(program)
    }
}

/// Check the removed entry class against `options.entry_policy`.
///
/// # Errors
/// With [`EntryPolicy::Required`], fails when no class or more than one class
/// declares the entry point.
pub fn enforce_entry_policy(program: &LoweredProgram, options: &LoweringOptions) -> Result<()> {
    if options.entry_policy == EntryPolicy::Optional {
        return Ok(());
    }
    match program.entry_candidates() {
        [] => Err(Error::entry_point(format!(
            "no class declares `{}`",
            options.entry_point
        ))),
        [_] => Ok(()),
        several => Err(Error::entry_point(format!(
            "`{}` is declared by several classes: {}",
            options.entry_point,
            several.join(", ")
        ))),
    }
}
