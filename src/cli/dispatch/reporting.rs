use std::io::{self, Write};

use crate::error::Error;
use crate::lowering::LoweringError;

pub(super) fn report_error(err: &Error) {
    let mut out = io::stderr();
    if let Err(io_err) = report_error_to(err, &mut out) {
        let _ = writeln!(io::stderr(), "failed to report error: {io_err}");
    }
}

pub(super) fn report_error_to(err: &Error, out: &mut dyn Write) -> io::Result<()> {
    match err {
        Error::Cli(_) => writeln!(out, "{err}")?,
        Error::Lowering(lowering) => {
            writeln!(out, "error: {err}")?;
            if let Some(hint) = hint_for(lowering) {
                writeln!(out, "  = help: {hint}")?;
            }
        }
        _ => {
            writeln!(out, "error: {err}")?;
            if cfg!(debug_assertions) {
                if let Some(backtrace) = err.backtrace() {
                    writeln!(out, "stack trace:")?;
                    writeln!(out, "{backtrace}")?;
                }
            }
        }
    }
    Ok(())
}

fn hint_for(err: &LoweringError) -> Option<String> {
    match err {
        LoweringError::UnresolvedParent { parent, .. } => Some(format!(
            "declare class `{parent}` in the same compilation unit"
        )),
        LoweringError::CircularInheritance { classes } => classes
            .first()
            .map(|first| format!("break the cycle by changing the parent of `{first}`")),
        LoweringError::DuplicateClass { .. } => None,
    }
}
