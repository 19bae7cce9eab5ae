use std::fs;
use std::io::Write;
use std::path::Path;

use crate::artifact::ProgramArtifact;
use crate::cli::{Cli, Command, OutputFormat};
use crate::driver::LowerRequest;
use crate::error::{Error, Result};
use crate::lowering::{LoweredProgram, LoweringOptions};

use super::DispatchDriver;

pub(super) fn dispatch_command<D: DispatchDriver>(
    driver: &D,
    command: &Command,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::Lower {
            input,
            output,
            format,
            options,
        } => run_lower(driver, input, output.as_deref(), *format, options, out),
        Command::Help { topic } => {
            let text = match topic {
                Some(topic) => Cli::help_for(topic)?,
                None => Cli::usage(),
            };
            write!(out, "{text}")?;
            Ok(())
        }
        Command::Version => {
            writeln!(out, "flatclass {}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
    }
}

fn run_lower<D: DispatchDriver>(
    driver: &D,
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    options: &LoweringOptions,
    out: &mut dyn Write,
) -> Result<()> {
    let request = LowerRequest::new(input).with_options(options.clone());
    let program = driver.lower(&request)?;
    let rendered = render(&program, format)?;
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, rendered)?;
            tracing::info!(
                target: "pipeline",
                stage = "cli.lower.write",
                path = %path.display(),
                format = format.as_str(),
                classes = program.len(),
            );
        }
        None => out.write_all(rendered.as_bytes())?,
    }
    Ok(())
}

pub(super) fn render(program: &LoweredProgram, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = ProgramArtifact::new(program)
                .to_pretty_json()
                .map_err(|err| Error::internal(format!("failed to serialise artifact: {err}")))?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => Ok(program.to_text()),
    }
}
