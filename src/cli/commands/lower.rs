use crate::logging::LogSettings;
use crate::lowering::{EntryPolicy, LoweringOptions};

use super::super::{Cli, CliError, Command, OutputFormat};
use super::common::{consume_log_flag, flag_value, is_help_flag, require_path};

pub(super) fn parse(args: Vec<String>) -> Result<Cli, CliError> {
    if args.iter().any(|value| is_help_flag(value)) {
        return Ok(Cli::with_env_logging(Command::Help {
            topic: Some("lower".into()),
        }));
    }
    let mut iter = args.into_iter();
    let input = require_path(iter.next(), "lower requires <ast.json> argument")?;
    let rest = iter.collect::<Vec<_>>();

    let mut output = None;
    let mut format = OutputFormat::default();
    let mut options = LoweringOptions::default();
    let mut log_settings = LogSettings::default();
    let mut idx = 0usize;
    while idx < rest.len() {
        if let Some(consumed) = consume_log_flag(&rest, idx, &mut log_settings)? {
            idx += consumed;
            continue;
        }
        match rest[idx].as_str() {
            "-o" | "--output" => {
                output = Some(require_path(
                    Some(flag_value(&rest, idx)?),
                    "expected path after --output",
                )?);
                idx += 2;
            }
            "--format" => {
                let value = flag_value(&rest, idx)?;
                let Some(parsed) = OutputFormat::parse(value) else {
                    return Err(CliError::with_usage(format!(
                        "invalid output format '{value}'; supported values: json, text"
                    )));
                };
                format = parsed;
                idx += 2;
            }
            "--entry-point" => {
                let value = flag_value(&rest, idx)?;
                if value.trim().is_empty() {
                    return Err(CliError::with_usage("entry point name must not be empty"));
                }
                options.entry_point = value.to_string();
                idx += 2;
            }
            "--require-entry" => {
                options.entry_policy = EntryPolicy::Required;
                idx += 1;
            }
            other => {
                return Err(CliError::with_usage(format!(
                    "unsupported option '{other}' for command"
                )));
            }
        }
    }
    Ok(Cli {
        command: Command::Lower {
            input,
            output,
            format,
            options,
        },
        log_options: log_settings.merged_with_env(),
    })
}
