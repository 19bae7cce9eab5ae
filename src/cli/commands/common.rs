use std::path::PathBuf;

use crate::logging::{LogFormat, LogLevel, LogSettings};

use super::super::CliError;

pub(crate) fn is_help_flag(value: &str) -> bool {
    matches!(value, "-h" | "--help")
}

pub(crate) fn require_path<T>(value: Option<T>, message: &str) -> Result<PathBuf, CliError>
where
    T: Into<String>,
{
    let Some(raw) = value else {
        return Err(CliError::with_usage(message));
    };
    let raw = raw.into();
    if raw.trim().is_empty() {
        return Err(CliError::with_usage("input path must not be empty"));
    }
    if raw.starts_with('-') {
        return Err(CliError::with_usage(message));
    }
    Ok(PathBuf::from(raw))
}

/// Value following the flag at `args[idx]`.
pub(crate) fn flag_value<'a>(args: &'a [String], idx: usize) -> Result<&'a str, CliError> {
    args.get(idx + 1)
        .map(String::as_str)
        .ok_or_else(|| CliError::with_usage(format!("expected value after {}", args[idx])))
}

/// Consume `--log-format`/`--log-level` at `args[idx]`. Returns the number of
/// arguments consumed, or `None` when the flag is not a logging flag.
pub(crate) fn consume_log_flag(
    args: &[String],
    idx: usize,
    settings: &mut LogSettings,
) -> Result<Option<usize>, CliError> {
    match args[idx].as_str() {
        "--log-format" => {
            let value = flag_value(args, idx)?;
            let Some(format) = LogFormat::parse(value) else {
                return Err(CliError::with_usage(format!(
                    "invalid log format '{value}'; supported values: auto, text, json"
                )));
            };
            settings.apply_format(format);
            Ok(Some(2))
        }
        "--log-level" => {
            let value = flag_value(args, idx)?;
            let Some(level) = LogLevel::parse(value) else {
                return Err(CliError::with_usage(format!(
                    "invalid log level '{value}'; supported values: error, warn, info, debug, trace"
                )));
            };
            settings.apply_level(level);
            Ok(Some(2))
        }
        _ => Ok(None),
    }
}
