//! Log configuration shared by the binary and embedders.
//!
//! Precedence: CLI flags, then `FLATCLASS_LOG_*` environment variables, then
//! the defaults (auto format, `warn`). `RUST_LOG` still refines the filter
//! once the subscriber is installed.

use std::env;
use std::fmt;

pub const FORMAT_ENV: &str = "FLATCLASS_LOG_FORMAT";
pub const LEVEL_ENV: &str = "FLATCLASS_LOG_LEVEL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Auto,
    Text,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "text" | "plain" | "compact" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogFormat::Auto => "auto",
            LogFormat::Text => "text",
            LogFormat::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging verbosity, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "error" | "err" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" | "verbose" => Some(Self::Trace),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    pub fn as_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effective log configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogOptions {
    pub format: LogFormat,
    pub level: LogLevel,
}

impl LogOptions {
    #[must_use]
    pub fn with_overrides(self, overrides: LogSettings) -> Self {
        Self {
            format: overrides.format.unwrap_or(self.format),
            level: overrides.level.unwrap_or(self.level),
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        let format = env::var(FORMAT_ENV).ok();
        let level = env::var(LEVEL_ENV).ok();
        Self::default().with_env_values(format.as_deref(), level.as_deref())
    }

    /// Apply raw environment values. Unparseable values are ignored.
    #[must_use]
    fn with_env_values(mut self, format: Option<&str>, level: Option<&str>) -> Self {
        if let Some(format) = format.and_then(LogFormat::parse) {
            self.format = format;
        }
        if let Some(level) = level.and_then(LogLevel::parse) {
            self.level = level;
        }
        self
    }

    /// Collapse `Auto` to a concrete format.
    #[must_use]
    pub fn resolved(self) -> Self {
        let format = match self.format {
            LogFormat::Auto => LogFormat::Text,
            other => other,
        };
        Self { format, ..self }
    }
}

/// Logging overrides parsed from the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    pub format: Option<LogFormat>,
    pub level: Option<LogLevel>,
}

impl LogSettings {
    pub fn is_empty(&self) -> bool {
        self.format.is_none() && self.level.is_none()
    }

    #[must_use]
    pub fn merged_with_env(self) -> LogOptions {
        LogOptions::from_env().with_overrides(self)
    }

    pub fn apply_format(&mut self, value: LogFormat) {
        self.format = Some(value);
    }

    pub fn apply_level(&mut self, value: LogLevel) {
        self.level = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_and_level_accept_aliases() {
        assert_eq!(LogFormat::parse(" JSON "), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("compact"), Some(LogFormat::Text));
        assert_eq!(LogFormat::parse("yaml"), None);
        assert_eq!(LogLevel::parse("WARNING"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("verbose"), Some(LogLevel::Trace));
        assert_eq!(LogLevel::parse("loud"), None);
        assert!(LogLevel::Error < LogLevel::Trace);
    }

    #[test]
    fn env_values_override_defaults_and_ignore_garbage() {
        let opts = LogOptions::default().with_env_values(Some("json"), Some("nonsense"));
        assert_eq!(opts.format, LogFormat::Json);
        assert_eq!(opts.level, LogLevel::Warn);
    }

    #[test]
    fn cli_settings_win_over_env() {
        let env_opts = LogOptions::default().with_env_values(Some("text"), Some("debug"));
        let merged = env_opts.with_overrides(LogSettings {
            format: Some(LogFormat::Json),
            level: None,
        });
        assert_eq!(merged.format, LogFormat::Json);
        assert_eq!(merged.level, LogLevel::Debug);
    }

    #[test]
    fn auto_resolves_to_text() {
        assert_eq!(LogOptions::default().resolved().format, LogFormat::Text);
        assert!(LogSettings::default().is_empty());
    }
}
