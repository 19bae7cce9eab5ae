use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;
use std::io;

use crate::cli::CliError;
use crate::lowering::LoweringError;

/// Unified error type for the lowering tool.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Cli(CliError),
    /// The AST document could not be decoded.
    Input(serde_json::Error),
    Lowering(LoweringError),
    /// The entry-point policy was violated.
    EntryPoint {
        message: String,
    },
    Internal {
        message: String,
        backtrace: Option<Backtrace>,
    },
}

/// Convenience result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn entry_point(message: impl Into<String>) -> Self {
        Self::EntryPoint {
            message: message.into(),
        }
    }

    /// Construct a new internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            backtrace: capture_backtrace(),
        }
    }

    /// Return the captured backtrace, if any.
    pub fn backtrace(&self) -> Option<&Backtrace> {
        match self {
            Error::Internal { backtrace, .. } => backtrace.as_ref(),
            _ => None,
        }
    }
}

fn capture_backtrace() -> Option<Backtrace> {
    if cfg!(debug_assertions) {
        Some(Backtrace::force_capture())
    } else {
        None
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::Cli(err) => write!(f, "{err}"),
            Error::Input(err) => write!(f, "invalid AST input: {err}"),
            Error::Lowering(err) => write!(f, "lowering error: {err}"),
            Error::EntryPoint { message } => write!(f, "entry point error: {message}"),
            Error::Internal { message, .. } => write!(f, "internal error: {message}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Cli(err) => Some(err),
            Error::Input(err) => Some(err),
            Error::Lowering(err) => Some(err),
            Error::EntryPoint { .. } | Error::Internal { .. } => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<CliError> for Error {
    fn from(error: CliError) -> Self {
        Error::Cli(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Input(error)
    }
}

impl From<LoweringError> for Error {
    fn from(error: LoweringError) -> Self {
        Error::Lowering(error)
    }
}
