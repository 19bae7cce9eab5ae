#![deny(clippy::unwrap_used, clippy::expect_used)]

//! Object-model resolution: lowers single-inheritance class declarations into
//! flat instance layouts and per-class dispatch tables.

pub mod artifact;
pub mod ast;
pub mod cli;
pub mod driver;
pub mod error;
pub mod logging;
pub mod lowering;
pub mod model;

pub use artifact::ProgramArtifact;
pub use ast::CompilationUnit;
pub use error::{Error, Result};
pub use lowering::{EntryPolicy, LoweredProgram, LoweringError, LoweringOptions, lower};
