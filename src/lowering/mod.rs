//! Object-model lowering: turns collected class declarations into flat field
//! layouts and vtables.
//!
//! The passes run strictly forward. Linearization establishes the invariant
//! that every class follows its parent in the registry, which lets the field
//! and vtable passes resolve each class in a single sweep.

mod bootstrap;
mod collector;
mod error;
mod fields;
mod finalize;
mod linearize;
mod vtable;

#[cfg(test)]
mod tests;

pub use bootstrap::{ROOT_COUNT, ROOT_NAMES, roots, seed_registry};
pub use collector::{CONSTRUCTOR_NAME, ClassDeclarationRecord, Declarations, collect};
pub use error::LoweringError;
pub use finalize::{LoweredProgram, finalize};
pub use linearize::linearize;

use fields::resolve_fields;
use vtable::resolve_vtables;

use crate::ast::CompilationUnit;

/// Default name of the method that marks the application driver class.
pub const DEFAULT_ENTRY_POINT: &str = "main";

/// What the driver does when the entry-point class is missing or ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryPolicy {
    /// Remove the first entry class if present; never fail.
    #[default]
    Optional,
    /// Exactly one class must declare the entry point.
    Required,
}

impl EntryPolicy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EntryPolicy::Optional => "optional",
            EntryPolicy::Required => "required",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoweringOptions {
    pub entry_point: String,
    pub entry_policy: EntryPolicy,
}

impl Default for LoweringOptions {
    fn default() -> Self {
        Self {
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            entry_policy: EntryPolicy::Optional,
        }
    }
}

/// Run the whole pipeline over one compilation unit.
///
/// # Errors
/// Propagates collection and linearization failures. Entry-point policy is
/// not checked here; see [`crate::driver::enforce_entry_policy`].
pub fn lower(
    unit: &CompilationUnit,
    options: &LoweringOptions,
) -> Result<LoweredProgram, LoweringError> {
    let Declarations { package, classes } = collect(unit)?;
    let mut registry = linearize(seed_registry(), classes)?;
    resolve_fields(&mut registry);
    resolve_vtables(&mut registry);
    Ok(finalize(registry, package, &options.entry_point))
}
