//! Inheritance linearizer: appends declarations to the registry so that every
//! class follows its parent.

use std::collections::HashMap;

use super::collector::ClassDeclarationRecord;
use super::error::LoweringError;
use crate::model::{BASE_CLASS, ObjectRepresentation, Registry, VTable};

/// Append `declarations` to `registry` (already seeded with the roots) in
/// inheritance order. A class without an `extends` clause is parented to the
/// universal base.
///
/// # Errors
/// Fails with [`LoweringError::UnresolvedParent`] when a parent is never
/// declared, [`LoweringError::CircularInheritance`] when parent links form a
/// cycle, and [`LoweringError::DuplicateClass`] if a name is already taken.
pub fn linearize(
    mut registry: Registry,
    declarations: Vec<ClassDeclarationRecord>,
) -> Result<Registry, LoweringError> {
    let mut pending = declarations;
    let mut passes = 0usize;
    while !pending.is_empty() {
        passes += 1;
        let before = pending.len();
        let mut stalled = Vec::new();
        for decl in pending {
            let parent_name = decl.parent.as_deref().unwrap_or(BASE_CLASS);
            let Some(parent) = registry.lookup(parent_name) else {
                stalled.push(decl);
                continue;
            };
            tracing::trace!(
                target: "pipeline",
                stage = "lowering.linearize.append",
                class = %decl.name,
                parent = parent_name,
                index = registry.len(),
            );
            let name = decl.name;
            let rep = ObjectRepresentation {
                name: name.clone(),
                parent: Some(parent),
                record: decl.record,
                vtable: VTable::new(),
            };
            if registry.push(rep).is_none() {
                return Err(LoweringError::DuplicateClass { name });
            }
        }
        if stalled.len() == before {
            return Err(diagnose_stall(&registry, &stalled));
        }
        pending = stalled;
    }
    tracing::info!(
        target: "pipeline",
        stage = "lowering.linearize",
        class_count = registry.len(),
        passes,
    );
    Ok(registry)
}

/// Explain why no remaining declaration could be appended.
fn diagnose_stall(registry: &Registry, stalled: &[ClassDeclarationRecord]) -> LoweringError {
    let parents: HashMap<&str, &str> = stalled
        .iter()
        .filter_map(|decl| decl.parent.as_deref().map(|parent| (decl.name.as_str(), parent)))
        .collect();

    for decl in stalled {
        if let Some(parent) = decl.parent.as_deref() {
            if !registry.contains(parent) && !parents.contains_key(parent) {
                return LoweringError::UnresolvedParent {
                    class: decl.name.clone(),
                    parent: parent.to_string(),
                };
            }
        }
    }

    // Every stalled parent is itself stalled, so following links must revisit
    // a class.
    let mut chain: Vec<&str> = Vec::new();
    let mut current = stalled.first().map(|decl| decl.name.as_str());
    while let Some(name) = current {
        if let Some(start) = chain.iter().position(|seen| *seen == name) {
            return LoweringError::CircularInheritance {
                classes: chain[start..].iter().map(|name| (*name).to_string()).collect(),
            };
        }
        chain.push(name);
        current = parents.get(name).copied();
    }
    LoweringError::CircularInheritance {
        classes: chain.iter().map(|name| (*name).to_string()).collect(),
    }
}
