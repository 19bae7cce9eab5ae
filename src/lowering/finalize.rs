//! Finalizer: drops the entry-point class and the bootstrap roots from the
//! emitted order.

use super::bootstrap::ROOT_COUNT;
use crate::model::pretty::format_classes;
use crate::model::{ClassId, ObjectRepresentation, Registry};

/// Resolved classes ready for emission.
///
/// The registry is kept whole so parent links of emitted classes still
/// resolve, including links to the roots and to the removed entry class.
#[derive(Debug, Clone)]
pub struct LoweredProgram {
    registry: Registry,
    emitted: Vec<ClassId>,
    package: String,
    entry_class: Option<String>,
    entry_candidates: Vec<String>,
}

impl LoweredProgram {
    /// Dotted package of the compilation unit, empty when absent.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Emitted classes in linearized order.
    pub fn classes(&self) -> impl Iterator<Item = &ObjectRepresentation> {
        self.emitted.iter().map(|id| self.registry.get(*id))
    }

    #[must_use]
    pub fn class(&self, name: &str) -> Option<&ObjectRepresentation> {
        let id = self.registry.lookup(name)?;
        self.emitted.contains(&id).then(|| self.registry.get(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.emitted.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty()
    }

    /// Parent of an emitted (or any registered) class, roots included.
    #[must_use]
    pub fn parent_of(&self, rep: &ObjectRepresentation) -> Option<&ObjectRepresentation> {
        let id = self.registry.lookup(&rep.name)?;
        self.registry.parent_of(id)
    }

    /// The class removed as the application driver, if any.
    #[must_use]
    pub fn entry_class(&self) -> Option<&str> {
        self.entry_class.as_deref()
    }

    /// Every class that declared the entry point, in linearized order. Only
    /// the first was removed.
    #[must_use]
    pub fn entry_candidates(&self) -> &[String] {
        &self.entry_candidates
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Human-readable listing of every emitted class.
    #[must_use]
    pub fn to_text(&self) -> String {
        format_classes(
            &self.package,
            self.classes()
                .map(|rep| (rep, self.parent_of(rep).map(|parent| parent.name.as_str()))),
        )
    }
}

/// Build the emitted sequence from a fully resolved registry.
#[must_use]
pub fn finalize(registry: Registry, package: String, entry_point: &str) -> LoweredProgram {
    let candidates: Vec<ClassId> = registry
        .iter()
        .skip(ROOT_COUNT)
        .filter(|(_, rep)| rep.record.declares_method(entry_point))
        .map(|(id, _)| id)
        .collect();
    let removed = candidates.first().copied();
    for extra in candidates.iter().skip(1) {
        tracing::warn!(
            target: "pipeline",
            stage = "lowering.finalize",
            class = %registry.get(*extra).name,
            entry_point,
            "additional entry-point class kept in output"
        );
    }
    let emitted: Vec<ClassId> = registry
        .ids()
        .skip(ROOT_COUNT)
        .filter(|id| Some(*id) != removed)
        .collect();
    let entry_class = removed.map(|id| registry.get(id).name.clone());
    let entry_candidates = candidates
        .iter()
        .map(|id| registry.get(*id).name.clone())
        .collect();
    tracing::info!(
        target: "pipeline",
        stage = "lowering.finalize",
        emitted = emitted.len(),
        entry_class = entry_class.as_deref().unwrap_or("<none>"),
    );
    LoweredProgram {
        registry,
        emitted,
        package,
        entry_class,
        entry_candidates,
    }
}
