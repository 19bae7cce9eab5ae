//! Arena of object representations addressed by [`ClassId`].

use std::collections::HashMap;

use super::members::ClassRecord;
use super::vtable::VTable;

/// Stable handle of a class inside a [`Registry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(usize);

impl ClassId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A class with its layout record and virtual table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRepresentation {
    pub name: String,
    /// Non-owning handle into the same registry. Only the universal base has
    /// no parent.
    pub parent: Option<ClassId>,
    pub record: ClassRecord,
    pub vtable: VTable,
}

impl ObjectRepresentation {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            record: ClassRecord::default(),
            vtable: VTable::new(),
        }
    }
}

/// Ordered collection of classes with lookup by name. Once linearized, every
/// parent sits at a strictly smaller index than its children.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<ObjectRepresentation>,
    by_name: HashMap<String, ClassId>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a class. Returns `None` when the name is already taken.
    pub fn push(&mut self, rep: ObjectRepresentation) -> Option<ClassId> {
        if self.by_name.contains_key(&rep.name) {
            return None;
        }
        let id = ClassId(self.entries.len());
        self.by_name.insert(rep.name.clone(), id);
        self.entries.push(rep);
        Some(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// # Panics
    /// Panics when `id` was not handed out by this registry.
    #[must_use]
    pub fn get(&self, id: ClassId) -> &ObjectRepresentation {
        &self.entries[id.0]
    }

    /// # Panics
    /// Panics when `id` was not handed out by this registry.
    pub fn get_mut(&mut self, id: ClassId) -> &mut ObjectRepresentation {
        &mut self.entries[id.0]
    }

    pub fn by_name(&self, name: &str) -> Option<&ObjectRepresentation> {
        self.lookup(name).map(|id| self.get(id))
    }

    pub fn parent_of(&self, id: ClassId) -> Option<&ObjectRepresentation> {
        self.get(id).parent.map(|parent| self.get(parent))
    }

    pub fn ids(&self) -> impl Iterator<Item = ClassId> + use<> {
        (0..self.entries.len()).map(ClassId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &ObjectRepresentation)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, rep)| (ClassId(index), rep))
    }

    /// Borrow a class mutably together with its (already resolved) parent.
    /// Returns `None` for a parentless class or when the parent does not
    /// precede the child.
    pub fn parent_and_child_mut(
        &mut self,
        child: ClassId,
    ) -> Option<(&ObjectRepresentation, &mut ObjectRepresentation)> {
        let parent = self.entries.get(child.0)?.parent?;
        if parent.0 >= child.0 {
            return None;
        }
        let (head, tail) = self.entries.split_at_mut(child.0);
        Some((&head[parent.0], &mut tail[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_rejects_duplicate_names() {
        let mut registry = Registry::new();
        let first = registry.push(ObjectRepresentation::new("Widget"));
        assert_eq!(first.map(ClassId::index), Some(0));
        assert!(registry.push(ObjectRepresentation::new("Widget")).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_panics_on_a_foreign_handle() {
        let mut other = Registry::new();
        for name in ["A", "B", "C"] {
            other.push(ObjectRepresentation::new(name));
        }
        let foreign = other.lookup("C").unwrap_or_else(|| panic!("C inserted"));
        let _ = Registry::new().get(foreign);
    }

    #[test]
    fn parent_and_child_mut_requires_parent_first() {
        let mut registry = Registry::new();
        let base = registry
            .push(ObjectRepresentation::new("Base"))
            .unwrap_or_else(|| panic!("base inserted"));
        let mut child = ObjectRepresentation::new("Child");
        child.parent = Some(base);
        let child = registry
            .push(child)
            .unwrap_or_else(|| panic!("child inserted"));

        let (parent, rep) = registry
            .parent_and_child_mut(child)
            .unwrap_or_else(|| panic!("split borrow"));
        assert_eq!(parent.name, "Base");
        rep.parent = None;
        assert!(registry.get(child).parent.is_none());
        assert!(registry.parent_and_child_mut(base).is_none());
    }
}
