//! Field layout resolver: base-first struct layout with inherited instance
//! fields as a prefix.

use std::collections::HashSet;

use super::bootstrap::ROOT_COUNT;
use crate::model::{BASE_CLASS, ClassId, FieldDecl, ObjectRepresentation, Registry};

/// Resolve the field layout of every user class, in registry order. Only
/// meaningful on a linearized registry, so it stays behind [`super::lower`].
pub(crate) fn resolve_fields(registry: &mut Registry) {
    let mut resolved = 0usize;
    for id in registry.ids().skip(ROOT_COUNT) {
        if resolve_class_fields(registry, id) {
            resolved += 1;
        }
    }
    tracing::info!(
        target: "pipeline",
        stage = "lowering.fields",
        class_count = registry.len() - ROOT_COUNT.min(registry.len()),
        merged = resolved,
    );
}

/// Merge the parent's layout into `id`'s. Returns `false` when nothing is
/// inherited (the parent is the universal base).
pub(crate) fn resolve_class_fields(registry: &mut Registry, id: ClassId) -> bool {
    let Some((parent, child)) = registry.parent_and_child_mut(id) else {
        tracing::error!(
            target: "pipeline",
            stage = "lowering.fields.class",
            class = %registry.get(id).name,
            "parent is not resolved ahead of class"
        );
        return false;
    };
    if parent.name == BASE_CLASS {
        return false;
    }
    let declared = std::mem::take(&mut child.record.fields);
    child.record.fields = merge_fields(parent, declared);
    tracing::debug!(
        target: "pipeline",
        stage = "lowering.fields.class",
        class = %child.name,
        parent = %parent.name,
        fields = child.record.fields.len(),
    );
    true
}

/// Inherited instance fields first, in the parent's order, then the class's
/// own fields whose names are not taken yet. A redeclared name is dropped in
/// favour of the inherited field.
fn merge_fields(parent: &ObjectRepresentation, declared: Vec<FieldDecl>) -> Vec<FieldDecl> {
    let mut names: HashSet<String> = HashSet::new();
    let mut merged = Vec::with_capacity(parent.record.fields.len() + declared.len());
    for field in parent.record.fields.iter().filter(|field| field.is_inheritable()) {
        names.insert(field.name.clone());
        let mut inherited = field.clone();
        inherited
            .inherited_from
            .get_or_insert_with(|| parent.name.clone());
        merged.push(inherited);
    }
    for field in declared {
        if names.insert(field.name.clone()) {
            merged.push(field);
        } else {
            tracing::trace!(
                target: "pipeline",
                stage = "lowering.fields.shadowed",
                field = %field.name,
                parent = %parent.name,
            );
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Access, TypeRef};

    fn field(name: &str, is_static: bool) -> FieldDecl {
        FieldDecl::plain(Access::Private, is_static, TypeRef::named("int32_t"), name)
    }

    fn names(fields: &[FieldDecl]) -> Vec<&str> {
        fields.iter().map(|field| field.name.as_str()).collect()
    }

    #[test]
    fn inherited_prefix_then_new_fields() {
        let mut parent = ObjectRepresentation::new("A");
        parent.record.fields = vec![field("secret", false), field("counter", true), field("x", false)];
        let merged = merge_fields(&parent, vec![field("y", false), field("x", false), field("z", true)]);
        assert_eq!(names(&merged), ["secret", "x", "y", "z"]);
        assert_eq!(merged[0].inherited_from.as_deref(), Some("A"));
        assert_eq!(merged[2].inherited_from, None);
    }

    #[test]
    fn internal_fields_are_never_copied() {
        let mut parent = ObjectRepresentation::new("Holder");
        parent.record.fields = vec![
            FieldDecl::vtable_pointer("Holder"),
            field("payload", false),
            FieldDecl::vtable_instance("Holder"),
        ];
        let merged = merge_fields(&parent, Vec::new());
        assert_eq!(names(&merged), ["payload"]);
    }

    #[test]
    fn class_ahead_of_its_parent_is_left_untouched() {
        let mut registry = Registry::new();
        let child = registry
            .push(ObjectRepresentation::new("Child"))
            .unwrap_or_else(|| panic!("child inserted"));
        let mut parent = ObjectRepresentation::new("Parent");
        parent.record.fields = vec![field("inherited", false)];
        let parent = registry
            .push(parent)
            .unwrap_or_else(|| panic!("parent inserted"));
        registry.get_mut(child).parent = Some(parent);
        registry.get_mut(child).record.fields = vec![field("own", false)];

        assert!(!resolve_class_fields(&mut registry, child));
        assert_eq!(names(&registry.get(child).record.fields), ["own"]);
    }

    #[test]
    fn grandparent_tag_survives_a_second_copy() {
        let mut grandparent_field = field("depth", false);
        grandparent_field.inherited_from = Some("Root".into());
        let mut parent = ObjectRepresentation::new("Mid");
        parent.record.fields = vec![grandparent_field];
        let merged = merge_fields(&parent, Vec::new());
        assert_eq!(merged[0].inherited_from.as_deref(), Some("Root"));
    }
}
