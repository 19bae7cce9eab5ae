//! VTable resolver: override detection, slot carry-forward with cast thunks,
//! and appending newly introduced virtuals.

use super::bootstrap::ROOT_COUNT;
use crate::model::{
    BASE_CLASS, CallSignature, ClassId, MethodDecl, ObjectRepresentation, Registry, SlotField,
    SlotInitializer, SlotKind, VSlot, VTable, VTableSlot,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SlotStats {
    overridden: usize,
    forwarded: usize,
    introduced: usize,
}

/// Build the vtable of every user class, in registry order. Expects the
/// field pass to have run over a linearized registry.
pub(crate) fn resolve_vtables(registry: &mut Registry) {
    let mut slots = 0usize;
    for id in registry.ids().skip(ROOT_COUNT) {
        slots += resolve_class_vtable(registry, id);
    }
    tracing::info!(
        target: "pipeline",
        stage = "lowering.vtables",
        class_count = registry.len() - ROOT_COUNT.min(registry.len()),
        slot_count = slots,
    );
}

/// Build `id`'s vtable from its parent's. Returns the resulting slot count.
pub(crate) fn resolve_class_vtable(registry: &mut Registry, id: ClassId) -> usize {
    let Some((parent, child)) = registry.parent_and_child_mut(id) else {
        tracing::error!(
            target: "pipeline",
            stage = "lowering.vtables.class",
            class = %registry.get(id).name,
            "parent is not resolved ahead of class"
        );
        return 0;
    };
    let (vtable, stats) = build_vtable(parent, &child.name, &child.record.methods);
    tracing::debug!(
        target: "pipeline",
        stage = "lowering.vtables.class",
        class = %child.name,
        parent = %parent.name,
        slots = vtable.len(),
        overridden = stats.overridden,
        forwarded = stats.forwarded,
        introduced = stats.introduced,
        version = vtable.fingerprint(&child.name),
    );
    child.vtable = vtable;
    child.vtable.len()
}

fn build_vtable(
    parent: &ObjectRepresentation,
    class: &str,
    methods: &[MethodDecl],
) -> (VTable, SlotStats) {
    let mut stats = SlotStats::default();
    let mut table = VTable::new();

    for inherited in parent.vtable.slots() {
        let field = &inherited.field;
        if field.kind == SlotKind::TypeIdentity {
            table.push(VTableSlot::type_identity(
                class,
                field.return_type().clone(),
            ));
            continue;
        }
        if field.is_static || field.access.is_private() {
            continue;
        }
        let overriding = methods
            .iter()
            .find(|method| method.name == field.name && method.is_virtual_candidate());
        if let Some(method) = overriding {
            table.push(own_slot(class, method));
            stats.overridden += 1;
        } else {
            table.push(forward_slot(class, field));
            stats.forwarded += 1;
        }
    }

    for method in methods {
        if method.is_virtual_candidate() && !table.contains(&method.name) {
            table.push(own_slot(class, method));
            stats.introduced += 1;
        }
    }
    (table, stats)
}

/// Slot dispatching to `class`'s own implementation of `method`.
fn own_slot(class: &str, method: &MethodDecl) -> VTableSlot {
    let signature = CallSignature::method(
        class,
        method
            .explicit_parameters()
            .iter()
            .map(|param| param.ty.clone())
            .collect(),
        method.return_type.clone(),
    );
    VTableSlot::direct(method.access, class, &method.name, signature)
}

/// Inherited slot re-typed for `class`, forwarding to the defining class's
/// implementation through a cast.
fn forward_slot(class: &str, inherited: &SlotField) -> VTableSlot {
    let signature = inherited.signature.with_receiver(class);
    let defining = inherited
        .inherited_from
        .clone()
        .unwrap_or_else(|| BASE_CLASS.to_string());
    let initializer = SlotInitializer::cast_forward(signature.clone(), &defining, &inherited.name);
    VTableSlot {
        field: SlotField {
            access: inherited.access,
            is_static: false,
            kind: SlotKind::Method,
            name: inherited.name.clone(),
            signature,
            inherited_from: Some(defining),
        },
        method: VSlot {
            access: inherited.access,
            is_static: false,
            name: inherited.name.clone(),
            initializer,
        },
    }
}
