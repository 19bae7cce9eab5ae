//! Hand-specified root classes seeded ahead of every user class.
//!
//! The roots arrive fully resolved and are never rewritten by later passes.

use super::collector::CONSTRUCTOR_NAME;
use crate::model::{
    Access, BASE_CLASS, CLASS_CLASS, CallSignature, ConstructorDecl, FieldDecl, MethodDecl,
    ObjectRepresentation, Parameter, Registry, STRING_CLASS, SlotInitializer, TypeRef, VTableSlot,
};

/// Root class names in seeding order.
pub const ROOT_NAMES: [&str; 3] = [BASE_CLASS, STRING_CLASS, CLASS_CLASS];

/// Number of registry entries occupied by the roots.
pub const ROOT_COUNT: usize = ROOT_NAMES.len();

/// A registry holding the three roots at indices 0, 1 and 2, with the string
/// and class-metadata roots parented to the universal base.
#[must_use]
pub fn seed_registry() -> Registry {
    let mut registry = Registry::new();
    let [object, string, class] = roots();
    let base = registry.push(object);
    for mut root in [string, class] {
        root.parent = base;
        let inserted = registry.push(root);
        debug_assert!(inserted.is_some(), "root names are distinct");
    }
    registry
}

/// The universal base, string and class-metadata roots, in that order. Parent
/// handles are left unset; [`seed_registry`] links them.
#[must_use]
pub fn roots() -> [ObjectRepresentation; 3] {
    [object_root(), string_root(), class_root()]
}

fn ty(name: &str) -> TypeRef {
    TypeRef::named(name)
}

fn method(class: &str, return_type: &str, name: &str, params: &[(&str, &str)]) -> MethodDecl {
    MethodDecl {
        access: Access::Public,
        is_static: false,
        return_type: ty(return_type),
        name: name.to_string(),
        parameters: receiver_and(class, params),
    }
}

fn constructor(class: &str, params: &[(&str, &str)]) -> ConstructorDecl {
    ConstructorDecl {
        access: Access::Public,
        name: CONSTRUCTOR_NAME.to_string(),
        parameters: receiver_and(class, params),
    }
}

fn receiver_and(class: &str, params: &[(&str, &str)]) -> Vec<Parameter> {
    std::iter::once(Parameter::receiver(class))
        .chain(params.iter().map(|(ty_name, name)| Parameter::new(ty(ty_name), *name)))
        .collect()
}

fn signature(class: &str, return_type: &str, params: &[&str]) -> CallSignature {
    CallSignature::method(class, params.iter().map(|name| ty(name)).collect(), ty(return_type))
}

fn own_slot(class: &str, return_type: &str, name: &str, params: &[&str]) -> VTableSlot {
    VTableSlot::direct(
        Access::Public,
        class,
        name,
        signature(class, return_type, params),
    )
}

/// Slot forwarding to the universal base's implementation.
fn base_slot(class: &str, return_type: &str, name: &str, params: &[&str]) -> VTableSlot {
    let mut slot = own_slot(class, return_type, name, params);
    slot.field.inherited_from = Some(BASE_CLASS.to_string());
    slot.method.initializer =
        SlotInitializer::cast_forward(slot.field.signature.clone(), BASE_CLASS, name);
    slot
}

fn with_internal_fields(class: &str, fields: Vec<FieldDecl>) -> Vec<FieldDecl> {
    std::iter::once(FieldDecl::vtable_pointer(class))
        .chain(fields)
        .chain(std::iter::once(FieldDecl::vtable_instance(class)))
        .collect()
}

fn object_root() -> ObjectRepresentation {
    let mut rep = ObjectRepresentation::new(BASE_CLASS);
    let class = BASE_CLASS;
    rep.record.fields = with_internal_fields(class, Vec::new());
    rep.record.methods = vec![
        method(class, "int32_t", "hashCode", &[]),
        method(class, "bool", "equals", &[(BASE_CLASS, "o")]),
        method(class, CLASS_CLASS, "getClass", &[]),
        method(class, STRING_CLASS, "toString", &[]),
    ];
    rep.vtable.push(VTableSlot::type_identity(class, ty(CLASS_CLASS)));
    for mut slot in [
        own_slot(class, "int32_t", "hashCode", &[]),
        own_slot(class, "bool", "equals", &[BASE_CLASS]),
        own_slot(class, CLASS_CLASS, "getClass", &[]),
        own_slot(class, STRING_CLASS, "toString", &[]),
    ] {
        // Base slots stay untagged; forwarding defaults to the base anyway.
        slot.field.inherited_from = None;
        rep.vtable.push(slot);
    }
    rep
}

fn string_root() -> ObjectRepresentation {
    let mut rep = ObjectRepresentation::new(STRING_CLASS);
    let class = STRING_CLASS;
    rep.record.fields = with_internal_fields(
        class,
        vec![FieldDecl::plain(Access::Public, false, ty("std::string"), "data")],
    );
    rep.record.constructors = vec![constructor(class, &[("std::string", "data")])];
    rep.record.methods = vec![
        method(class, "int32_t", "hashCode", &[]),
        method(class, "bool", "equals", &[(BASE_CLASS, "o")]),
        method(class, STRING_CLASS, "toString", &[]),
        method(class, "int32_t", "length", &[]),
        method(class, "char", "charAt", &[("int32_t", "index")]),
    ];
    rep.vtable = [
        VTableSlot::type_identity(class, ty(CLASS_CLASS)),
        own_slot(class, "int32_t", "hashCode", &[]),
        own_slot(class, "bool", "equals", &[BASE_CLASS]),
        base_slot(class, CLASS_CLASS, "getClass", &[]),
        own_slot(class, STRING_CLASS, "toString", &[]),
        own_slot(class, "int32_t", "length", &[]),
        own_slot(class, "char", "charAt", &["int32_t"]),
    ]
    .into_iter()
    .collect();
    rep
}

fn class_root() -> ObjectRepresentation {
    let mut rep = ObjectRepresentation::new(CLASS_CLASS);
    let class = CLASS_CLASS;
    rep.record.fields = with_internal_fields(
        class,
        vec![
            FieldDecl::plain(Access::Public, false, ty(STRING_CLASS), "name"),
            FieldDecl::plain(Access::Public, false, ty(CLASS_CLASS), "parent"),
        ],
    );
    rep.record.constructors = vec![constructor(
        class,
        &[(STRING_CLASS, "name"), (CLASS_CLASS, "parent")],
    )];
    rep.record.methods = vec![
        method(class, STRING_CLASS, "toString", &[]),
        method(class, STRING_CLASS, "getName", &[]),
        method(class, CLASS_CLASS, "getSuperclass", &[]),
        method(class, "bool", "isInstance", &[(BASE_CLASS, "o")]),
    ];
    rep.vtable = [
        VTableSlot::type_identity(class, ty(CLASS_CLASS)),
        base_slot(class, "int32_t", "hashCode", &[]),
        base_slot(class, "bool", "equals", &[BASE_CLASS]),
        base_slot(class, CLASS_CLASS, "getClass", &[]),
        own_slot(class, STRING_CLASS, "toString", &[]),
        own_slot(class, STRING_CLASS, "getName", &[]),
        own_slot(class, CLASS_CLASS, "getSuperclass", &[]),
        own_slot(class, "bool", "isInstance", &[BASE_CLASS]),
    ]
    .into_iter()
    .collect();
    rep
}
