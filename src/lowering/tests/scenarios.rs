use super::*;

fn parent_and_child(child: ClassDeclaration) -> CompilationUnit {
    CompilationUnit::new("")
        .with_class(
            ClassDeclaration::new("A")
                .field(&["private"], "int", "secret")
                .field(&["public", "static"], "int", "counter")
                .method(&["public"], Some("boolean"), "foo", &[]),
        )
        .with_class(child.extends("A"))
}

#[test]
fn inherited_method_forwards_to_defining_class() {
    let program = lowered(&parent_and_child(ClassDeclaration::new("B")));
    let (a, b) = (class(&program, "A"), class(&program, "B"));
    assert_eq!(b.vtable.len(), a.vtable.len());
    assert_eq!(slot_names(&a.vtable), ["__is_a", "hashCode", "equals", "getClass", "toString", "foo"]);

    let foo = b.vtable.slot("foo").unwrap_or_else(|| panic!("foo slot"));
    assert_eq!(
        foo.method.initializer,
        SlotInitializer::cast_forward(
            crate::model::CallSignature::method("B", Vec::new(), crate::model::TypeRef::named("bool")),
            "A",
            "foo",
        )
    );
    assert_eq!(foo.method.initializer.to_string(), "((bool(*)(B)) &__A::foo)");
    assert_eq!(foo.field.inherited_from.as_deref(), Some("A"));
}

#[test]
fn override_keeps_the_parent_slot_index() {
    let child = ClassDeclaration::new("B").method(&["public"], Some("boolean"), "foo", &[]);
    let program = lowered(&parent_and_child(child));
    let (a, b) = (class(&program, "A"), class(&program, "B"));
    assert_eq!(a.vtable.slot_index("foo"), b.vtable.slot_index("foo"));
    let foo = b.vtable.slot("foo").unwrap_or_else(|| panic!("foo slot"));
    assert_eq!(foo.method.initializer, SlotInitializer::direct("B", "foo"));
    assert_eq!(foo.method.initializer.to_string(), "(&__B::foo)");
}

#[test]
fn private_field_is_laid_out_but_never_dispatched() {
    let program = lowered(&parent_and_child(ClassDeclaration::new("B")));
    let b = class(&program, "B");
    let secret = b.record.field("secret").unwrap_or_else(|| panic!("secret inherited"));
    assert_eq!(secret.inherited_from.as_deref(), Some("A"));
    assert!(!b.vtable.contains("secret"));
}

#[test]
fn static_field_is_not_inherited() {
    let program = lowered(&parent_and_child(ClassDeclaration::new("B")));
    assert!(class(&program, "A").record.field("counter").is_some());
    assert!(class(&program, "B").record.field("counter").is_none());
    assert_eq!(field_names(class(&program, "B")), ["secret"]);
}

#[test]
fn undeclared_parent_is_reported_with_both_names() {
    let unit = CompilationUnit::new("").with_class(ClassDeclaration::new("Z").extends("Y"));
    let err = lower(&unit, &LoweringOptions::default())
        .err()
        .unwrap_or_else(|| panic!("lowering should fail"));
    assert_eq!(
        err,
        LoweringError::UnresolvedParent {
            class: "Z".into(),
            parent: "Y".into()
        }
    );
    assert_eq!(err.to_string(), "class `Z` extends unknown class `Y`");
}

#[test]
fn private_child_method_does_not_override_public_parent_slot() {
    let child = ClassDeclaration::new("B").method(&["private"], Some("boolean"), "foo", &[]);
    let program = lowered(&parent_and_child(child));
    let b = class(&program, "B");
    assert_eq!(slot_names(&b.vtable).iter().filter(|name| **name == "foo").count(), 1);
    let foo = b.vtable.slot("foo").unwrap_or_else(|| panic!("foo slot"));
    assert_eq!(foo.method.initializer.target_class(), "A");
}

#[test]
fn static_child_method_does_not_override_either() {
    let child = ClassDeclaration::new("B").method(&["public", "static"], Some("boolean"), "foo", &[]);
    let program = lowered(&parent_and_child(child));
    let b = class(&program, "B");
    assert_eq!(b.vtable.len(), class(&program, "A").vtable.len());
    assert_eq!(
        b.vtable.slot("foo").map(|slot| slot.method.initializer.target_class()),
        Some("A")
    );
}

fn slot_targets(rep: &ObjectRepresentation) -> Vec<(&str, String)> {
    rep.vtable
        .slots()
        .iter()
        .map(|slot| (slot.name(), slot.method.initializer.to_string()))
        .collect()
}

fn field_origins(rep: &ObjectRepresentation) -> Vec<(&str, Option<&str>)> {
    rep.record
        .fields
        .iter()
        .map(|field| (field.name.as_str(), field.inherited_from.as_deref()))
        .collect()
}

#[test]
fn subclass_of_string_root_copies_payload_and_forwards_to_string() {
    let unit = CompilationUnit::new("").with_class(
        ClassDeclaration::new("Text")
            .extends("String")
            .method(&["public"], Some("int"), "length", &[]),
    );
    let program = lowered(&unit);
    let text = class(&program, "Text");
    assert_eq!(
        program.parent_of(text).map(|parent| parent.name.as_str()),
        Some("String")
    );
    assert_eq!(field_origins(text), [("data", Some("String"))]);
    assert_eq!(text.record.fields[0].ty.as_str(), "std::string");
    assert_eq!(
        slot_targets(text),
        [
            ("__is_a", "(&__Text::__class)".to_string()),
            ("hashCode", "((int32_t(*)(Text)) &__String::hashCode)".to_string()),
            ("equals", "((bool(*)(Text, Object)) &__String::equals)".to_string()),
            ("getClass", "((Class(*)(Text)) &__Object::getClass)".to_string()),
            ("toString", "((String(*)(Text)) &__String::toString)".to_string()),
            ("length", "(&__Text::length)".to_string()),
            ("charAt", "((char(*)(Text, int32_t)) &__String::charAt)".to_string()),
        ]
    );
}

#[test]
fn subclass_of_class_root_copies_metadata_fields_and_forwards_to_class() {
    let unit = CompilationUnit::new("").with_class(ClassDeclaration::new("Kind").extends("Class"));
    let program = lowered(&unit);
    let kind = class(&program, "Kind");
    assert_eq!(
        field_origins(kind),
        [("name", Some("Class")), ("parent", Some("Class"))]
    );
    assert_eq!(
        slot_targets(kind),
        [
            ("__is_a", "(&__Kind::__class)".to_string()),
            ("hashCode", "((int32_t(*)(Kind)) &__Object::hashCode)".to_string()),
            ("equals", "((bool(*)(Kind, Object)) &__Object::equals)".to_string()),
            ("getClass", "((Class(*)(Kind)) &__Object::getClass)".to_string()),
            ("toString", "((String(*)(Kind)) &__Class::toString)".to_string()),
            ("getName", "((String(*)(Kind)) &__Class::getName)".to_string()),
            ("getSuperclass", "((Class(*)(Kind)) &__Class::getSuperclass)".to_string()),
            ("isInstance", "((bool(*)(Kind, Object)) &__Class::isInstance)".to_string()),
        ]
    );
}
