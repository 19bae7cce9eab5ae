use super::*;
use crate::ast::{ClassDeclaration, CompilationUnit};
use crate::model::{FieldDecl, ObjectRepresentation, SlotInitializer, VTable};

mod scenarios;

fn lowered(unit: &CompilationUnit) -> LoweredProgram {
    lower(unit, &LoweringOptions::default()).unwrap_or_else(|err| panic!("lowering failed: {err}"))
}

fn class<'a>(program: &'a LoweredProgram, name: &str) -> &'a ObjectRepresentation {
    program
        .registry()
        .by_name(name)
        .unwrap_or_else(|| panic!("class {name} registered"))
}

fn field_names(rep: &ObjectRepresentation) -> Vec<&str> {
    rep.record.fields.iter().map(|field| field.name.as_str()).collect()
}

fn slot_names(table: &VTable) -> Vec<&str> {
    table.fields().map(|field| field.name.as_str()).collect()
}

fn instance_fields(rep: &ObjectRepresentation) -> Vec<&FieldDecl> {
    rep.record
        .fields
        .iter()
        .filter(|field| field.is_inheritable())
        .collect()
}

/// Shape hierarchy used by several tests: declared child-first so the
/// linearizer has to defer.
fn shapes() -> CompilationUnit {
    CompilationUnit::new("geo")
        .with_class(
            ClassDeclaration::new("Square")
                .extends("Rect")
                .field(&["public"], "int", "side")
                .field(&["public"], "int", "width")
                .method(&["public"], Some("int"), "area", &[])
                .method(&["public"], Some("boolean"), "isSquare", &[]),
        )
        .with_class(
            ClassDeclaration::new("Rect")
                .extends("Shape")
                .field(&["public"], "int", "width")
                .field(&["public"], "int", "height")
                .method(&["public"], Some("int"), "area", &[])
                .method(&["public"], Some("String"), "toString", &[]),
        )
        .with_class(
            ClassDeclaration::new("Shape")
                .field(&["protected"], "String", "label")
                .field(&["public", "static"], "int", "count")
                .field(&["private"], "long", "id")
                .method(&["public"], Some("int"), "area", &[])
                .method(&["public"], None, "scale", &[("double", "factor")])
                .method(&["public", "static"], Some("Shape"), "unit", &[])
                .method(&["private"], None, "touch", &[]),
        )
        .with_class(
            ClassDeclaration::new("App")
                .extends("Square")
                .method(&["public", "static"], None, "main", &[("String[]", "args")]),
        )
}

#[test]
fn pipeline_emits_user_classes_in_parent_first_order() {
    let program = lowered(&shapes());
    let names: Vec<_> = program.classes().map(|rep| rep.name.as_str()).collect();
    assert_eq!(names, ["Shape", "Rect", "Square"]);
    assert_eq!(program.package(), "geo");
    assert_eq!(program.entry_class(), Some("App"));
}

#[test]
fn entry_class_is_resolved_like_any_other() {
    let program = lowered(&shapes());
    let app = class(&program, "App");
    assert_eq!(app.vtable.len(), class(&program, "Square").vtable.len());
    assert_eq!(field_names(app), field_names(class(&program, "Square")));
}

#[test]
fn custom_entry_point_name_is_honoured() {
    let unit = CompilationUnit::new("")
        .with_class(ClassDeclaration::new("Main").method(&["public", "static"], None, "main", &[]))
        .with_class(ClassDeclaration::new("Boot").method(&["public", "static"], None, "start", &[]));
    let options = LoweringOptions {
        entry_point: "start".into(),
        ..LoweringOptions::default()
    };
    let program = lower(&unit, &options).unwrap_or_else(|err| panic!("{err}"));
    let names: Vec<_> = program.classes().map(|rep| rep.name.as_str()).collect();
    assert_eq!(names, ["Main"]);
    assert_eq!(program.entry_class(), Some("Boot"));
}

#[test]
fn duplicate_and_cyclic_units_fail() {
    let duplicate = CompilationUnit::new("")
        .with_class(ClassDeclaration::new("A"))
        .with_class(ClassDeclaration::new("A"));
    assert_eq!(
        lower(&duplicate, &LoweringOptions::default()).err(),
        Some(LoweringError::DuplicateClass { name: "A".into() })
    );

    let root_clash = CompilationUnit::new("").with_class(ClassDeclaration::new("String"));
    assert!(matches!(
        lower(&root_clash, &LoweringOptions::default()),
        Err(LoweringError::DuplicateClass { .. })
    ));

    let cycle = CompilationUnit::new("")
        .with_class(ClassDeclaration::new("A").extends("B"))
        .with_class(ClassDeclaration::new("B").extends("A"));
    assert_eq!(
        lower(&cycle, &LoweringOptions::default()).err(),
        Some(LoweringError::CircularInheritance {
            classes: vec!["A".into(), "B".into()]
        })
    );
}

#[test]
fn every_slot_initializer_targets_an_ancestor_or_self() {
    let program = lowered(&shapes());
    for rep in program.classes() {
        let mut lineage = vec![rep.name.clone()];
        let mut cursor = program.parent_of(rep);
        while let Some(parent) = cursor {
            lineage.push(parent.name.clone());
            cursor = program.parent_of(parent);
        }
        for slot in rep.vtable.methods() {
            let target = slot.initializer.target_class();
            assert!(
                lineage.iter().any(|name| name == target),
                "{}::{} targets {target}",
                rep.name,
                slot.name
            );
            if let SlotInitializer::TypeIdentity { class } = &slot.initializer {
                assert_eq!(class, &rep.name);
            }
        }
    }
}
