use std::fmt::Write;

use super::members::{ConstructorDecl, FieldDecl, MethodDecl};
use super::registry::ObjectRepresentation;
use super::types::Parameter;
use super::vtable::VTable;

/// Render resolved classes (each paired with its parent's name) into a
/// human-readable listing.
#[must_use]
pub fn format_classes<'a>(
    package: &str,
    classes: impl IntoIterator<Item = (&'a ObjectRepresentation, Option<&'a str>)>,
) -> String {
    let mut out = String::new();
    let package = if package.is_empty() { "<default>" } else { package };
    let _ = writeln!(out, "package {package}");
    for (rep, parent) in classes {
        let _ = writeln!(out);
        format_class(rep, parent, &mut out);
    }
    out
}

fn format_class(rep: &ObjectRepresentation, parent: Option<&str>, out: &mut String) {
    match parent {
        Some(parent) => {
            let _ = writeln!(out, "class {} extends {parent} {{", rep.name);
        }
        None => {
            let _ = writeln!(out, "class {} {{", rep.name);
        }
    }
    if !rep.record.fields.is_empty() {
        let _ = writeln!(out, "  fields:");
        for field in &rep.record.fields {
            let _ = writeln!(out, "    {}", format_field(field));
        }
    }
    if !rep.record.constructors.is_empty() {
        let _ = writeln!(out, "  constructors:");
        for ctor in &rep.record.constructors {
            let _ = writeln!(out, "    {}", format_constructor(ctor));
        }
    }
    if !rep.record.methods.is_empty() {
        let _ = writeln!(out, "  methods:");
        for method in &rep.record.methods {
            let _ = writeln!(out, "    {}", format_method(method));
        }
    }
    format_vtable(&rep.vtable, out);
    let _ = writeln!(out, "}}");
}

fn format_vtable(table: &VTable, out: &mut String) {
    let _ = writeln!(out, "  vtable:");
    for (index, slot) in table.slots().iter().enumerate() {
        let _ = writeln!(
            out,
            "    [{index}] {}: {} = {}",
            slot.field.name,
            slot.field.signature.pointer_type(),
            slot.method.initializer
        );
    }
}

fn static_marker(is_static: bool) -> &'static str {
    if is_static { " static" } else { "" }
}

fn format_field(field: &FieldDecl) -> String {
    let mut line = format!(
        "{}{} {} {}",
        field.access,
        static_marker(field.is_static),
        field.ty,
        field.name
    );
    if !field.initializer.is_empty() {
        let _ = write!(line, " = {}", field.initializer);
    }
    if let Some(origin) = &field.inherited_from {
        let _ = write!(line, " (from {origin})");
    }
    line
}

fn format_parameters(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(|param| format!("{}: {}", param.name, param.ty))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_constructor(ctor: &ConstructorDecl) -> String {
    format!(
        "{} {}({})",
        ctor.access,
        ctor.name,
        format_parameters(&ctor.parameters)
    )
}

fn format_method(method: &MethodDecl) -> String {
    format!(
        "{}{} {} {}({})",
        method.access,
        static_marker(method.is_static),
        method.return_type,
        method.name,
        format_parameters(&method.parameters)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Access, TypeRef};

    #[test]
    fn field_lines_show_initializer_and_origin() {
        let mut field = FieldDecl::plain(Access::Public, true, TypeRef::named("int32_t"), "count")
            .with_initializer("0");
        assert_eq!(format_field(&field), "public static int32_t count = 0");
        field.inherited_from = Some("Base".into());
        assert_eq!(format_field(&field), "public static int32_t count = 0 (from Base)");
    }

    #[test]
    fn empty_package_is_labelled() {
        let text = format_classes("", std::iter::empty());
        assert_eq!(text, "package <default>\n");
    }
}
