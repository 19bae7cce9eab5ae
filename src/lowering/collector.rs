//! Declaration collector: one walk over the syntax tree, producing an
//! unordered declaration per class.

use std::collections::HashSet;

use super::bootstrap::ROOT_NAMES;
use super::error::LoweringError;
use crate::ast::{
    ClassDeclaration, CompilationUnit, ConstructorDeclaration, FieldDeclaration,
    FormalParameter, Member, MethodDeclaration, ResultType,
};
use crate::model::{
    ClassRecord, ConstructorDecl, FieldDecl, MethodDecl, Modifiers, Parameter, TypeRef,
};

/// Constructors are recorded under this name regardless of the class name.
pub const CONSTRUCTOR_NAME: &str = "init";

/// A class as declared in source: parent unvalidated, vtable not yet built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclarationRecord {
    pub name: String,
    pub parent: Option<String>,
    pub record: ClassRecord,
}

/// Collector output, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    pub package: String,
    pub classes: Vec<ClassDeclarationRecord>,
}

/// Walk `unit` and collect every class declaration.
///
/// # Errors
/// Returns [`LoweringError::DuplicateClass`] when two classes share a name or a
/// class reuses a bootstrap root name.
pub fn collect(unit: &CompilationUnit) -> Result<Declarations, LoweringError> {
    let mut seen: HashSet<&str> = ROOT_NAMES.iter().copied().collect();
    let mut classes = Vec::with_capacity(unit.classes.len());
    for class in &unit.classes {
        if !seen.insert(class.name.as_str()) {
            return Err(LoweringError::DuplicateClass {
                name: class.name.clone(),
            });
        }
        classes.push(collect_class(class));
    }
    let declarations = Declarations {
        package: unit.package_name(),
        classes,
    };
    tracing::info!(
        target: "pipeline",
        stage = "lowering.collect",
        package = %declarations.package,
        class_count = declarations.classes.len(),
    );
    Ok(declarations)
}

fn collect_class(class: &ClassDeclaration) -> ClassDeclarationRecord {
    let mut record = ClassRecord::default();
    for member in &class.members {
        match member {
            Member::Field(field) => collect_field(&mut record, field),
            Member::Constructor(ctor) => collect_constructor(&mut record, &class.name, ctor),
            Member::Method(method) => collect_method(&mut record, &class.name, method),
        }
    }
    if record.constructors.len() > 1 {
        tracing::warn!(
            target: "pipeline",
            stage = "lowering.collect",
            class = %class.name,
            constructor_count = record.constructors.len(),
            "only one constructor per class is supported"
        );
    }
    let parent = class.extension.as_ref().map(|ext| ext.ty.name.clone());
    tracing::debug!(
        target: "pipeline",
        stage = "lowering.collect.class",
        class = %class.name,
        parent = parent.as_deref().unwrap_or("-"),
        fields = record.fields.len(),
        constructors = record.constructors.len(),
        methods = record.methods.len(),
    );
    ClassDeclarationRecord {
        name: class.name.clone(),
        parent,
        record,
    }
}

fn modifiers_of(keywords: &[String]) -> Modifiers {
    Modifiers::from_keywords(keywords.iter().map(String::as_str))
}

fn with_receiver(class: &str, parameters: &[FormalParameter]) -> Vec<Parameter> {
    std::iter::once(Parameter::receiver(class))
        .chain(
            parameters
                .iter()
                .map(|param| Parameter::new(TypeRef::from_source(&param.ty.spelling()), &param.name)),
        )
        .collect()
}

fn collect_field(record: &mut ClassRecord, field: &FieldDeclaration) {
    let modifiers = modifiers_of(&field.modifiers);
    let ty = TypeRef::from_source(&field.ty.spelling());
    for declarator in &field.declarators {
        let initializer = declarator
            .initializer
            .as_ref()
            .map(|expr| expr.text.clone())
            .unwrap_or_default();
        record.fields.push(
            FieldDecl::plain(
                modifiers.access,
                modifiers.is_static,
                ty.clone(),
                &declarator.name,
            )
            .with_initializer(initializer),
        );
    }
}

fn collect_constructor(record: &mut ClassRecord, class: &str, ctor: &ConstructorDeclaration) {
    let modifiers = modifiers_of(&ctor.modifiers);
    record.constructors.push(ConstructorDecl {
        access: modifiers.access,
        name: CONSTRUCTOR_NAME.to_string(),
        parameters: with_receiver(class, &ctor.parameters),
    });
}

fn collect_method(record: &mut ClassRecord, class: &str, method: &MethodDeclaration) {
    let modifiers = modifiers_of(&method.modifiers);
    let return_type = match &method.result {
        ResultType::Void => TypeRef::void(),
        ResultType::Type(ty) => TypeRef::from_source(&ty.spelling()),
    };
    record.methods.push(MethodDecl {
        access: modifiers.access,
        is_static: modifiers.is_static,
        return_type,
        name: method.name.clone(),
        parameters: with_receiver(class, &method.parameters),
    });
}
