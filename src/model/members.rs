use serde::Serialize;

use super::types::{Access, Parameter, TypeRef};

/// Structural role of a class field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    #[default]
    Plain,
    /// Per-instance pointer to the class vtable.
    VTablePointer,
    /// The per-class static vtable instance.
    VTableInstance,
}

impl FieldKind {
    #[must_use]
    pub fn is_internal(self) -> bool {
        !matches!(self, FieldKind::Plain)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDecl {
    pub access: Access,
    pub is_static: bool,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub name: String,
    /// Raw initializer text; empty when the declaration has none.
    pub initializer: String,
    pub kind: FieldKind,
    /// Class that declared the field when it was copied down from an ancestor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<String>,
}

impl FieldDecl {
    #[must_use]
    pub fn plain(access: Access, is_static: bool, ty: TypeRef, name: impl Into<String>) -> Self {
        Self {
            access,
            is_static,
            ty,
            name: name.into(),
            initializer: String::new(),
            kind: FieldKind::Plain,
            inherited_from: None,
        }
    }

    #[must_use]
    pub fn with_initializer(mut self, initializer: impl Into<String>) -> Self {
        self.initializer = initializer.into();
        self
    }

    /// The `__vptr` field of `class`.
    #[must_use]
    pub fn vtable_pointer(class: &str) -> Self {
        Self {
            kind: FieldKind::VTablePointer,
            ..Self::plain(
                Access::Public,
                false,
                TypeRef::named(format!("__{class}_VT*")),
                "__vptr",
            )
        }
    }

    /// The static `__vtable` instance of `class`.
    #[must_use]
    pub fn vtable_instance(class: &str) -> Self {
        Self {
            kind: FieldKind::VTableInstance,
            ..Self::plain(
                Access::Public,
                true,
                TypeRef::named(format!("__{class}_VT")),
                "__vtable",
            )
        }
    }

    /// Whether a subclass copies this field into its own layout.
    #[must_use]
    pub fn is_inheritable(&self) -> bool {
        !self.is_static && !self.kind.is_internal()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodDecl {
    pub access: Access,
    pub is_static: bool,
    pub return_type: TypeRef,
    pub name: String,
    /// Parameter 0 is the receiver.
    pub parameters: Vec<Parameter>,
}

impl MethodDecl {
    /// Declared parameters without the leading receiver.
    pub fn explicit_parameters(&self) -> &[Parameter] {
        self.parameters.get(1..).unwrap_or(&[])
    }

    /// Whether this method may occupy a virtual slot.
    #[must_use]
    pub fn is_virtual_candidate(&self) -> bool {
        !self.is_static && !self.access.is_private()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstructorDecl {
    pub access: Access,
    pub name: String,
    /// Parameter 0 is the receiver.
    pub parameters: Vec<Parameter>,
}

/// Fields, constructors and methods of a class, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassRecord {
    pub fields: Vec<FieldDecl>,
    pub constructors: Vec<ConstructorDecl>,
    pub methods: Vec<MethodDecl>,
}

impl ClassRecord {
    #[must_use]
    pub fn declares_method(&self, name: &str) -> bool {
        self.methods.iter().any(|method| method.name == name)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|field| field.name == name)
    }
}
