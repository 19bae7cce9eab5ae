//! Structured call signatures and slot initializers.
//!
//! The resolver never manipulates target text; the `Display` impls here are
//! the single place a signature or initializer is rendered.

use serde::Serialize;
use std::fmt;

use super::types::TypeRef;

/// Name of the per-class metadata accessor bound by type-identity slots.
pub const CLASS_ACCESSOR: &str = "__class";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CallSignature {
    pub receiver: Option<TypeRef>,
    pub parameters: Vec<TypeRef>,
    pub return_type: TypeRef,
}

impl CallSignature {
    #[must_use]
    pub fn method(receiver: &str, parameters: Vec<TypeRef>, return_type: TypeRef) -> Self {
        Self {
            receiver: Some(TypeRef::named(receiver)),
            parameters,
            return_type,
        }
    }

    /// Signature of a metadata accessor: no receiver, returns the class type.
    #[must_use]
    pub fn accessor(return_type: TypeRef) -> Self {
        Self {
            receiver: None,
            parameters: Vec::new(),
            return_type,
        }
    }

    /// Re-type the receiver so the slot's self type tracks a subclass. Only the
    /// receiver changes; parameters naming the old class keep it.
    #[must_use]
    pub fn with_receiver(&self, class: &str) -> Self {
        Self {
            receiver: self.receiver.as_ref().map(|_| TypeRef::named(class)),
            ..self.clone()
        }
    }

    /// All argument types, receiver first.
    pub fn argument_types(&self) -> impl Iterator<Item = &TypeRef> {
        self.receiver.iter().chain(self.parameters.iter())
    }

    /// Function-pointer type, e.g. `bool(*)(Widget, Object)`.
    #[must_use]
    pub fn pointer_type(&self) -> String {
        format!("{}(*)({self})", self.return_type)
    }
}

/// Renders the comma-joined argument type list.
impl fmt::Display for CallSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, ty) in self.argument_types().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{ty}")?;
        }
        Ok(())
    }
}

/// How a vtable slot is initialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SlotInitializer {
    /// Address of the class's own implementation.
    DirectAddress { class: String, method: String },
    /// Address of an ancestor's implementation cast to the subclass-typed
    /// signature.
    CastForward {
        signature: CallSignature,
        defining_class: String,
        method: String,
    },
    /// The class's own metadata accessor.
    TypeIdentity { class: String },
}

impl SlotInitializer {
    #[must_use]
    pub fn direct(class: &str, method: &str) -> Self {
        Self::DirectAddress {
            class: class.to_string(),
            method: method.to_string(),
        }
    }

    #[must_use]
    pub fn cast_forward(signature: CallSignature, defining_class: &str, method: &str) -> Self {
        Self::CastForward {
            signature,
            defining_class: defining_class.to_string(),
            method: method.to_string(),
        }
    }

    #[must_use]
    pub fn type_identity(class: &str) -> Self {
        Self::TypeIdentity {
            class: class.to_string(),
        }
    }

    /// Class whose implementation the slot dispatches to.
    #[must_use]
    pub fn target_class(&self) -> &str {
        match self {
            SlotInitializer::DirectAddress { class, .. }
            | SlotInitializer::TypeIdentity { class } => class,
            SlotInitializer::CastForward { defining_class, .. } => defining_class,
        }
    }
}

impl fmt::Display for SlotInitializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotInitializer::DirectAddress { class, method } => {
                write!(f, "(&__{class}::{method})")
            }
            SlotInitializer::CastForward {
                signature,
                defining_class,
                method,
            } => write!(
                f,
                "(({}) &__{defining_class}::{method})",
                signature.pointer_type()
            ),
            SlotInitializer::TypeIdentity { class } => {
                write!(f, "(&__{class}::{CLASS_ACCESSOR})")
            }
        }
    }
}
