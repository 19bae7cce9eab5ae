//! Normalized type names, access modifiers, and parameters.

use serde::Serialize;
use std::fmt;

/// Name of the universal base class every hierarchy is rooted in.
pub const BASE_CLASS: &str = "Object";
/// Name of the built-in string value type.
pub const STRING_CLASS: &str = "String";
/// Name of the built-in class-metadata type.
pub const CLASS_CLASS: &str = "Class";

/// A type name after primitive normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    /// Normalize a source-level type name through the fixed primitive mapping.
    #[must_use]
    pub fn from_source(name: &str) -> Self {
        let mapped = match name {
            "long" => "int64_t",
            "int" => "int32_t",
            "short" => "int16_t",
            "byte" => "int8_t",
            "boolean" => "bool",
            other => other,
        };
        Self(mapped.to_string())
    }

    /// Wrap an already-normalized target type name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn void() -> Self {
        Self("void".into())
    }

    #[must_use]
    pub fn is_void(&self) -> bool {
        self.0 == "void"
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Member access level. A member without an access keyword is package-visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Access {
    Public,
    Private,
    Protected,
    #[default]
    Package,
}

impl Access {
    /// Parse an access keyword; returns `None` for non-access modifiers.
    #[must_use]
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            "protected" => Some(Self::Protected),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Access::Public => "public",
            Access::Private => "private",
            Access::Protected => "protected",
            Access::Package => "package",
        }
    }

    #[must_use]
    pub fn is_private(self) -> bool {
        matches!(self, Access::Private)
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access and `static` flag folded out of a modifier list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub access: Access,
    pub is_static: bool,
}

impl Modifiers {
    /// Fold a modifier list. The last access keyword wins; modifiers other than
    /// access keywords and `static` are ignored.
    pub fn from_keywords<'a>(keywords: impl IntoIterator<Item = &'a str>) -> Self {
        let mut modifiers = Self::default();
        for keyword in keywords {
            if keyword == "static" {
                modifiers.is_static = true;
            } else if let Some(access) = Access::parse(keyword) {
                modifiers.access = access;
            }
        }
        modifiers
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub name: String,
}

impl Parameter {
    #[must_use]
    pub fn new(ty: TypeRef, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
        }
    }

    /// Receiver parameter placed at index 0 of every method and constructor.
    #[must_use]
    pub fn receiver(class: &str) -> Self {
        Self::new(TypeRef::named(class), RECEIVER_NAME)
    }
}

pub const RECEIVER_NAME: &str = "__this";
