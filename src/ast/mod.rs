//! Node shapes of the external syntax tree consumed by the declaration
//! collector.
//!
//! Parsing is done elsewhere; trees arrive either built in memory or as JSON.

mod builder;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationUnit {
    #[serde(default)]
    pub package: Option<PackageDeclaration>,
    #[serde(default)]
    pub classes: Vec<ClassDeclaration>,
}

impl CompilationUnit {
    /// Parse a JSON-encoded tree.
    ///
    /// # Errors
    /// Returns the deserializer error when the document does not match the
    /// documented node shapes.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Dotted package name, empty when the unit has no package declaration.
    #[must_use]
    pub fn package_name(&self) -> String {
        self.package
            .as_ref()
            .map(|package| package.segments.join("."))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDeclaration {
    pub segments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    #[serde(default)]
    pub modifiers: Vec<String>,
    pub name: String,
    #[serde(default)]
    pub extension: Option<Extension>,
    #[serde(default)]
    pub members: Vec<Member>,
}

/// `extends` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    #[serde(rename = "type")]
    pub ty: TypeNode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Member {
    Field(FieldDeclaration),
    Constructor(ConstructorDeclaration),
    Method(MethodDeclaration),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(rename = "type")]
    pub ty: TypeNode,
    pub declarators: Vec<Declarator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declarator {
    pub name: String,
    #[serde(default)]
    pub initializer: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorDeclaration {
    #[serde(default)]
    pub modifiers: Vec<String>,
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<FormalParameter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    #[serde(default)]
    pub modifiers: Vec<String>,
    pub result: ResultType,
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<FormalParameter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    Void,
    Type(TypeNode),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormalParameter {
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(rename = "type")]
    pub ty: TypeNode,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeNode {
    pub name: String,
    /// Array rank; `String[]` has one dimension.
    #[serde(default)]
    pub dimensions: usize,
}

impl TypeNode {
    /// Source spelling including array brackets.
    #[must_use]
    pub fn spelling(&self) -> String {
        let mut text = self.name.clone();
        for _ in 0..self.dimensions {
            text.push_str("[]");
        }
        text
    }
}

/// Opaque expression subtree; only its source text is carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    pub text: String,
}
