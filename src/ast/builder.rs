//! Fluent constructors for building trees in memory.

use super::{
    ClassDeclaration, CompilationUnit, ConstructorDeclaration, Declarator, Expression, Extension,
    FieldDeclaration, FormalParameter, Member, MethodDeclaration, PackageDeclaration, ResultType,
    TypeNode,
};

fn keywords(modifiers: &[&str]) -> Vec<String> {
    modifiers.iter().map(|modifier| (*modifier).to_string()).collect()
}

fn formal_parameters(parameters: &[(&str, &str)]) -> Vec<FormalParameter> {
    parameters
        .iter()
        .map(|(ty, name)| FormalParameter {
            modifiers: Vec::new(),
            ty: TypeNode::new(ty),
            name: (*name).to_string(),
        })
        .collect()
}

impl CompilationUnit {
    /// Empty unit in the given dotted package (empty string for none).
    #[must_use]
    pub fn new(package: &str) -> Self {
        let package = (!package.is_empty()).then(|| PackageDeclaration {
            segments: package.split('.').map(str::to_string).collect(),
        });
        Self {
            package,
            classes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: ClassDeclaration) -> Self {
        self.classes.push(class);
        self
    }
}

impl TypeNode {
    /// Accepts trailing `[]` pairs, e.g. `String[]`.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let mut base = name;
        let mut dimensions = 0;
        while let Some(stripped) = base.strip_suffix("[]") {
            base = stripped;
            dimensions += 1;
        }
        Self {
            name: base.to_string(),
            dimensions,
        }
    }
}

impl ClassDeclaration {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            modifiers: vec!["public".into()],
            name: name.to_string(),
            extension: None,
            members: Vec::new(),
        }
    }

    #[must_use]
    pub fn extends(mut self, parent: &str) -> Self {
        self.extension = Some(Extension {
            ty: TypeNode::new(parent),
        });
        self
    }

    #[must_use]
    pub fn field(self, modifiers: &[&str], ty: &str, name: &str) -> Self {
        self.push_field(modifiers, ty, name, None)
    }

    #[must_use]
    pub fn field_with_initializer(
        self,
        modifiers: &[&str],
        ty: &str,
        name: &str,
        initializer: &str,
    ) -> Self {
        self.push_field(modifiers, ty, name, Some(initializer))
    }

    fn push_field(
        mut self,
        modifiers: &[&str],
        ty: &str,
        name: &str,
        initializer: Option<&str>,
    ) -> Self {
        self.members.push(Member::Field(FieldDeclaration {
            modifiers: keywords(modifiers),
            ty: TypeNode::new(ty),
            declarators: vec![Declarator {
                name: name.to_string(),
                initializer: initializer.map(|text| Expression {
                    text: text.to_string(),
                }),
            }],
        }));
        self
    }

    #[must_use]
    pub fn constructor(mut self, modifiers: &[&str], parameters: &[(&str, &str)]) -> Self {
        self.members.push(Member::Constructor(ConstructorDeclaration {
            modifiers: keywords(modifiers),
            name: self.name.clone(),
            parameters: formal_parameters(parameters),
        }));
        self
    }

    /// Add a method; `result` of `None` declares a `void` method.
    #[must_use]
    pub fn method(
        mut self,
        modifiers: &[&str],
        result: Option<&str>,
        name: &str,
        parameters: &[(&str, &str)],
    ) -> Self {
        self.members.push(Member::Method(MethodDeclaration {
            modifiers: keywords(modifiers),
            result: result.map_or(ResultType::Void, |ty| ResultType::Type(TypeNode::new(ty))),
            name: name.to_string(),
            parameters: formal_parameters(parameters),
        }));
        self
    }
}
