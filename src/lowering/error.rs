use std::error::Error as StdError;
use std::fmt;

/// Fatal defects in the class hierarchy. Any of these aborts the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoweringError {
    /// Two declarations (or a declaration and a bootstrap root) share a name.
    DuplicateClass { name: String },
    /// `class` extends `parent`, which is never declared.
    UnresolvedParent { class: String, parent: String },
    /// Parent links among `classes` form a cycle, listed in link order.
    CircularInheritance { classes: Vec<String> },
}

impl fmt::Display for LoweringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoweringError::DuplicateClass { name } => {
                write!(f, "class `{name}` is declared more than once")
            }
            LoweringError::UnresolvedParent { class, parent } => {
                write!(f, "class `{class}` extends unknown class `{parent}`")
            }
            LoweringError::CircularInheritance { classes } => {
                let mut chain = classes.join(" -> ");
                if let Some(first) = classes.first() {
                    chain.push_str(" -> ");
                    chain.push_str(first);
                }
                write!(f, "circular inheritance: {chain}")
            }
        }
    }
}

impl StdError for LoweringError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_classes_involved() {
        let unresolved = LoweringError::UnresolvedParent {
            class: "Z".into(),
            parent: "Y".into(),
        };
        assert_eq!(unresolved.to_string(), "class `Z` extends unknown class `Y`");

        let cycle = LoweringError::CircularInheritance {
            classes: vec!["A".into(), "B".into()],
        };
        assert_eq!(cycle.to_string(), "circular inheritance: A -> B -> A");

        let duplicate = LoweringError::DuplicateClass {
            name: "Widget".into(),
        };
        assert_eq!(
            duplicate.to_string(),
            "class `Widget` is declared more than once"
        );
    }
}
