use std::fs;
use std::path::{Path, PathBuf};

/// A small zoo: `Cat` overrides `speak`, `Main` carries the entry point.
pub const ZOO_AST: &str = r#"{
  "package": { "segments": ["zoo"] },
  "classes": [
    {
      "modifiers": ["public"],
      "name": "Animal",
      "members": [
        {
          "kind": "field",
          "modifiers": ["protected"],
          "type": { "name": "String" },
          "declarators": [{ "name": "name" }]
        },
        {
          "kind": "method",
          "modifiers": ["public"],
          "result": { "type": { "name": "String" } },
          "name": "speak"
        }
      ]
    },
    {
      "name": "Cat",
      "extension": { "type": { "name": "Animal" } },
      "members": [
        {
          "kind": "method",
          "modifiers": ["public"],
          "result": { "type": { "name": "String" } },
          "name": "speak"
        }
      ]
    },
    {
      "name": "Main",
      "members": [
        {
          "kind": "method",
          "modifiers": ["public", "static"],
          "result": "void",
          "name": "main",
          "parameters": [{ "type": { "name": "String", "dimensions": 1 }, "name": "args" }]
        }
      ]
    }
  ]
}"#;

/// `Z` extends a class nobody declares.
#[allow(dead_code)]
pub const DANGLING_AST: &str = r#"{
  "classes": [
    { "name": "Z", "extension": { "type": { "name": "Y" } } }
  ]
}"#;

pub fn write_ast(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap_or_else(|err| panic!("write {}: {err}", path.display()));
    path
}
