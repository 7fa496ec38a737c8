//! Structural extraction: one walk over the typed tree building the
//! Declaration Document.
//!
//! Scope tracking is a name stack pushed on entering a definition and
//! popped on leaving it, so "module level" means exactly that for the
//! whole file regardless of where the first definition sits.

use std::path::Path;

use tracing::debug;

use gloss_core::{dump_node, ClassDecl, DeclarationDoc, FunctionDecl, Node};

use crate::error::ParserError;
use crate::parser::parse_module;

/// Produce the Declaration Document for a Python file.
///
/// # Errors
/// Unreadable file or syntax error fails the whole call; there is no
/// partial document.
pub fn extract_declarations(path: &Path) -> Result<DeclarationDoc, ParserError> {
    let display = path.display().to_string();
    let source = std::fs::read_to_string(path).map_err(|error| {
        if error.kind() == std::io::ErrorKind::NotFound {
            ParserError::FileNotFound(display.clone())
        } else {
            ParserError::Io(error)
        }
    })?;
    extract_from_source(&source, &display)
}

/// Extract from in-memory source. `path` labels error messages only.
///
/// # Errors
/// `ParserError::SyntaxError` if the source does not parse.
pub fn extract_from_source(source: &str, path: &str) -> Result<DeclarationDoc, ParserError> {
    let module = parse_module(source, path)?;
    let mut doc = DeclarationDoc::default();
    let mut scopes: Vec<String> = Vec::new();
    for node in &module.body {
        visit(node, &mut scopes, &mut doc, source);
    }
    debug!(
        path,
        imports = doc.imports.len(),
        functions = doc.functions.len(),
        classes = doc.classes.len(),
        "extracted declarations"
    );
    Ok(doc)
}

fn visit(node: &Node, scopes: &mut Vec<String>, doc: &mut DeclarationDoc, source: &str) {
    match node {
        Node::Import { .. } => doc.imports.push(dump_node(node)),
        Node::Assign { target, value, .. } => {
            // Only simple-name targets at module level become globals.
            if scopes.is_empty() && is_simple_name(target) {
                doc.global_variables.insert(target.clone(), value.clone());
            }
        }
        Node::FunctionDef { name, body, .. } => {
            if scopes.is_empty() {
                doc.functions.insert(name.clone(), function_decl(node, source));
            }
            scopes.push(name.clone());
            for child in body {
                visit(child, scopes, doc, source);
            }
            scopes.pop();
        }
        Node::ClassDef { name, body, .. } => {
            if scopes.is_empty() {
                doc.classes.insert(name.clone(), class_decl(body, source));
            }
            scopes.push(name.clone());
            for child in body {
                visit(child, scopes, doc, source);
            }
            scopes.pop();
        }
        _ => {}
    }
}

/// A module-level function entry: header line and return lines removed
/// from the body, `returns` from the first direct-child return statement.
fn function_decl(node: &Node, source: &str) -> FunctionDecl {
    let Node::FunctionDef { params, body, .. } = node else {
        return FunctionDecl::default();
    };
    let returns = body
        .iter()
        .find_map(|child| match child {
            Node::Return { value, .. } => Some(value.clone()),
            _ => None,
        })
        .flatten();
    FunctionDecl {
        arguments: params.clone(),
        returns,
        body: definition_body(node, source, true),
    }
}

/// A method entry: direct-child function definitions only, `returns`
/// always absent and return lines kept in the body.
fn class_decl(body: &[Node], source: &str) -> ClassDecl {
    let mut decl = ClassDecl::default();
    for child in body {
        if let Node::FunctionDef { name, params, .. } = child {
            decl.methods.insert(
                name.clone(),
                FunctionDecl {
                    arguments: params.clone(),
                    returns: None,
                    body: definition_body(child, source, false),
                },
            );
        }
    }
    decl
}

/// The definition's span text with the first (header) line dropped and
/// every remaining line stripped of surrounding whitespace. When
/// `drop_returns` is set, lines starting with the `return` keyword are
/// removed as well.
fn definition_body(node: &Node, source: &str, drop_returns: bool) -> String {
    let Some(span) = node.span() else {
        return String::new();
    };
    span.text(source)
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !(drop_returns && line.starts_with("return")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_simple_name(target: &str) -> bool {
    let mut chars = target.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::extract_from_source;

    #[test]
    fn end_to_end_function_and_class() {
        let source = "\
def add_numbers(a, b):
    return a + b

class MyClass:
    def double(self):
        return self.value * 2
";
        let doc = extract_from_source(source, "test.py").expect("extracts");

        let add = &doc.functions["add_numbers"];
        assert_eq!(add.arguments, vec!["a", "b"]);
        assert_eq!(add.returns.as_deref(), Some("a + b"));
        assert_eq!(add.body, "");

        let double = &doc.classes["MyClass"].methods["double"];
        assert_eq!(double.arguments, vec!["self"]);
        assert_eq!(double.returns, None);
        assert_eq!(double.body, "return self.value * 2");
    }

    #[test]
    fn globals_only_at_module_level() {
        let source = "\
LIMIT = 10

def f():
    inner = 1
    return inner

TRAILING = 'yes'
";
        let doc = extract_from_source(source, "test.py").expect("extracts");
        assert_eq!(doc.global_variables["LIMIT"], "10");
        // Assignments after the first definition are still module level.
        assert_eq!(doc.global_variables["TRAILING"], "'yes'");
        assert!(!doc.global_variables.contains_key("inner"));
    }

    #[test]
    fn nested_functions_are_not_module_level() {
        let source = "\
def outer():
    def inner():
        return 1
    return inner
";
        let doc = extract_from_source(source, "test.py").expect("extracts");
        assert!(doc.functions.contains_key("outer"));
        assert!(!doc.functions.contains_key("inner"));
    }

    #[test]
    fn nested_classes_are_not_methods() {
        let source = "\
class Outer:
    class Inner:
        pass

    def method(self):
        pass
";
        let doc = extract_from_source(source, "test.py").expect("extracts");
        let outer = &doc.classes["Outer"];
        assert!(outer.methods.contains_key("method"));
        assert!(!outer.methods.contains_key("Inner"));
        assert!(!doc.classes.contains_key("Inner"));
    }

    #[test]
    fn imports_are_dumps_in_order() {
        let source = "import os\nimport sys\n";
        let doc = extract_from_source(source, "test.py").expect("extracts");
        assert_eq!(
            doc.imports,
            vec!["Import(text='import os')", "Import(text='import sys')"]
        );
    }

    #[test]
    fn last_writer_wins_on_redefinition() {
        let source = "\
def f():
    return 1

def f():
    return 2
";
        let doc = extract_from_source(source, "test.py").expect("extracts");
        assert_eq!(doc.functions["f"].returns.as_deref(), Some("2"));
    }

    #[test]
    fn syntax_error_is_a_hard_failure() {
        let result = extract_from_source("def broken(:\n", "bad.py");
        assert!(result.is_err());
    }

    #[test]
    fn attribute_targets_are_not_globals() {
        let source = "obj.attr = 1\nname = 2\n";
        let doc = extract_from_source(source, "test.py").expect("extracts");
        assert!(!doc.global_variables.contains_key("obj.attr"));
        assert_eq!(doc.global_variables["name"], "2");
    }
}
