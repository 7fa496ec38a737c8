//! Regeneration: the typed tree back to source text.
//!
//! Produces syntactically valid Python for any tree assembled from the
//! pipeline's node kinds. Original blank-line layout is not preserved;
//! verbatim statement text is stored dedented, so indentation here is
//! purely a function of nesting depth.

use gloss_core::{Module, Node};

const INDENT: &str = "    ";

/// Render a module as source text.
#[must_use]
pub fn regenerate(module: &Module) -> String {
    let mut out = String::new();
    for node in &module.body {
        write_node(&mut out, node, 0);
    }
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    match node {
        Node::FunctionDef { header, body, .. } | Node::ClassDef { header, body, .. } => {
            write_lines(out, header, depth);
            // A body emptied by the remover still has to parse.
            if body.iter().all(is_non_code) {
                for child in body {
                    write_node(out, child, depth + 1);
                }
                write_lines(out, "pass", depth + 1);
            } else {
                for child in body {
                    write_node(out, child, depth + 1);
                }
            }
        }
        Node::ConstantExpr { value, .. } => write_lines(out, value, depth),
        Node::Import { text, .. }
        | Node::Assign { text, .. }
        | Node::Conditional { text, .. }
        | Node::Loop { text, .. }
        | Node::Return { text, .. }
        | Node::Comment { text, .. }
        | Node::Other { text, .. } => write_lines(out, text, depth),
    }
}

/// Comments alone cannot close a block in Python.
const fn is_non_code(node: &Node) -> bool {
    matches!(node, Node::Comment { .. })
}

fn write_lines(out: &mut String, text: &str, depth: usize) {
    for line in text.lines() {
        for _ in 0..depth {
            out.push_str(INDENT);
        }
        out.push_str(line);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use gloss_core::{Module, Node};
    use pretty_assertions::assert_eq;

    use super::regenerate;

    #[test]
    fn renders_nested_definitions_with_indentation() {
        let module = Module {
            body: vec![Node::ClassDef {
                name: "C".into(),
                header: "class C:".into(),
                body: vec![Node::FunctionDef {
                    name: "f".into(),
                    params: vec!["self".into()],
                    header: "def f(self):".into(),
                    body: vec![Node::Return {
                        value: Some("1".into()),
                        text: "return 1".into(),
                        span: None,
                    }],
                    span: None,
                }],
                span: None,
            }],
        };
        assert_eq!(
            regenerate(&module),
            "class C:\n    def f(self):\n        return 1\n"
        );
    }

    #[test]
    fn empty_body_gets_pass() {
        let module = Module {
            body: vec![Node::FunctionDef {
                name: "f".into(),
                params: vec![],
                header: "def f():".into(),
                body: vec![],
                span: None,
            }],
        };
        assert_eq!(regenerate(&module), "def f():\n    pass\n");
    }

    #[test]
    fn comment_only_body_still_gets_pass() {
        let module = Module {
            body: vec![Node::FunctionDef {
                name: "f".into(),
                params: vec![],
                header: "def f():".into(),
                body: vec![Node::comment("leftover")],
                span: None,
            }],
        };
        assert_eq!(regenerate(&module), "def f():\n    # leftover\n    pass\n");
    }

    #[test]
    fn multi_line_statements_keep_relative_layout() {
        let module = Module {
            body: vec![Node::Loop {
                text: "for i in range(3):\n    print(i)".into(),
                span: None,
            }],
        };
        assert_eq!(regenerate(&module), "for i in range(3):\n    print(i)\n");
    }

    #[test]
    fn round_trip_preserves_declarations() {
        let source = "\
import os

LIMIT = 10

def add(a, b):
    return a + b

class C:
    def double(self):
        return self.value * 2
";
        let module = gloss_parser::parse_module(source, "test.py").expect("parses");
        let regenerated = regenerate(&module);

        let original = gloss_parser::extract_from_source(source, "a.py").expect("extracts");
        let round_tripped =
            gloss_parser::extract_from_source(&regenerated, "b.py").expect("extracts");
        assert_eq!(round_tripped, original);
    }
}
