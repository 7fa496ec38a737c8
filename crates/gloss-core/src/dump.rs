//! Structural dump of the typed tree.
//!
//! A non-source, `ast.dump`-shaped rendering: suitable for diffing and
//! for the summary prompt, not for re-execution. Verbatim statement text
//! is single-quoted with escaped quotes/newlines so a dump is always one
//! line per call site.

use crate::node::{Module, Node};

/// Dump a whole module.
#[must_use]
pub fn dump_module(module: &Module) -> String {
    let body: Vec<String> = module.body.iter().map(dump_node).collect();
    format!("Module(body=[{}])", body.join(", "))
}

/// Dump a single node and its children.
#[must_use]
pub fn dump_node(node: &Node) -> String {
    match node {
        Node::Import { text, .. } => format!("Import(text={})", quote(text)),
        Node::Assign { target, value, .. } => {
            format!("Assign(target={}, value={})", quote(target), quote(value))
        }
        Node::FunctionDef {
            name, params, body, ..
        } => format!(
            "FunctionDef(name={}, params=[{}], body=[{}])",
            quote(name),
            params.iter().map(|p| quote(p)).collect::<Vec<_>>().join(", "),
            body.iter().map(dump_node).collect::<Vec<_>>().join(", "),
        ),
        Node::ClassDef { name, body, .. } => format!(
            "ClassDef(name={}, body=[{}])",
            quote(name),
            body.iter().map(dump_node).collect::<Vec<_>>().join(", "),
        ),
        Node::Conditional { text, .. } => format!("Conditional(text={})", quote(text)),
        Node::Loop { text, .. } => format!("Loop(text={})", quote(text)),
        Node::Return { value, .. } => format!(
            "Return(value={})",
            value.as_deref().map_or_else(|| "None".to_string(), quote),
        ),
        Node::ConstantExpr { value, .. } => format!("ConstantExpr(value={})", quote(value)),
        Node::Comment { text, .. } => format!("Comment(text={})", quote(text)),
        Node::Other { text, .. } => format!("Other(text={})", quote(text)),
    }
}

fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "\\n"))
}
