//! Best-effort removal of previously inserted annotation artifacts.
//!
//! Heuristic cleanup, not a guaranteed inverse of insertion: a generated
//! docstring is indistinguishable from a hand-written one with the same
//! leading marker, so a hand-written module docstring is removed too.
//! Running the pass twice is the same as running it once.

use tracing::debug;

use gloss_core::{Module, Node};

/// Delete annotation artifacts from the tree, in place.
///
/// - Module level: expression-statements whose value is a string
///   constant beginning with a triple-quote marker.
/// - Direct children of module-level function/class bodies (no deeper):
///   comment statements and constants beginning with `#`.
pub fn remove_existing_annotations(module: &mut Module) {
    let before = module.body.len();
    module.body.retain(|node| !is_docstring_constant(node));
    let removed_docstrings = before - module.body.len();

    let mut removed_comments = 0;
    for node in &mut module.body {
        if let Some(body) = node.body_mut() {
            let before = body.len();
            body.retain(|child| !is_comment_artifact(child));
            removed_comments += before - body.len();
        }
    }
    debug!(removed_docstrings, removed_comments, "removed existing annotations");
}

fn is_docstring_constant(node: &Node) -> bool {
    match node {
        Node::ConstantExpr { value, .. } => {
            value.starts_with("\"\"\"") || value.starts_with("'''")
        }
        _ => false,
    }
}

fn is_comment_artifact(node: &Node) -> bool {
    match node {
        Node::Comment { .. } => true,
        Node::ConstantExpr { value, .. } => value.starts_with('#'),
        _ => false,
    }
}
