//! The annotation engine: docstring, comment, and summary passes.
//!
//! Generation calls run strictly in sequence, in traversal order, so
//! inserted content matches document order. The comment pass is
//! two-phase: a read-only walk records insertion points, generation
//! runs over the recorded list, and all insertions are applied
//! afterwards against stable indices, so the iterated bodies are never
//! mutated mid-walk.

use tracing::debug;

use gloss_core::{dump_module, resolve_span, Module, Node};
use gloss_llm::TextGenerator;

/// Mutate the tree in place with synthesized docstrings, line comments,
/// and a whole-file summary.
///
/// A per-node service failure yields empty text from the generator and
/// never stops the remaining nodes: empty docstrings are still inserted,
/// empty comments are dropped.
pub async fn annotate<G: TextGenerator>(module: &mut Module, source: &str, generator: &G) {
    docstring_pass(module, source, generator).await;
    comment_pass(module, source, generator).await;
    summary_pass(module, generator).await;
}

/// Docstrings for direct module-body class and function definitions.
async fn docstring_pass<G: TextGenerator>(module: &mut Module, source: &str, generator: &G) {
    for node in &mut module.body {
        let kind = match node {
            Node::FunctionDef { .. } => "function",
            Node::ClassDef { .. } => "class",
            _ => continue,
        };
        let context = resolve_span(node, source);
        if context.is_empty() {
            debug!(kind, "no source context for definition, skipping docstring");
            continue;
        }
        debug!(kind, "generating docstring");
        let prompt = format!("Generate a docstring for the following {kind}:\n\n{context}");
        let docstring = generator.generate(&prompt).await;
        // Inserted verbatim, empty content included.
        if let Some(body) = node.body_mut() {
            body.insert(0, Node::docstring(&docstring));
        }
    }
}

/// A recorded comment insertion: the body is addressed by the index path
/// of its enclosing definitions, the position by a pre-insertion index.
struct PendingComment {
    path: Vec<usize>,
    index: usize,
    context: String,
}

async fn comment_pass<G: TextGenerator>(module: &mut Module, source: &str, generator: &G) {
    let mut pending = Vec::new();
    collect_eligible(&module.body, &mut Vec::new(), source, &mut pending);

    let mut insertions = Vec::new();
    for comment in pending {
        debug!("generating line comment");
        let prompt = format!(
            "Generate a one-line comment explaining the following code:\n\n{}",
            comment.context
        );
        let text = generator.generate(&prompt).await;
        // Only non-empty results are inserted.
        if !text.is_empty() {
            insertions.push((comment.path, comment.index, text));
        }
    }

    // Reverse application order: an insertion only shifts positions after
    // it in traversal order, and those are all applied first.
    for (path, index, text) in insertions.into_iter().rev() {
        if let Some(body) = body_at_path(module, &path) {
            body.insert(index, Node::comment(&text));
        }
    }
}

/// Read-only walk recording every commentable node, in traversal order.
/// Definitions themselves are skipped (the docstring pass owns them) but
/// their bodies are walked.
fn collect_eligible(
    body: &[Node],
    path: &mut Vec<usize>,
    source: &str,
    pending: &mut Vec<PendingComment>,
) {
    for (index, node) in body.iter().enumerate() {
        match node {
            Node::FunctionDef { body: inner, .. } | Node::ClassDef { body: inner, .. } => {
                path.push(index);
                collect_eligible(inner, path, source, pending);
                path.pop();
            }
            Node::ConstantExpr { .. }
            | Node::Assign { .. }
            | Node::Conditional { .. }
            | Node::Loop { .. } => {
                let context = resolve_span(node, source);
                // Empty resolved span: no context available, skip.
                if !context.is_empty() {
                    pending.push(PendingComment {
                        path: path.clone(),
                        index,
                        context,
                    });
                }
            }
            _ => {}
        }
    }
}

fn body_at_path<'a>(module: &'a mut Module, path: &[usize]) -> Option<&'a mut Vec<Node>> {
    let mut body = &mut module.body;
    for &index in path {
        body = body.get_mut(index).and_then(Node::body_mut)?;
    }
    Some(body)
}

/// One summary over the structural dump of the already-mutated tree,
/// inserted as the first statement of the module body.
async fn summary_pass<G: TextGenerator>(module: &mut Module, generator: &G) {
    debug!("generating code summary");
    let dump = dump_module(module);
    let prompt = format!("Summarize the following code and the added comments:\n\n{dump}");
    let summary = generator.generate(&prompt).await;
    module.body.insert(0, Node::docstring(&summary));
}
