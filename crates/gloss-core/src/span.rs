//! Source spans and span resolution.

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// Inclusive 0-based line range a node was parsed from.
///
/// Synthesized nodes (inserted docstrings, comments, summaries) carry no
/// span; span resolution treats them as "no context available".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start_line: u32,
    pub end_line: u32,
}

impl Span {
    #[must_use]
    pub const fn new(start_line: u32, end_line: u32) -> Self {
        Self {
            start_line,
            end_line,
        }
    }

    /// A span covering exactly one line.
    #[must_use]
    pub const fn single(line: u32) -> Self {
        Self {
            start_line: line,
            end_line: line,
        }
    }

    /// Slice the original source to the lines this span covers,
    /// joined with newlines.
    #[must_use]
    pub fn text(&self, source: &str) -> String {
        source
            .lines()
            .skip(self.start_line as usize)
            .take((self.end_line.saturating_sub(self.start_line) as usize) + 1)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Resolve the source text a node denotes.
///
/// - Node with its own span: the inclusive line range, joined with newlines.
/// - Node without a span: the first descendant (traversal order) that
///   carries one; that descendant's *start line alone* is the span.
/// - Neither: empty string. Callers must treat an empty result as
///   "no context available" and skip generation for that node.
#[must_use]
pub fn resolve_span(node: &Node, source: &str) -> String {
    match node.span() {
        Some(span) => span.text(source),
        None => first_descendant_span(node)
            .map(|span| Span::single(span.start_line).text(source))
            .unwrap_or_default(),
    }
}

fn first_descendant_span(node: &Node) -> Option<Span> {
    for child in node.children() {
        if let Some(span) = child.span() {
            return Some(span);
        }
        if let Some(span) = first_descendant_span(child) {
            return Some(span);
        }
    }
    None
}
