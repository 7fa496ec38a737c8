//! Comment stripping: a comment-free structural dump of a file.
//!
//! The pass is shallow on purpose: only direct children of the module
//! body are inspected for comment nodes. Comments nested inside function
//! or class bodies survive into the dump (as `Comment(...)` entries).

use gloss_core::{dump_node, Module, Node};

use crate::error::ParserError;
use crate::parser::parse_module;

/// Parse `source` (comments retained as first-class nodes) and dump every
/// top-level statement except comments, concatenated in original order.
///
/// The result is a structural dump, not reconstituted source: good for
/// diffing and inspection, not for re-execution.
///
/// # Errors
/// `ParserError::SyntaxError` if the source does not parse.
pub fn strip_comments(source: &str, path: &str) -> Result<String, ParserError> {
    let module = parse_module(source, path)?;
    Ok(module
        .body
        .iter()
        .filter(|node| !matches!(node, Node::Comment { .. }))
        .map(dump_node)
        .collect())
}

/// Dump of every top-level statement of an already-lowered module, with
/// nothing removed. `strip_comments` on a comment-free file equals this.
#[must_use]
pub fn dump_top_level(module: &Module) -> String {
    module.body.iter().map(dump_node).collect()
}
