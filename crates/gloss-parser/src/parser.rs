//! ast-grep wrapper: parse Python source and detect syntax errors.

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_core::Node;
use ast_grep_language::SupportLang;

use gloss_core::Module;

use crate::error::ParserError;
use crate::lower::lower;

/// The concrete AST tree type returned by [`parse_source`].
pub type PyTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Parse Python source into an ast-grep tree. Never fails: tree-sitter
/// produces a tree with `ERROR` nodes for invalid input.
#[must_use]
pub fn parse_source(source: &str) -> PyTree {
    use ast_grep_language::LanguageExt;
    SupportLang::Python.ast_grep(source)
}

/// Parse source into the lowered typed tree.
///
/// `path` labels error messages only.
///
/// # Errors
/// `ParserError::SyntaxError` if the parse contains any `ERROR` node;
/// no partial tree is returned.
pub fn parse_module(source: &str, path: &str) -> Result<Module, ParserError> {
    let tree = parse_source(source);
    if let Some(line) = first_error_line(&tree.root()) {
        return Err(ParserError::SyntaxError {
            path: path.to_string(),
            message: format!("invalid syntax at line {line}"),
        });
    }
    Ok(lower(&tree))
}

/// First `ERROR` node in the parse, as a 1-based line number.
fn first_error_line<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<usize> {
    if node.kind().as_ref() == "ERROR" {
        return Some(node.start_pos().line() + 1);
    }
    node.children().find_map(|child| first_error_line(&child))
}
