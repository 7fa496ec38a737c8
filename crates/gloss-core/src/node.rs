//! The closed typed tree the pipeline walks and mutates.
//!
//! A deliberately small node vocabulary: only the kinds the extraction
//! and annotation passes act on get structure; everything else lowers to
//! [`Node::Other`] with its verbatim text. Compound statements
//! (conditionals, loops) are opaque single units with a kind tag, so the
//! comment pass can classify them without recursing into their blocks.

use crate::span::Span;

/// A Python module: the root of one lowered parse.
///
/// Owned exclusively by the pipeline invocation that created it and
/// mutated in place by the annotation engine and the remover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub body: Vec<Node>,
}

/// One statement-level node of the lowered tree.
///
/// Verbatim `text` fields are stored dedented to column zero; the
/// regenerator re-indents by nesting depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An import statement, kept verbatim.
    Import { text: String, span: Option<Span> },
    /// An assignment. `target` is the first name target; `value` is the
    /// textual form of the assigned expression.
    Assign {
        target: String,
        value: String,
        text: String,
        span: Option<Span>,
    },
    /// A function (or method) definition with a lowered body.
    FunctionDef {
        name: String,
        /// Positional parameter names only.
        params: Vec<String>,
        /// The `def name(...):` line(s), without the body.
        header: String,
        body: Vec<Node>,
        span: Option<Span>,
    },
    /// A class definition with a lowered body.
    ClassDef {
        name: String,
        /// The `class Name(...):` line, without the body.
        header: String,
        body: Vec<Node>,
        span: Option<Span>,
    },
    /// `if`/`match` statement, verbatim including its blocks.
    Conditional { text: String, span: Option<Span> },
    /// `for`/`while` statement, verbatim including its blocks.
    Loop { text: String, span: Option<Span> },
    /// A return statement. `value` is the textual form of the returned
    /// expression, absent for a bare `return`.
    Return {
        value: Option<String>,
        text: String,
        span: Option<Span>,
    },
    /// An expression statement whose value is a constant. Docstrings and
    /// generated summaries land here as triple-quoted strings.
    ConstantExpr { value: String, span: Option<Span> },
    /// A `#` comment retained as a first-class node.
    Comment { text: String, span: Option<Span> },
    /// Any other statement, kept verbatim.
    Other { text: String, span: Option<Span> },
}

impl Node {
    /// The span this node was parsed from, if any.
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::Import { span, .. }
            | Self::Assign { span, .. }
            | Self::FunctionDef { span, .. }
            | Self::ClassDef { span, .. }
            | Self::Conditional { span, .. }
            | Self::Loop { span, .. }
            | Self::Return { span, .. }
            | Self::ConstantExpr { span, .. }
            | Self::Comment { span, .. }
            | Self::Other { span, .. } => *span,
        }
    }

    /// Direct children, empty for leaf statements.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::FunctionDef { body, .. } | Self::ClassDef { body, .. } => body,
            _ => &[],
        }
    }

    /// Mutable access to the child body of a definition node.
    pub const fn body_mut(&mut self) -> Option<&mut Vec<Self>> {
        match self {
            Self::FunctionDef { body, .. } | Self::ClassDef { body, .. } => Some(body),
            _ => None,
        }
    }

    /// A synthesized triple-quoted string constant (docstring/summary).
    #[must_use]
    pub fn docstring(content: &str) -> Self {
        Self::ConstantExpr {
            value: format!("\"\"\"{content}\"\"\""),
            span: None,
        }
    }

    /// A synthesized `#` comment statement.
    #[must_use]
    pub fn comment(content: &str) -> Self {
        Self::Comment {
            text: format!("# {content}"),
            span: None,
        }
    }

    /// Stable kind name for logging and structural dumps.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Import { .. } => "Import",
            Self::Assign { .. } => "Assign",
            Self::FunctionDef { .. } => "FunctionDef",
            Self::ClassDef { .. } => "ClassDef",
            Self::Conditional { .. } => "Conditional",
            Self::Loop { .. } => "Loop",
            Self::Return { .. } => "Return",
            Self::ConstantExpr { .. } => "ConstantExpr",
            Self::Comment { .. } => "Comment",
            Self::Other { .. } => "Other",
        }
    }
}
