//! # gloss-core
//!
//! Shared data model for the gloss pipeline.
//!
//! - [`Node`] / [`Module`]: a closed, mutable typed tree lowered from the
//!   concrete Python parse. The annotation engine mutates it in place;
//!   the regenerator turns it back into source text.
//! - [`Span`]: the original source-line range a node was parsed from,
//!   plus span resolution for nodes that carry no line metadata.
//! - [`DeclarationDoc`]: the serializable description of a file's
//!   imports, module variables, functions, and classes.
//! - [`dump_module`]: the structural (non-source) dump used by the
//!   comment stripper output and the summary prompt.

mod decl;
mod dump;
mod node;
mod span;

pub use decl::{ClassDecl, DeclarationDoc, FunctionDecl};
pub use dump::{dump_module, dump_node};
pub use node::{Module, Node};
pub use span::{resolve_span, Span};
