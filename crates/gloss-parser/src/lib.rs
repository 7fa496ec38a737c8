//! # gloss-parser
//!
//! Python parsing and structural extraction for gloss.
//!
//! Parses source with ast-grep (`SupportLang::Python`), lowers the
//! concrete tree into the `gloss-core` typed tree (tree-sitter keeps
//! `#` comments as first-class nodes, so the comment-retaining parse
//! comes for free), and provides:
//!
//! - [`strip_comments`]: comment-free structural dump of a file's
//!   top-level statements
//! - [`extract_declarations`]: the Declaration Document for a file

mod error;
mod extract;
mod lower;
mod parser;
mod strip;

pub use error::ParserError;
pub use extract::{extract_declarations, extract_from_source};
pub use lower::lower;
pub use parser::{parse_module, parse_source, PyTree};
pub use strip::{dump_top_level, strip_comments};
