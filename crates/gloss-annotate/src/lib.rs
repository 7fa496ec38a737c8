//! # gloss-annotate
//!
//! In-place annotation of the typed tree and regeneration to source.
//!
//! - [`remove_existing_annotations`]: best-effort cleanup of previously
//!   inserted docstrings/comments before a re-run
//! - [`annotate`]: docstring, comment, and summary passes driving a
//!   [`gloss_llm::TextGenerator`]
//! - [`regenerate`]: the tree back to syntactically valid source text

mod engine;
mod regen;
mod remover;

pub use engine::annotate;
pub use regen::regenerate;
pub use remover::remove_existing_annotations;
