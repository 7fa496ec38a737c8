//! # gloss-llm
//!
//! The external text-generation collaborator, behind the
//! [`TextGenerator`] seam so the annotation engine can be driven by a
//! stub in tests.
//!
//! [`GenerationClient`] speaks the OpenAI-compatible chat-completions
//! protocol. Service failures are recovered locally: logged, then
//! substituted with an empty string; they never propagate to the
//! pipeline.

mod client;
mod error;

pub use client::GenerationClient;
pub use error::LlmError;

/// One blocking request-response exchange with the generation service.
///
/// Implementations must return an empty string (after logging) on any
/// failure rather than surface an error.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> impl Future<Output = String>;
}
