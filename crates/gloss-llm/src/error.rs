//! Generation-client error types.

/// Errors internal to one generation request. Callers of
/// [`crate::TextGenerator::generate`] never see these; the client logs
/// and substitutes empty text.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed response: missing choices[0].message.content")]
    MalformedResponse,
}
