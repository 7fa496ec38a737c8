//! Parser error types for gloss-parser.

/// Errors that can occur while reading, parsing, or extracting a file.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("syntax error in {path}: {message}")]
    SyntaxError { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
