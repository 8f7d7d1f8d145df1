//! Error types for loom_core

use thiserror::Error;

/// Errors raised while reading or validating a page document
#[derive(Error, Debug)]
pub enum ModelError {
    /// The document is not valid JSON or does not match the page shape
    #[error("Invalid page document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Breakpoint name not one of desktop/tablet/mobile
    #[error("Unknown breakpoint '{0}' (expected desktop, tablet or mobile)")]
    UnknownBreakpoint(String),

    /// Two siblings share a key
    #[error("Duplicate {kind} key '{key}' in {parent}")]
    DuplicateKey {
        kind: &'static str,
        key: String,
        parent: String,
    },

    /// Block with an empty `_type`
    #[error("Block '{key}' has an empty type")]
    EmptyBlockType { key: String },
}

/// Result type for loom_core operations
pub type Result<T> = std::result::Result<T, ModelError>;
