//! Error types for the Xtrange core library.
//!
//! The resolvers themselves never fail. Errors only come from the
//! surfaces that read caller-supplied data: configuration, character
//! tables and tool names arriving from a UI.

use thiserror::Error;

/// Top-level error type for all Xtrange operations.
#[derive(Error, Debug)]
pub enum XtrangeError {
    /// Configuration could not be parsed or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization or deserialization failure (character tables).
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An inspection tool name that is not `eyes`, `teeth` or `pockets`.
    #[error("Unknown inspection tool: {0:?}")]
    UnknownTool(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, XtrangeError>;
