//! Error types for linekv
//!
//! Provides a unified error type for all operations. Each layer returns these
//! kinds unchanged so callers can match on them directly.

use thiserror::Error;

/// Result type alias using KvError
pub type Result<T> = std::result::Result<T, KvError>;

/// Unified error type for linekv operations
#[derive(Debug, Error)]
pub enum KvError {
    // -------------------------------------------------------------------------
    // Parse Errors
    // -------------------------------------------------------------------------
    /// Empty input or an unrecognised command name
    #[error("invalid command")]
    InvalidCommand,

    /// Wrong argument count or a disallowed character in an argument
    #[error("invalid syntax")]
    InvalidSyntax,

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("key cannot be empty")]
    EmptyKey,

    #[error("key not found")]
    KeyNotFound,

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
