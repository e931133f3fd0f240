//! Global error handling for copyls
//!
//! Recoverable per-entry failures never show up here; they are surfaced as
//! [`crate::events::ScanEvent`] diagnostics and the traversal keeps going.
//! This type covers the failures that abort the whole operation.

use std::io;

use thiserror::Error;

use crate::clipboard::ClipboardError;

/// Global error type for copyls operations
#[derive(Error, Debug)]
pub enum CopyLsError {
    /// The root path is missing, not a directory, or cannot be listed
    #[error("Root path not found: {0}")]
    RootNotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Clipboard delivery errors
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for copyls operations
pub type Result<T> = std::result::Result<T, CopyLsError>;
