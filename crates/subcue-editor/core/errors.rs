//! Error types for the subcue-editor crate
//!
//! Wraps `CoreError` from subcue-core and adds editor-specific cases.
//! The interactive surfaces deliberately never produce these: an unknown
//! cue id is a no-op, an invalid search pattern compiles to no matcher,
//! and degenerate text diffs cleanly. Errors appear only on the export
//! path, where IO and malformed timecodes are real failure modes.

use subcue_core::CoreError;
use thiserror::Error;

/// Main error type for subcue-editor operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// Errors from subcue-core
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Command execution failed
    #[error("Command execution failed: {message}")]
    CommandFailed { message: String },

    /// Import/export IO error
    #[error("IO error: {0}")]
    IoError(String),

    /// Data did not match an expected format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

impl EditorError {
    /// Create a new command failed error
    pub fn command_failed<T: core::fmt::Display>(message: T) -> Self {
        Self::CommandFailed {
            message: message.to_string(),
        }
    }

    /// Create a new IO error
    pub fn io<T: core::fmt::Display>(message: T) -> Self {
        Self::IoError(message.to_string())
    }
}

/// Result type alias for editor operations
pub type Result<T> = core::result::Result<T, EditorError>;
