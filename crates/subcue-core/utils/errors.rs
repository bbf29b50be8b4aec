//! Error types for subcue-core
//!
//! The interactive editing surfaces never raise errors at all: unknown ids,
//! empty texts, and malformed search patterns all degrade to defined no-op
//! behavior in the editor layer. `CoreError` only covers the export-adjacent
//! paths where bad data genuinely cannot be processed, such as timecode
//! strings that do not parse.

use thiserror::Error;

/// Main error type for subcue-core operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Timecode string does not match the `HH:MM:SS:FF` shape
    #[error("Invalid timecode: {value}")]
    InvalidTimecode { value: String },

    /// Timecode field holds a non-numeric component
    #[error("Invalid timecode component '{component}' in {value}")]
    InvalidTimecodeComponent { value: String, component: String },
}

impl CoreError {
    /// Create an invalid-timecode error for the given input string
    pub fn invalid_timecode(value: impl Into<String>) -> Self {
        Self::InvalidTimecode {
            value: value.into(),
        }
    }
}

/// Result type alias for core operations
pub type Result<T> = core::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_timecode_display() {
        let err = CoreError::invalid_timecode("99:99");
        assert_eq!(err.to_string(), "Invalid timecode: 99:99");
    }

    #[test]
    fn invalid_component_display() {
        let err = CoreError::InvalidTimecodeComponent {
            value: "00:xx:00:00".to_string(),
            component: "xx".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid timecode component 'xx' in 00:xx:00:00");
    }
}
