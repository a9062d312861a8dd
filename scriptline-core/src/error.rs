//! Core error types
//!
//! Normalization and chunking never fail; only configuration does.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors, all fatal and raised before any text is processed
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Chunk length bounds are unusable
    #[error("invalid length bounds: min_len ({min_len}) must be smaller than max_len ({max_len}) and max_len must be positive")]
    InvalidBounds {
        /// Requested minimum chunk length
        min_len: usize,
        /// Requested maximum chunk length
        max_len: usize,
    },

    /// Script profile failed validation
    #[error("invalid script profile: {0}")]
    InvalidProfile(String),

    /// Script profile is not valid TOML or does not match the schema
    #[error("failed to parse script profile: {0}")]
    Parse(#[from] toml::de::Error),

    /// No embedded profile with this code
    #[error("unknown script code: {code}")]
    UnknownScript {
        /// The requested script code
        code: String,
    },

    /// A rewrite rule could not be compiled
    #[error("invalid rewrite rule: {0}")]
    Rule(#[from] regex::Error),

    /// File could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bounds_display() {
        let err = ConfigError::InvalidBounds {
            min_len: 50,
            max_len: 20,
        };
        let msg = err.to_string();
        assert!(msg.contains("min_len (50)"));
        assert!(msg.contains("max_len (20)"));
    }

    #[test]
    fn test_unknown_script_display() {
        let err = ConfigError::UnknownScript {
            code: "xx".to_string(),
        };
        assert_eq!(err.to_string(), "unknown script code: xx");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: CoreError = ConfigError::InvalidProfile("no letters".to_string()).into();
        assert_eq!(err.to_string(), "invalid script profile: no letters");
    }
}
