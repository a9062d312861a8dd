//! Layered error types
//!
//! Core configuration errors are wrapped; rendering failures get their own
//! type because a batch records them per job instead of aborting.

use std::path::PathBuf;

use scriptline_core::{ConfigError, CoreError};
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core configuration error
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Invalid engine configuration
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// Thread pool could not be created
    #[error("failed to create thread pool: {0}")]
    ThreadPool(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Encoding error (UTF-8, etc.)
    #[error("encoding error: {0}")]
    EncodingError(String),
}

/// Failure of a single render job
#[derive(Error, Debug)]
pub enum RenderError {
    /// The renderer program could not be started
    #[error("failed to run {}: {source}", .program.display())]
    Spawn {
        /// Program that failed to start
        program: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The renderer exited unsuccessfully
    #[error("renderer exited with {}: {stderr}", describe_status(.status))]
    Failed {
        /// Exit code, if any
        status: Option<i32>,
        /// Captured standard error
        stderr: String,
    },

    /// The renderer reported success but produced no image
    #[error("renderer produced no image at {}", .0.display())]
    MissingOutput(PathBuf),

    /// Ground-truth file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        /// The file that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        EngineError::Core(CoreError::Config(err))
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for EngineError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        EngineError::EncodingError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
