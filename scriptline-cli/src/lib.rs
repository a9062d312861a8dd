//! Scriptline CLI library
//!
//! This library provides the command-line interface for turning scraped
//! text into OCR ground-truth lines and rendering them with Tesseract.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod script_source;

pub use error::{CliError, CliResult};
