//! Error handling module for the spartie CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application, and maps each one to a
//! process exit code.

use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Exit code for a bad command line.
pub const EXIT_USAGE: u8 = 64;
/// Exit code for a source file that is not lexically well formed.
pub const EXIT_LEX: u8 = 65;
/// Exit code for a missing source file.
pub const EXIT_NOT_FOUND: u8 = 66;
/// Exit code for read, decode and write failures.
pub const EXIT_IO: u8 = 74;
/// Exit code for configuration failures.
pub const EXIT_CONFIG: u8 = 78;

/// Main error type for the spartie CLI application.
#[derive(Error, Debug)]
pub enum SpartieError {
    /// The command line could not be parsed, or help/version was requested.
    #[error("{0}")]
    Usage(#[from] clap::Error),

    /// The source file does not exist.
    #[error("File {} not found", .0.display())]
    FileNotFound(PathBuf),

    /// The source file exists but could not be read.
    #[error("Unable to read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The source file is not valid UTF-8.
    #[error("File {} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: FromUtf8Error,
    },

    /// The source file failed to scan. Carries the rendered diagnostic.
    #[error("{rendered}")]
    Lex {
        rendered: String,
        #[source]
        error: spartiec_lex::LexError,
    },

    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when writing output fails.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpartieError {
    /// Process exit code for this error.
    ///
    /// Help and version requests are "errors" to clap but exit successfully.
    pub fn exit_code(&self) -> u8 {
        match self {
            SpartieError::Usage(err) if !err.use_stderr() => 0,
            SpartieError::Usage(_) => EXIT_USAGE,
            SpartieError::FileNotFound(_) => EXIT_NOT_FOUND,
            SpartieError::Read { .. }
            | SpartieError::Decode { .. }
            | SpartieError::Json(_)
            | SpartieError::Io(_) => EXIT_IO,
            SpartieError::Lex { .. } => EXIT_LEX,
            SpartieError::Config(_) => EXIT_CONFIG,
        }
    }
}

/// Result type alias using SpartieError.
pub type Result<T> = std::result::Result<T, SpartieError>;
