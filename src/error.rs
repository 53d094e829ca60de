//! Application-wide error types.
//!
//! This module defines the main error type hierarchy for the crate, allowing
//! for type-safe error handling throughout the codebase.

pub use crate::config::ConfigError;
pub use crate::decode::DecodeError;
pub use crate::format::FormatError;

/// Main application error type.
///
/// This is the top-level error type that encompasses all error types
/// in the crate. It uses `thiserror` for automatic error derivation
/// and conversion.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Decoder-related errors
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Formatter-related errors
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Decoder strategies returned different labels for some codes
    #[error("Decoder strategies disagree on {0} code(s)")]
    Mismatch(usize),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),

    /// Command line usage errors
    #[error("{0}")]
    Usage(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
