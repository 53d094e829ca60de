use crate::format::FormatError;
use std::io;
use std::path::PathBuf;

/// Reasons a benchmark configuration cannot be read, used or written.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `save` on a configuration that was never loaded from disk
    #[error("Configuration has no file to save to")]
    FilePathNotSet,

    #[error("Cannot locate the home directory for {}", super::DEFAULT_DIRECTORY_PATH)]
    HomeDirectoryNotFound,

    #[error("Cannot read {path}: {source}")]
    LoadFailed { path: PathBuf, source: io::Error },

    #[error("Cannot parse {path}: {source}")]
    DeserializationFailed {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Cannot serialize configuration: {0}")]
    SerializationFailed(#[source] serde_yaml::Error),

    #[error("Cannot create {path}: {source}")]
    CreateDirectoryFailed { path: PathBuf, source: io::Error },

    #[error("Cannot write {path}: {source}")]
    SaveFailed { path: PathBuf, source: io::Error },

    /// A benchmark parameter is out of bounds
    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    /// The configured record cannot be formatted
    #[error("Invalid record: {0}")]
    Record(#[from] FormatError),
}
