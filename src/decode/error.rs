//! Decoder-specific error types.

/// Errors that can occur while selecting or driving decoder strategies.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// No strategy is registered under the given name
    #[error("Unknown decoder strategy: {0}")]
    UnknownStrategy(String),

    /// Code range is empty
    #[error("Invalid code range: {start}..={end}")]
    InvalidRange { start: i32, end: i32 },

    /// Code sample has no entries
    #[error("Code sample is empty")]
    EmptySample,
}
