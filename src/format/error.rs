//! Formatter-specific error types.

/// Errors that can occur while formatting into bounded buffers.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Output would not fit in the target buffer
    #[error("Buffer capacity exceeded: {required} bytes required, capacity is {capacity}")]
    CapacityExceeded { capacity: usize, required: usize },

    /// Record name is longer than the fixed name capacity
    #[error("Name is {len} bytes long, at most {max} allowed")]
    NameTooLong { len: usize, max: usize },

    /// No formatter is registered under the given name
    #[error("Unknown formatter variant: {0}")]
    UnknownVariant(String),

    /// A formatting trait implementation reported an error
    #[error("Formatting failed: {0}")]
    Write(#[from] std::fmt::Error),
}
