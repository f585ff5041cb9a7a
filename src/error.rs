//! Codec Error Types
//!
//! Core error types for the binary codec operations.

use thiserror::Error;

/// Result type for bytewire operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Binary codec errors
///
/// Every condition is local and synchronous: a failing call has either written
/// nothing (capacity is checked before the first byte goes out) or read nothing
/// the caller can observe.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Destination or source buffer cannot hold the requested value
    #[error("Buffer too small: need {needed} bytes, {available} available")]
    BufferTooSmall { needed: usize, available: usize },

    /// Input ended while the continuation bit was still set
    #[error("Truncated variable-length integer: continuation bit still set after {consumed} bytes")]
    TruncatedVarInt { consumed: usize },

    /// No terminating byte within the maximum encoded length for the target type
    #[error("Malformed variable-length integer: no terminator within {max_len} bytes")]
    MalformedVarInt { max_len: usize },

    /// Decoded value does not fit in the target type
    #[error("Variable-length integer out of range for {bits}-bit value")]
    VarIntRange { bits: u32 },
}

impl CodecError {
    /// Check if retrying with a larger destination buffer can succeed
    pub fn needs_larger_buffer(&self) -> bool {
        matches!(self, CodecError::BufferTooSmall { .. })
    }
}
