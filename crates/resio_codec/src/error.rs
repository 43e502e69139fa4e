//! Error types for codec operations.

use std::io;
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while wrapping or finishing a codec stream.
#[derive(Debug, Error)]
pub enum CodecError {
    /// No codec is registered under the requested name.
    #[error("algorithm {algorithm:?} is not known")]
    UnsupportedAlgorithm {
        /// The algorithm name that failed to resolve.
        algorithm: String,
    },

    /// The codec failed while framing or unframing data.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
