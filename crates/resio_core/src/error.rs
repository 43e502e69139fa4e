//! Error types for composed I/O operations.

use resio_codec::CodecError;
use resio_transport::TransportError;
use std::io;
use thiserror::Error;

/// Result type for composed I/O operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while composing or draining a stream.
///
/// Scheme resolution, direction, and open failures arrive through
/// [`CoreError::Transport`]; algorithm resolution failures through
/// [`CoreError::Codec`]. The remaining variants carry the URI of the
/// operation that failed mid-stream.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Scheme resolution or raw stream open/close failed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Algorithm resolution or codec framing failed.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// An I/O error occurred while reading a composed stream.
    #[error("error reading from {uri:?}: {source}")]
    Read {
        /// The URI being read.
        uri: String,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// An I/O error occurred while writing a composed stream.
    #[error("error writing to {uri:?}: {source}")]
    Write {
        /// The URI being written.
        uri: String,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// Flushing or closing a composed stream failed after the payload
    /// itself was accepted.
    #[error("error closing {uri:?}: {source}")]
    Close {
        /// The URI being closed.
        uri: String,
        /// The underlying I/O error.
        source: io::Error,
    },
}
