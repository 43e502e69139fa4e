//! Error types for transport operations.

use crate::handler::Direction;
use std::io;
use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur while resolving a scheme or opening a raw stream.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The URI names a scheme with no registered handler.
    #[error("scheme {scheme:?} is not known")]
    UnsupportedScheme {
        /// The scheme token taken from the URI.
        scheme: String,
    },

    /// The scheme exists but does not support the requested direction.
    #[error("scheme {scheme:?} does not support {direction}")]
    DirectionMismatch {
        /// The scheme that was resolved.
        scheme: String,
        /// The direction that was requested.
        direction: Direction,
    },

    /// The underlying resource could not be opened.
    #[error("error opening {path:?}: {source}")]
    Open {
        /// The path portion of the URI.
        path: String,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// An HTTP request could not be issued or completed.
    #[error("error requesting {url:?}: {source}")]
    Http {
        /// The full request URL.
        url: String,
        /// The underlying client error.
        source: reqwest::Error,
    },

    /// An HTTP request completed with a non-success status.
    #[error("request to {url:?} returned status {status}")]
    HttpStatus {
        /// The full request URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// An I/O error occurred on an open stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
