//! Scheme handler trait and stream vocabulary.

use crate::error::TransportResult;
use std::fmt;
use std::io::{Read, Write};

/// A raw byte source opened by a scheme handler.
///
/// Dropping the source releases the underlying resource.
pub type ByteSource = Box<dyn Read + Send>;

/// A raw byte sink opened by a scheme handler.
pub type RawSink = Box<dyn WriteStream>;

/// The direction of an open request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Opening for reading.
    Read,
    /// Opening for writing.
    Write,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Read => f.write_str("reading"),
            Direction::Write => f.write_str("writing"),
        }
    }
}

/// A writable raw stream with an explicit close.
///
/// `close` flushes buffered data and releases the destination. For
/// process streams (stdout, stderr) the destination cannot be closed;
/// `close` flushes and the stream terminates at process exit.
pub trait WriteStream: Write + Send {
    /// Flushes buffered data and releases the destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush or release fails. The error must be
    /// surfaced even when every prior write succeeded.
    fn close(&mut self) -> TransportResult<()>;
}

/// A transport for one URI scheme.
///
/// Handlers are registered once at initialization and shared by all
/// calls, so they must be `Send + Sync` and must not carry per-call
/// state. Streams returned from `open_read`/`open_write` are exclusively
/// owned by the caller.
///
/// # Invariants
///
/// - A handler that does not support a direction fails with
///   [`TransportError::DirectionMismatch`], never silently degrades
/// - `open_read` yields the resource bytes until end-of-stream
/// - `open_write` with `append` must preserve existing content
///
/// [`TransportError::DirectionMismatch`]: crate::TransportError::DirectionMismatch
pub trait SchemeHandler: Send + Sync {
    /// Returns the scheme name this handler is registered under.
    fn name(&self) -> &str;

    /// Opens the resource at `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the scheme is write-only or the resource
    /// cannot be opened.
    fn open_read(&self, path: &str) -> TransportResult<ByteSource>;

    /// Opens the resource at `path` for writing.
    ///
    /// When `append` is set, existing content is preserved and new bytes
    /// land at the end. Otherwise the destination is truncated.
    ///
    /// # Errors
    ///
    /// Returns an error if the scheme is read-only or the resource
    /// cannot be opened.
    fn open_write(&self, path: &str, append: bool) -> TransportResult<RawSink>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_display() {
        assert_eq!(Direction::Read.to_string(), "reading");
        assert_eq!(Direction::Write.to_string(), "writing");
    }
}
