//! Codec trait definition.

use crate::error::CodecResult;
use resio_transport::{ByteSource, RawSink};
use std::io::Write;

/// An encoding stream produced by a codec's write side.
///
/// Writing pushes bytes through the codec into the raw sink beneath it.
/// `finish` writes any trailing framing and hands the raw sink back, so
/// the caller decides whether the destination is closed or kept open.
pub trait EncodeStream: Write + Send {
    /// Writes trailing codec framing and returns the underlying sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the trailing framing cannot be written.
    fn finish(self: Box<Self>) -> CodecResult<RawSink>;
}

/// A named compression algorithm.
///
/// Codecs are registered once at initialization and shared by all
/// calls, so they must be `Send + Sync` and stateless across calls.
///
/// # Invariants
///
/// - `decoder(encoder(bytes))` is the identity for every byte sequence
/// - The `"none"` codec passes bytes through unchanged in both
///   directions
/// - `level <= 0` selects the codec's default level; values beyond the
///   codec's range clamp to the nearest valid level
pub trait Codec: Send + Sync {
    /// Returns the algorithm name this codec is registered under.
    fn name(&self) -> &str;

    /// Wraps a raw source with decompression framing.
    ///
    /// # Errors
    ///
    /// Returns an error if the decoder cannot be constructed.
    fn decoder(&self, source: ByteSource) -> CodecResult<ByteSource>;

    /// Wraps a raw sink with compression framing.
    ///
    /// `level` tunes the compression effort on codecs that support it;
    /// codecs without levels ignore it.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder cannot be constructed.
    fn encoder(&self, sink: RawSink, level: i32) -> CodecResult<Box<dyn EncodeStream>>;
}
