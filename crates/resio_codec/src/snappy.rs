//! Snappy frame-format codec.

use crate::codec::{Codec, EncodeStream};
use crate::error::CodecResult;
use crate::registry::ALGORITHM_SNAPPY;
use resio_transport::{ByteSource, RawSink};
use snap::read::FrameDecoder;
use snap::write::FrameEncoder;
use std::io::{self, Write};

/// Snappy streams using the framing format.
///
/// Snappy has no compression levels; the level parameter is ignored.
#[derive(Debug, Default)]
pub struct Snappy;

impl Snappy {
    /// Creates the snappy codec.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Codec for Snappy {
    fn name(&self) -> &str {
        ALGORITHM_SNAPPY
    }

    fn decoder(&self, source: ByteSource) -> CodecResult<ByteSource> {
        Ok(Box::new(FrameDecoder::new(source)))
    }

    fn encoder(&self, sink: RawSink, _level: i32) -> CodecResult<Box<dyn EncodeStream>> {
        Ok(Box::new(SnappyStream {
            inner: FrameEncoder::new(sink),
        }))
    }
}

struct SnappyStream {
    inner: FrameEncoder<RawSink>,
}

impl Write for SnappyStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl EncodeStream for SnappyStream {
    fn finish(self: Box<Self>) -> CodecResult<RawSink> {
        let sink = self.inner.into_inner().map_err(|e| e.into_error())?;
        Ok(sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::roundtrip;

    #[test]
    fn snappy_roundtrip() {
        let data = b"snappy snappy snappy snappy";
        let (encoded, decoded) = roundtrip(&Snappy::new(), 0, data);
        assert_ne!(encoded, data.to_vec());
        assert_eq!(decoded, data);
    }

    #[test]
    fn snappy_ignores_level() {
        let data = b"level is a no-op here";
        let high = roundtrip(&Snappy::new(), 9, data);
        let default = roundtrip(&Snappy::new(), 0, data);
        assert_eq!(high.0, default.0);
        assert_eq!(high.1, data);
    }
}
