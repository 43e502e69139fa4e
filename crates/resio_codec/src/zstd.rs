//! Zstandard codec.

use crate::codec::{Codec, EncodeStream};
use crate::error::CodecResult;
use crate::registry::ALGORITHM_ZSTD;
use ::zstd::stream::read::Decoder;
use ::zstd::stream::write::Encoder;
use resio_transport::{ByteSource, RawSink};
use std::io::{self, Write};

// zstd accepts 1..=22 and treats 0 as its own default.
fn clamp_level(level: i32) -> i32 {
    level.clamp(0, 22)
}

/// Zstandard streams, both directions.
#[derive(Debug, Default)]
pub struct Zstd;

impl Zstd {
    /// Creates the zstd codec.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Codec for Zstd {
    fn name(&self) -> &str {
        ALGORITHM_ZSTD
    }

    fn decoder(&self, source: ByteSource) -> CodecResult<ByteSource> {
        let decoder = Decoder::new(source)?;
        Ok(Box::new(decoder))
    }

    fn encoder(&self, sink: RawSink, level: i32) -> CodecResult<Box<dyn EncodeStream>> {
        let encoder = Encoder::new(sink, clamp_level(level))?;
        Ok(Box::new(ZstdStream { inner: encoder }))
    }
}

struct ZstdStream {
    inner: Encoder<'static, RawSink>,
}

impl Write for ZstdStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl EncodeStream for ZstdStream {
    fn finish(self: Box<Self>) -> CodecResult<RawSink> {
        Ok(self.inner.finish()?)
    }
}
