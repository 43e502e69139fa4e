//! bzip2 codec.

use crate::codec::{Codec, EncodeStream};
use crate::error::CodecResult;
use crate::registry::ALGORITHM_BZIP2;
use ::bzip2::read::BzDecoder;
use ::bzip2::write::BzEncoder;
use ::bzip2::Compression;
use resio_transport::{ByteSource, RawSink};
use std::io::{self, Write};

// bzip2 block sizes run 1..=9.
fn compression(level: i32) -> Compression {
    if level <= 0 {
        Compression::default()
    } else {
        Compression::new(level.min(9) as u32)
    }
}

/// bzip2 streams, both directions.
#[derive(Debug, Default)]
pub struct Bzip2;

impl Bzip2 {
    /// Creates the bzip2 codec.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Codec for Bzip2 {
    fn name(&self) -> &str {
        ALGORITHM_BZIP2
    }

    fn decoder(&self, source: ByteSource) -> CodecResult<ByteSource> {
        Ok(Box::new(BzDecoder::new(source)))
    }

    fn encoder(&self, sink: RawSink, level: i32) -> CodecResult<Box<dyn EncodeStream>> {
        Ok(Box::new(Bzip2Stream {
            inner: BzEncoder::new(sink, compression(level)),
        }))
    }
}

struct Bzip2Stream {
    inner: BzEncoder<RawSink>,
}

impl Write for Bzip2Stream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl EncodeStream for Bzip2Stream {
    fn finish(self: Box<Self>) -> CodecResult<RawSink> {
        Ok(self.inner.finish()?)
    }
}
