//! The `"none"` identity codec.

use crate::codec::{Codec, EncodeStream};
use crate::error::CodecResult;
use crate::registry::ALGORITHM_NONE;
use resio_transport::{ByteSource, RawSink};
use std::io::{self, Write};

/// Byte-for-byte passthrough in both directions.
///
/// This is the baseline every other codec is round-trip-tested against.
#[derive(Debug, Default)]
pub struct Identity;

impl Identity {
    /// Creates the identity codec.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Codec for Identity {
    fn name(&self) -> &str {
        ALGORITHM_NONE
    }

    fn decoder(&self, source: ByteSource) -> CodecResult<ByteSource> {
        Ok(source)
    }

    fn encoder(&self, sink: RawSink, _level: i32) -> CodecResult<Box<dyn EncodeStream>> {
        Ok(Box::new(IdentityStream { sink }))
    }
}

struct IdentityStream {
    sink: RawSink,
}

impl Write for IdentityStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

impl EncodeStream for IdentityStream {
    fn finish(self: Box<Self>) -> CodecResult<RawSink> {
        Ok(self.sink)
    }
}
