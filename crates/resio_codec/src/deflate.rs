//! DEFLATE-family codecs backed by flate2: `flate`, `gzip`, `zlib`.

use crate::codec::{Codec, EncodeStream};
use crate::error::CodecResult;
use crate::registry::{ALGORITHM_FLATE, ALGORITHM_GZIP, ALGORITHM_ZLIB};
use flate2::read::{DeflateDecoder, MultiGzDecoder, ZlibDecoder};
use flate2::write::{DeflateEncoder, GzEncoder, ZlibEncoder};
use flate2::Compression;
use resio_transport::{ByteSource, RawSink};
use std::io::{self, Write};

// flate2 levels run 0..=9; 0 would mean "store only", so non-positive
// requests select the library default instead.
fn compression(level: i32) -> Compression {
    if level <= 0 {
        Compression::default()
    } else {
        Compression::new(level.min(9) as u32)
    }
}

/// Raw DEFLATE streams without any container framing.
#[derive(Debug, Default)]
pub struct Flate;

impl Flate {
    /// Creates the raw DEFLATE codec.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Codec for Flate {
    fn name(&self) -> &str {
        ALGORITHM_FLATE
    }

    fn decoder(&self, source: ByteSource) -> CodecResult<ByteSource> {
        Ok(Box::new(DeflateDecoder::new(source)))
    }

    fn encoder(&self, sink: RawSink, level: i32) -> CodecResult<Box<dyn EncodeStream>> {
        Ok(Box::new(FlateStream {
            inner: DeflateEncoder::new(sink, compression(level)),
        }))
    }
}

/// Gzip streams.
///
/// The decoder accepts multi-member archives, matching the behavior of
/// concatenated `gzip` output.
#[derive(Debug, Default)]
pub struct Gzip;

impl Gzip {
    /// Creates the gzip codec.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Codec for Gzip {
    fn name(&self) -> &str {
        ALGORITHM_GZIP
    }

    fn decoder(&self, source: ByteSource) -> CodecResult<ByteSource> {
        Ok(Box::new(MultiGzDecoder::new(source)))
    }

    fn encoder(&self, sink: RawSink, level: i32) -> CodecResult<Box<dyn EncodeStream>> {
        Ok(Box::new(GzipStream {
            inner: GzEncoder::new(sink, compression(level)),
        }))
    }
}

/// Zlib streams.
#[derive(Debug, Default)]
pub struct Zlib;

impl Zlib {
    /// Creates the zlib codec.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Codec for Zlib {
    fn name(&self) -> &str {
        ALGORITHM_ZLIB
    }

    fn decoder(&self, source: ByteSource) -> CodecResult<ByteSource> {
        Ok(Box::new(ZlibDecoder::new(source)))
    }

    fn encoder(&self, sink: RawSink, level: i32) -> CodecResult<Box<dyn EncodeStream>> {
        Ok(Box::new(ZlibStream {
            inner: ZlibEncoder::new(sink, compression(level)),
        }))
    }
}

struct FlateStream {
    inner: DeflateEncoder<RawSink>,
}

impl Write for FlateStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl EncodeStream for FlateStream {
    fn finish(self: Box<Self>) -> CodecResult<RawSink> {
        Ok(self.inner.finish()?)
    }
}

struct GzipStream {
    inner: GzEncoder<RawSink>,
}

impl Write for GzipStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl EncodeStream for GzipStream {
    fn finish(self: Box<Self>) -> CodecResult<RawSink> {
        Ok(self.inner.finish()?)
    }
}

struct ZlibStream {
    inner: ZlibEncoder<RawSink>,
}

impl Write for ZlibStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl EncodeStream for ZlibStream {
    fn finish(self: Box<Self>) -> CodecResult<RawSink> {
        Ok(self.inner.finish()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::roundtrip;

    #[test]
    fn gzip_roundtrip() {
        let data = b"the same phrase repeated, the same phrase repeated";
        let (encoded, decoded) = roundtrip(&Gzip::new(), 0, data);
        assert_ne!(encoded, data.to_vec());
        assert_eq!(decoded, data);
    }

    #[test]
    fn gzip_decodes_multiple_members() {
        let first = roundtrip(&Gzip::new(), 0, b"first member").0;
        let second = roundtrip(&Gzip::new(), 0, b"second member").0;
        let mut concatenated = first;
        concatenated.extend_from_slice(&second);

        let mut decoder = Gzip::new()
            .decoder(Box::new(std::io::Cursor::new(concatenated)))
            .unwrap();
        let mut decoded = Vec::new();
        std::io::Read::read_to_end(&mut decoder, &mut decoded).unwrap();
        assert_eq!(decoded, b"first membersecond member");
    }

    #[test]
    fn zlib_roundtrip() {
        let data = vec![7u8; 1024];
        let (_, decoded) = roundtrip(&Zlib::new(), 0, &data);
        assert_eq!(decoded, data);
    }

    #[test]
    fn flate_roundtrip() {
        let data = b"raw deflate stream";
        let (_, decoded) = roundtrip(&Flate::new(), 0, data);
        assert_eq!(decoded, data);
    }

    #[test]
    fn levels_change_effort_not_content() {
        let data = vec![42u8; 4096];
        let fast = roundtrip(&Gzip::new(), 1, &data);
        let best = roundtrip(&Gzip::new(), 9, &data);
        assert_eq!(fast.1, data);
        assert_eq!(best.1, data);
    }

    #[test]
    fn oversized_level_clamps() {
        let (_, decoded) = roundtrip(&Gzip::new(), 99, b"clamped");
        assert_eq!(decoded, b"clamped");
    }
}
