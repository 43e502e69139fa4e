//! Stream composition: URI resolution and codec wrapping.

use crate::config::{Config, WriteOptions};
use crate::error::{CoreError, CoreResult};
use resio_codec::{AlgorithmRegistry, CodecError, EncodeStream};
use resio_transport::{
    uri, ByteSource, Direction, SchemeHandler, SchemeRegistry, TransportError,
};
use std::io::{self, BufReader, Write};

/// Resolves a URI to its scheme handler and path remainder.
///
/// Reserved device literals are checked first, then the scheme token
/// before `"://"`. A URI with no scheme is a local file path.
pub(crate) fn resolve<'a>(
    schemes: &'a SchemeRegistry,
    target: &'a str,
    direction: Direction,
) -> CoreResult<(&'a dyn SchemeHandler, &'a str)> {
    if let Some(scheme) = uri::device(target, direction) {
        return Ok((schemes.resolve(scheme)?, ""));
    }
    match uri::split(target) {
        (Some(scheme), path) => Ok((schemes.resolve(scheme)?, path)),
        (None, path) => Ok((schemes.resolve(uri::SCHEME_FILE)?, path)),
    }
}

/// Opens a composed read stream: raw source, buffered, then decoded.
pub(crate) fn open_read(
    schemes: &SchemeRegistry,
    algorithms: &AlgorithmRegistry,
    config: &Config,
    target: &str,
    algorithm: &str,
) -> CoreResult<ByteSource> {
    let (handler, path) = resolve(schemes, target, Direction::Read)?;
    let raw = handler.open_read(path)?;
    let buffered: ByteSource = Box::new(BufReader::with_capacity(config.read_buffer_size, raw));
    let codec = algorithms.resolve(algorithm)?;
    Ok(codec.decoder(buffered)?)
}

/// Opens a composed write stream: raw sink wrapped with codec framing.
pub(crate) fn open_write(
    schemes: &SchemeRegistry,
    algorithms: &AlgorithmRegistry,
    target: &str,
    algorithm: &str,
    options: &WriteOptions,
) -> CoreResult<ComposedWriter> {
    let (handler, path) = resolve(schemes, target, Direction::Write)?;
    let raw = handler.open_write(path, options.append)?;
    let codec = algorithms.resolve(algorithm)?;
    let encoder = codec.encoder(raw, options.level)?;
    Ok(ComposedWriter {
        uri: target.to_string(),
        encoder: Some(encoder),
        keep_open: options.keep_open,
    })
}

/// A raw sink wrapped with codec framing, presented as one writer.
///
/// [`close`](ComposedWriter::close) finishes the codec framing, flushes
/// the raw sink, and releases it - unless the writer was opened with
/// `keep_open`, in which case the underlying destination stays usable
/// for subsequent calls. Dropping an unclosed writer performs the same
/// sequence best-effort, so the raw stream is released on every exit
/// path; only an explicit `close` reports errors.
pub struct ComposedWriter {
    uri: String,
    encoder: Option<Box<dyn EncodeStream>>,
    keep_open: bool,
}

impl ComposedWriter {
    /// Returns the URI this writer targets.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Finishes codec framing, flushes, and releases the destination.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Close`] if trailing framing, the flush, or
    /// the release fails. The error is surfaced even when every write
    /// succeeded.
    pub fn close(mut self) -> CoreResult<()> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> CoreResult<()> {
        let Some(encoder) = self.encoder.take() else {
            return Ok(());
        };
        let mut sink = encoder.finish().map_err(|e| CoreError::Close {
            uri: self.uri.clone(),
            source: codec_io(e),
        })?;
        sink.flush().map_err(|source| CoreError::Close {
            uri: self.uri.clone(),
            source,
        })?;
        if !self.keep_open {
            sink.close().map_err(|e| CoreError::Close {
                uri: self.uri.clone(),
                source: transport_io(e),
            })?;
        }
        Ok(())
    }
}

impl Write for ComposedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.encoder.as_mut() {
            Some(encoder) => encoder.write(buf),
            None => Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "composed writer is closed",
            )),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.encoder.as_mut() {
            Some(encoder) => encoder.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for ComposedWriter {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

fn codec_io(error: CodecError) -> io::Error {
    match error {
        CodecError::Io(e) => e,
        other => io::Error::new(io::ErrorKind::Other, other.to_string()),
    }
}

fn transport_io(error: TransportError) -> io::Error {
    match error {
        TransportError::Io(e) => e,
        other => io::Error::new(io::ErrorKind::Other, other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_bare_path_is_file() {
        let schemes = SchemeRegistry::builtin();
        let (handler, path) = resolve(&schemes, "/tmp/data.bin", Direction::Read).unwrap();
        assert_eq!(handler.name(), "file");
        assert_eq!(path, "/tmp/data.bin");
    }

    #[test]
    fn resolve_file_uri_strips_scheme() {
        let schemes = SchemeRegistry::builtin();
        let (handler, path) = resolve(&schemes, "file:///tmp/data.bin", Direction::Read).unwrap();
        assert_eq!(handler.name(), "file");
        assert_eq!(path, "/tmp/data.bin");
    }

    #[test]
    fn resolve_device_literal() {
        let schemes = SchemeRegistry::builtin();
        let (handler, path) = resolve(&schemes, "stdout", Direction::Write).unwrap();
        assert_eq!(handler.name(), "stdout");
        assert_eq!(path, "");
    }

    #[test]
    fn resolve_dash_by_direction() {
        let schemes = SchemeRegistry::builtin();
        let (read, _) = resolve(&schemes, "-", Direction::Read).unwrap();
        let (write, _) = resolve(&schemes, "-", Direction::Write).unwrap();
        assert_eq!(read.name(), "stdin");
        assert_eq!(write.name(), "stdout");
    }

    #[test]
    fn resolve_unknown_scheme() {
        let schemes = SchemeRegistry::builtin();
        let result = resolve(&schemes, "ftp://host/file", Direction::Read);
        assert!(matches!(
            result,
            Err(CoreError::Transport(TransportError::UnsupportedScheme { scheme })) if scheme == "ftp"
        ));
    }
}
