//! Local filesystem scheme handler.

use crate::error::{TransportError, TransportResult};
use crate::handler::{ByteSource, RawSink, SchemeHandler, WriteStream};
use crate::uri::SCHEME_FILE;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};

/// Scheme handler for local file paths.
///
/// Handles `file://` URIs as well as bare relative and absolute paths.
/// Writes truncate the destination unless `append` is requested, so an
/// overwrite with shorter content never leaves a stale tail.
#[derive(Debug, Default)]
pub struct FileScheme;

impl FileScheme {
    /// Creates a file scheme handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SchemeHandler for FileScheme {
    fn name(&self) -> &str {
        SCHEME_FILE
    }

    fn open_read(&self, path: &str) -> TransportResult<ByteSource> {
        let file = File::open(path).map_err(|source| TransportError::Open {
            path: path.to_string(),
            source,
        })?;
        Ok(Box::new(file))
    }

    fn open_write(&self, path: &str, append: bool) -> TransportResult<RawSink> {
        let mut options = OpenOptions::new();
        options.write(true).create(true);
        if append {
            options.append(true);
        } else {
            options.truncate(true);
        }
        let file = options.open(path).map_err(|source| TransportError::Open {
            path: path.to_string(),
            source,
        })?;
        Ok(Box::new(FileSink { file }))
    }
}

struct FileSink {
    file: File,
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl WriteStream for FileSink {
    fn close(&mut self) -> TransportResult<()> {
        self.file.flush()?;
        self.file.sync_all()?;
        Ok(())
    }
}
