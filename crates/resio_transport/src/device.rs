//! Process standard stream handlers.

use crate::error::{TransportError, TransportResult};
use crate::handler::{ByteSource, Direction, RawSink, SchemeHandler, WriteStream};
use crate::uri::{SCHEME_STDERR, SCHEME_STDIN, SCHEME_STDOUT};
use std::io::{self, Write};

/// Read-only handler for the process's standard input.
#[derive(Debug, Default)]
pub struct StdinDevice;

impl StdinDevice {
    /// Creates a stdin handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SchemeHandler for StdinDevice {
    fn name(&self) -> &str {
        SCHEME_STDIN
    }

    fn open_read(&self, _path: &str) -> TransportResult<ByteSource> {
        Ok(Box::new(io::stdin()))
    }

    fn open_write(&self, _path: &str, _append: bool) -> TransportResult<RawSink> {
        Err(TransportError::DirectionMismatch {
            scheme: SCHEME_STDIN.to_string(),
            direction: Direction::Write,
        })
    }
}

/// Write-only handler for the process's standard output.
///
/// Closing flushes but leaves the process stream open; repeated opens
/// across calls all write to the same destination. The stream terminates
/// at process exit.
#[derive(Debug, Default)]
pub struct StdoutDevice;

impl StdoutDevice {
    /// Creates a stdout handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SchemeHandler for StdoutDevice {
    fn name(&self) -> &str {
        SCHEME_STDOUT
    }

    fn open_read(&self, _path: &str) -> TransportResult<ByteSource> {
        Err(TransportError::DirectionMismatch {
            scheme: SCHEME_STDOUT.to_string(),
            direction: Direction::Read,
        })
    }

    fn open_write(&self, _path: &str, _append: bool) -> TransportResult<RawSink> {
        Ok(Box::new(StdoutSink(io::stdout())))
    }
}

/// Write-only handler for the process's standard error.
#[derive(Debug, Default)]
pub struct StderrDevice;

impl StderrDevice {
    /// Creates a stderr handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SchemeHandler for StderrDevice {
    fn name(&self) -> &str {
        SCHEME_STDERR
    }

    fn open_read(&self, _path: &str) -> TransportResult<ByteSource> {
        Err(TransportError::DirectionMismatch {
            scheme: SCHEME_STDERR.to_string(),
            direction: Direction::Read,
        })
    }

    fn open_write(&self, _path: &str, _append: bool) -> TransportResult<RawSink> {
        Ok(Box::new(StderrSink(io::stderr())))
    }
}

struct StdoutSink(io::Stdout);

impl Write for StdoutSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl WriteStream for StdoutSink {
    fn close(&mut self) -> TransportResult<()> {
        self.0.flush()?;
        Ok(())
    }
}

struct StderrSink(io::Stderr);

impl Write for StderrSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl WriteStream for StderrSink {
    fn close(&mut self) -> TransportResult<()> {
        self.0.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdin_rejects_write() {
        let result = StdinDevice::new().open_write("", false);
        assert!(matches!(
            result,
            Err(TransportError::DirectionMismatch {
                direction: Direction::Write,
                ..
            })
        ));
    }

    #[test]
    fn stdout_rejects_read() {
        let result = StdoutDevice::new().open_read("");
        assert!(matches!(
            result,
            Err(TransportError::DirectionMismatch {
                direction: Direction::Read,
                ..
            })
        ));
    }

    #[test]
    fn stderr_accepts_repeated_writes() {
        let handler = StderrDevice::new();
        for _ in 0..2 {
            let mut sink = handler.open_write("", false).unwrap();
            sink.write_all(b"").unwrap();
            sink.close().unwrap();
        }
    }
}
