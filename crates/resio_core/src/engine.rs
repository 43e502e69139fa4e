//! The engine facade: registries plus buffered operations.

use crate::config::{Config, WriteOptions};
use crate::error::{CoreError, CoreResult};
use crate::pipeline::{self, ComposedWriter};
use resio_codec::AlgorithmRegistry;
use resio_transport::{ByteSource, SchemeRegistry};
use std::io::{Read, Write};

/// The primary entry point for composed I/O.
///
/// An engine owns the scheme and algorithm registries, built once at
/// construction and immutable afterward. Every operation resolves the
/// URI and algorithm against those registries, opens a per-call stream,
/// and releases it before returning.
///
/// # Reading and writing
///
/// ```no_run
/// use resio_core::{Engine, WriteOptions};
///
/// let engine = Engine::new();
/// engine
///     .write_all("data.txt.gz", "gzip", b"payload", &WriteOptions::new())
///     .unwrap();
/// let bytes = engine.read_all("data.txt.gz", "gzip").unwrap();
/// ```
///
/// # Custom registries
///
/// Additional schemes (object storage, test doubles) and codecs are
/// local registrations, not changes to call sites:
///
/// ```
/// use resio_core::{AlgorithmRegistry, Config, Engine, SchemeRegistry};
///
/// let schemes = SchemeRegistry::builtin();
/// // a custom handler would be one more schemes.register(...) call here
/// let engine = Engine::with_registries(Config::new(), schemes, AlgorithmRegistry::builtin());
/// assert!(engine.scheme_names().contains(&"file"));
/// ```
pub struct Engine {
    config: Config,
    schemes: SchemeRegistry,
    algorithms: AlgorithmRegistry,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine with the built-in registries.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an engine with the built-in registries and a custom
    /// configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self::with_registries(config, SchemeRegistry::builtin(), AlgorithmRegistry::builtin())
    }

    /// Creates an engine from explicit registries.
    #[must_use]
    pub fn with_registries(
        config: Config,
        schemes: SchemeRegistry,
        algorithms: AlgorithmRegistry,
    ) -> Self {
        Self {
            config,
            schemes,
            algorithms,
        }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the scheme registry.
    #[must_use]
    pub fn schemes(&self) -> &SchemeRegistry {
        &self.schemes
    }

    /// Returns the algorithm registry.
    #[must_use]
    pub fn algorithms(&self) -> &AlgorithmRegistry {
        &self.algorithms
    }

    /// Returns the registered scheme names, in registration order.
    #[must_use]
    pub fn scheme_names(&self) -> Vec<&str> {
        self.schemes.names()
    }

    /// Returns the registered algorithm names, in registration order.
    #[must_use]
    pub fn algorithm_names(&self) -> Vec<&str> {
        self.algorithms.names()
    }

    /// Returns the library version.
    #[must_use]
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Opens a composed read stream for `uri`.
    ///
    /// # Errors
    ///
    /// Fails if the scheme or algorithm is unknown, the scheme is
    /// write-only, or the underlying resource cannot be opened.
    pub fn open_read(&self, uri: &str, algorithm: &str) -> CoreResult<ByteSource> {
        tracing::debug!(uri, algorithm, "opening composed read stream");
        pipeline::open_read(&self.schemes, &self.algorithms, &self.config, uri, algorithm)
    }

    /// Opens a composed write stream for `uri`.
    ///
    /// # Errors
    ///
    /// Fails if the scheme or algorithm is unknown, the scheme is
    /// read-only, or the underlying resource cannot be opened.
    pub fn open_write(
        &self,
        uri: &str,
        algorithm: &str,
        options: &WriteOptions,
    ) -> CoreResult<ComposedWriter> {
        tracing::debug!(uri, algorithm, "opening composed write stream");
        pipeline::open_write(&self.schemes, &self.algorithms, uri, algorithm, options)
    }

    /// Reads the resource at `uri` to completion.
    ///
    /// Drains the composed stream until a definitive end-of-stream
    /// signal, so sources of unknown length (network bodies, pipes) are
    /// never truncated. A zero-length source yields an empty buffer.
    ///
    /// # Errors
    ///
    /// Fails with the open error, or [`CoreError::Read`] on an I/O
    /// error mid-stream. The raw stream is released either way.
    pub fn read_all(&self, uri: &str, algorithm: &str) -> CoreResult<Vec<u8>> {
        let mut source = self.open_read(uri, algorithm)?;
        let mut data = Vec::new();
        source
            .read_to_end(&mut data)
            .map_err(|e| CoreError::Read {
                uri: uri.to_string(),
                source: e,
            })?;
        Ok(data)
    }

    /// Writes `data` in full to the resource at `uri`, then flushes.
    ///
    /// A partial write is surfaced as [`CoreError::Write`], never
    /// treated as success. With `keep_open` set, codec framing is
    /// finished but the underlying destination stays usable for a
    /// subsequent call.
    ///
    /// # Errors
    ///
    /// Fails with the open error, [`CoreError::Write`] mid-stream, or
    /// [`CoreError::Close`] if the final flush/close fails.
    pub fn write_all(
        &self,
        uri: &str,
        algorithm: &str,
        data: &[u8],
        options: &WriteOptions,
    ) -> CoreResult<()> {
        let mut writer = self.open_write(uri, algorithm, options)?;
        writer.write_all(data).map_err(|e| CoreError::Write {
            uri: uri.to_string(),
            source: e,
        })?;
        writer.close()
    }
}
