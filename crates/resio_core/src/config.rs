//! Engine and per-write configuration.

/// Configuration for an [`Engine`](crate::Engine).
#[derive(Debug, Clone)]
pub struct Config {
    /// Capacity of the read-side buffer wrapped around raw sources.
    pub read_buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            read_buffer_size: 4096,
        }
    }
}

impl Config {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the read buffer capacity in bytes.
    #[must_use]
    pub const fn read_buffer_size(mut self, value: usize) -> Self {
        self.read_buffer_size = value;
        self
    }
}

/// Options for a composed write.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Compression level. `0` selects the codec's default level;
    /// compression on/off is chosen by algorithm name, not level.
    pub level: i32,
    /// Append to the destination instead of truncating it.
    pub append: bool,
    /// Flush codec framing on close but leave the underlying stream
    /// open, so a later call can keep writing to the same destination.
    pub keep_open: bool,
}

impl WriteOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compression level.
    #[must_use]
    pub const fn level(mut self, value: i32) -> Self {
        self.level = value;
        self
    }

    /// Sets append mode.
    #[must_use]
    pub const fn append(mut self, value: bool) -> Self {
        self.append = value;
        self
    }

    /// Sets keep-open mode.
    #[must_use]
    pub const fn keep_open(mut self, value: bool) -> Self {
        self.keep_open = value;
        self
    }
}
