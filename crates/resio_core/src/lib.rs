//! # resio core
//!
//! Unified multi-scheme, multi-algorithm I/O.
//!
//! One entry point reads or writes a byte stream identified by a URI
//! (file path, `http(s)://`, `stdin`/`stdout`/`stderr`), optionally
//! passed through a named compression codec:
//!
//! - the scheme registry turns the URI into a raw byte stream
//! - the algorithm registry wraps it with codec framing
//! - buffered operations drain or fill the composed stream
//!
//! ## Example
//!
//! ```no_run
//! use resio_core::{Engine, WriteOptions};
//!
//! let engine = Engine::new();
//! engine
//!     .write_all("/tmp/notes.gz", "gzip", b"hello", &WriteOptions::new())
//!     .unwrap();
//! let bytes = engine.read_all("/tmp/notes.gz", "gzip").unwrap();
//! assert_eq!(bytes, b"hello");
//! ```
//!
//! ## Concurrency
//!
//! An [`Engine`] is immutable after construction. Registries are built
//! once and only read afterward, and every stream is exclusively owned
//! by the call that opened it, so `&Engine` can be shared across
//! threads with no external synchronization.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod pipeline;

pub use config::{Config, WriteOptions};
pub use engine::Engine;
pub use error::{CoreError, CoreResult};
pub use pipeline::ComposedWriter;

pub use resio_codec::AlgorithmRegistry;
pub use resio_transport::{ByteSource, SchemeRegistry};
