//! # resio transport
//!
//! URI scheme transports for resio.
//!
//! This crate provides the lowest-level I/O abstraction for resio.
//! A scheme handler turns the path portion of a URI into a raw byte
//! stream - it knows nothing about compression or buffering.
//!
//! ## Design Principles
//!
//! - Handlers open plain byte sources/sinks (no codec framing)
//! - Must be `Send + Sync`; per-call streams are exclusively owned
//! - The registry is built once and is read-only afterward
//!
//! ## Available Handlers
//!
//! - [`FileScheme`] - local paths, relative or absolute, and `file://`
//! - [`HttpScheme`] - `http`/`https`, read-only
//! - [`StdinDevice`] / [`StdoutDevice`] / [`StderrDevice`] - process streams
//!
//! ## Example
//!
//! ```no_run
//! use resio_transport::SchemeRegistry;
//! use std::io::Read;
//!
//! let registry = SchemeRegistry::builtin();
//! let handler = registry.resolve("file").unwrap();
//! let mut source = handler.open_read("/etc/hostname").unwrap();
//! let mut contents = Vec::new();
//! source.read_to_end(&mut contents).unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod device;
mod error;
mod file;
mod handler;
mod http;
mod registry;
pub mod uri;

pub use device::{StderrDevice, StdinDevice, StdoutDevice};
pub use error::{TransportError, TransportResult};
pub use file::FileScheme;
pub use handler::{ByteSource, Direction, RawSink, SchemeHandler, WriteStream};
pub use http::HttpScheme;
pub use registry::SchemeRegistry;
