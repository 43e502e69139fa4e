//! # resio codec
//!
//! Compression codec wrappers for resio.
//!
//! A codec wraps a raw transport stream with compression framing in
//! either direction. Codecs never open resources themselves; they
//! transform streams the transport layer already opened.
//!
//! ## Registered algorithms
//!
//! `bzip2`, `flate`, `gzip`, `none`, `snappy`, `zlib`, `zstd`.
//!
//! `"none"` is a true identity transform and is always present. The
//! empty string is accepted as an alias for it.
//!
//! ## Example
//!
//! ```
//! use resio_codec::AlgorithmRegistry;
//! use std::io::Read;
//!
//! let registry = AlgorithmRegistry::builtin();
//! let codec = registry.resolve("none").unwrap();
//! let mut decoded = codec.decoder(Box::new(&b"plain bytes"[..])).unwrap();
//! let mut out = Vec::new();
//! decoded.read_to_end(&mut out).unwrap();
//! assert_eq!(out, b"plain bytes");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod bzip2;
mod codec;
mod deflate;
mod error;
mod identity;
mod registry;
mod snappy;
#[cfg(test)]
pub(crate) mod testutil;
mod zstd;

pub use crate::bzip2::Bzip2;
pub use crate::codec::{Codec, EncodeStream};
pub use crate::deflate::{Flate, Gzip, Zlib};
pub use crate::error::{CodecError, CodecResult};
pub use crate::identity::Identity;
pub use crate::registry::{
    AlgorithmRegistry, ALGORITHM_BZIP2, ALGORITHM_FLATE, ALGORITHM_GZIP, ALGORITHM_NONE,
    ALGORITHM_SNAPPY, ALGORITHM_ZLIB, ALGORITHM_ZSTD,
};
pub use crate::snappy::Snappy;
pub use crate::zstd::Zstd;
