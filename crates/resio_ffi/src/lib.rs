//! # resio FFI
//!
//! Stable C ABI for resio.
//!
//! Reads and writes byte streams identified by a URI (file path,
//! `http(s)://`, `stdin`/`stdout`/`stderr`), optionally passed through
//! a named compression algorithm, from any host language that can call
//! C functions.
//!
//! ## Conventions
//!
//! - Text arguments are null-terminated UTF-8.
//! - Binary payloads are a pointer plus an explicit length.
//! - Every fallible function returns an error message (`char *`), or
//!   null on success; the result itself travels through out-parameters.
//!
//! ## Ownership
//!
//! Every pointer this library returns is owned by the caller:
//!
//! - strings (error messages, `resio_read_string` output,
//!   `resio_schemes`, `resio_algorithms`) are released with
//!   [`resio_string_free`]
//! - byte buffers are released with [`resio_buffer_free`]
//! - [`resio_version`] alone returns a static string that must not be
//!   freed
//!
//! The registries behind these functions are built on first use and are
//! immutable afterward, so all functions may be called concurrently
//! from multiple threads without external synchronization.

#![warn(missing_docs)]

mod buffer;
mod error;
mod introspect;
mod io;

pub use buffer::ResioBuffer;

use resio_core::Engine;
use std::sync::LazyLock;

static ENGINE: LazyLock<Engine> = LazyLock::new(Engine::new);

/// Returns the process-wide engine, built on first use.
pub(crate) fn engine() -> &'static Engine {
    &ENGINE
}
