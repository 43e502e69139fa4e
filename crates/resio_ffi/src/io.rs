//! Read and write entry points.

use crate::buffer::ResioBuffer;
use crate::engine;
use crate::error::{guard, into_c_string, text_arg};
use resio_core::WriteOptions;
use std::ffi::{c_char, c_int, CString};
use std::panic::AssertUnwindSafe;

/// Reads the resource at `uri` through `algorithm` into an owned byte
/// buffer.
///
/// On success, `out_buffer` receives the payload (non-null data pointer
/// even for a zero-length resource) and the return value is null. On
/// failure, `out_buffer` is set to a null buffer and the return value
/// is an error message owned by the caller.
///
/// Release the buffer with `resio_buffer_free` and the error with
/// `resio_string_free`.
///
/// # Safety
///
/// - `uri` and `algorithm` must be valid null-terminated UTF-8 strings
/// - `out_buffer` must be a valid pointer
#[no_mangle]
pub unsafe extern "C" fn resio_read_all(
    uri: *const c_char,
    algorithm: *const c_char,
    out_buffer: *mut ResioBuffer,
) -> *mut c_char {
    guard(AssertUnwindSafe(|| {
        if out_buffer.is_null() {
            return into_c_string("null out_buffer pointer");
        }
        let uri = match unsafe { text_arg(uri, "uri") } {
            Ok(s) => s,
            Err(e) => return e,
        };
        let algorithm = match unsafe { text_arg(algorithm, "algorithm") } {
            Ok(s) => s,
            Err(e) => return e,
        };

        match engine().read_all(uri, algorithm) {
            Ok(data) => {
                unsafe { *out_buffer = ResioBuffer::from_vec(data) };
                std::ptr::null_mut()
            }
            Err(e) => {
                unsafe { *out_buffer = ResioBuffer::null() };
                into_c_string(e.to_string())
            }
        }
    }))
}

/// Reads the resource at `uri` through `algorithm` into an owned,
/// null-terminated string.
///
/// The payload is not required to be UTF-8, but a payload containing an
/// interior NUL byte cannot be null-terminated and is reported as an
/// error; use `resio_read_all` for binary data.
///
/// On success, `out_string` receives the payload and the return value
/// is null. Release both the payload and any error message with
/// `resio_string_free`.
///
/// # Safety
///
/// - `uri` and `algorithm` must be valid null-terminated UTF-8 strings
/// - `out_string` must be a valid pointer
#[no_mangle]
pub unsafe extern "C" fn resio_read_string(
    uri: *const c_char,
    algorithm: *const c_char,
    out_string: *mut *mut c_char,
) -> *mut c_char {
    guard(AssertUnwindSafe(|| {
        if out_string.is_null() {
            return into_c_string("null out_string pointer");
        }
        let uri = match unsafe { text_arg(uri, "uri") } {
            Ok(s) => s,
            Err(e) => return e,
        };
        let algorithm = match unsafe { text_arg(algorithm, "algorithm") } {
            Ok(s) => s,
            Err(e) => return e,
        };

        match engine().read_all(uri, algorithm) {
            Ok(data) => match CString::new(data) {
                Ok(payload) => {
                    unsafe { *out_string = payload.into_raw() };
                    std::ptr::null_mut()
                }
                Err(_) => {
                    unsafe { *out_string = std::ptr::null_mut() };
                    into_c_string(format!(
                        "payload from {uri:?} contains an interior NUL byte; use resio_read_all for binary data"
                    ))
                }
            },
            Err(e) => {
                unsafe { *out_string = std::ptr::null_mut() };
                into_c_string(e.to_string())
            }
        }
    }))
}

/// Writes `data_len` bytes from `data` to the resource at `uri` through
/// `algorithm`.
///
/// `level` tunes compression effort; `0` selects the codec's default.
/// With `keep_open` non-zero, codec framing is flushed but the
/// underlying destination stays open, so repeated calls can write to a
/// long-lived stream such as `stdout`.
///
/// Returns null on success, or an error message owned by the caller
/// (release with `resio_string_free`). Partial writes and close
/// failures are reported, never silently dropped.
///
/// # Safety
///
/// - `uri` and `algorithm` must be valid null-terminated UTF-8 strings
/// - `data` must be valid for `data_len` bytes, or null when
///   `data_len` is zero
#[no_mangle]
pub unsafe extern "C" fn resio_write_string(
    uri: *const c_char,
    algorithm: *const c_char,
    level: c_int,
    data: *const u8,
    data_len: usize,
    keep_open: c_int,
) -> *mut c_char {
    guard(AssertUnwindSafe(|| {
        let uri = match unsafe { text_arg(uri, "uri") } {
            Ok(s) => s,
            Err(e) => return e,
        };
        let algorithm = match unsafe { text_arg(algorithm, "algorithm") } {
            Ok(s) => s,
            Err(e) => return e,
        };
        if data.is_null() && data_len > 0 {
            return into_c_string("null data pointer with non-zero length");
        }
        let payload: &[u8] = if data_len == 0 {
            &[]
        } else {
            unsafe { std::slice::from_raw_parts(data, data_len) }
        };

        let options = WriteOptions::new().level(level).keep_open(keep_open != 0);
        match engine().write_all(uri, algorithm, payload, &options) {
            Ok(()) => std::ptr::null_mut(),
            Err(e) => into_c_string(e.to_string()),
        }
    }))
}
