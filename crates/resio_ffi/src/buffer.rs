//! Buffer types for FFI.

use std::ffi::{c_char, CString};

/// A byte buffer for FFI.
///
/// Memory is owned by Rust. Call `resio_buffer_free` to release.
#[repr(C)]
pub struct ResioBuffer {
    /// Pointer to data. Non-null for successful reads, including
    /// zero-length ones (the pointer is then dangling and must not be
    /// dereferenced).
    pub data: *mut u8,
    /// Length in bytes.
    pub len: usize,
    /// Capacity (for internal use).
    pub capacity: usize,
}

impl ResioBuffer {
    /// Creates a new buffer from a Vec.
    pub fn from_vec(vec: Vec<u8>) -> Self {
        let mut vec = vec.into_boxed_slice();
        let data = vec.as_mut_ptr();
        let len = vec.len();
        std::mem::forget(vec);

        Self {
            data,
            len,
            capacity: len,
        }
    }

    /// Creates a null buffer.
    pub fn null() -> Self {
        Self {
            data: std::ptr::null_mut(),
            len: 0,
            capacity: 0,
        }
    }

    /// Returns true if the buffer is null.
    pub fn is_null(&self) -> bool {
        self.data.is_null()
    }

    /// Converts back to a Vec, consuming the buffer.
    ///
    /// # Safety
    ///
    /// The buffer must have been created from a Vec.
    pub unsafe fn into_vec(self) -> Vec<u8> {
        if self.data.is_null() {
            return Vec::new();
        }
        Vec::from_raw_parts(self.data, self.len, self.capacity)
    }
}

/// Frees a buffer allocated by resio.
///
/// # Safety
///
/// The buffer must have been produced by a resio FFI function and must
/// not be used after this call.
#[no_mangle]
pub unsafe extern "C" fn resio_buffer_free(buffer: ResioBuffer) {
    if !buffer.data.is_null() {
        drop(Vec::from_raw_parts(buffer.data, buffer.len, buffer.capacity));
    }
}

/// Frees a string allocated by resio (error messages, string payloads,
/// introspection lists).
///
/// Passing null is a no-op. Do not pass the static string returned by
/// `resio_version`.
///
/// # Safety
///
/// The string must have been produced by a resio FFI function and must
/// not be used after this call.
#[no_mangle]
pub unsafe extern "C" fn resio_string_free(string: *mut c_char) {
    if !string.is_null() {
        drop(CString::from_raw(string));
    }
}
