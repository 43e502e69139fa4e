//! Error and string marshaling helpers.

use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, UnwindSafe};

/// Converts an owned Rust string into a caller-owned C string.
///
/// Interior NUL bytes are stripped so the conversion cannot fail.
pub(crate) fn into_c_string(message: impl Into<String>) -> *mut c_char {
    let mut bytes = message.into().into_bytes();
    bytes.retain(|&b| b != 0);
    match CString::new(bytes) {
        Ok(s) => s.into_raw(),
        // Unreachable: NUL bytes were stripped above.
        Err(_) => std::ptr::null_mut(),
    }
}

/// Runs an FFI body, converting any panic into an error return.
///
/// No internal fault may cross the boundary as undefined behavior;
/// a panic becomes an ordinary error message.
pub(crate) fn guard<F>(body: F) -> *mut c_char
where
    F: FnOnce() -> *mut c_char + UnwindSafe,
{
    match catch_unwind(body) {
        Ok(result) => result,
        Err(_) => into_c_string("internal error: panic in resio"),
    }
}

/// Decodes a required null-terminated UTF-8 argument.
///
/// Returns the error to hand back to the caller when the pointer is
/// null or the bytes are not UTF-8.
///
/// # Safety
///
/// `ptr` must be null or point to a null-terminated string that
/// outlives the current call.
pub(crate) unsafe fn text_arg<'a>(
    ptr: *const c_char,
    name: &str,
) -> Result<&'a str, *mut c_char> {
    if ptr.is_null() {
        return Err(into_c_string(format!("null {name} pointer")));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| into_c_string(format!("invalid UTF-8 in {name}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn read_back(ptr: *mut c_char) -> String {
        let s = CStr::from_ptr(ptr).to_str().unwrap().to_string();
        drop(CString::from_raw(ptr));
        s
    }

    #[test]
    fn plain_message() {
        let ptr = into_c_string("something failed");
        assert_eq!(unsafe { read_back(ptr) }, "something failed");
    }

    #[test]
    fn interior_nul_is_stripped() {
        let ptr = into_c_string("bad\0byte");
        assert_eq!(unsafe { read_back(ptr) }, "badbyte");
    }

    #[test]
    fn guard_converts_panic() {
        let ptr = guard(|| panic!("boom"));
        assert!(!ptr.is_null());
        let message = unsafe { read_back(ptr) };
        assert!(message.contains("panic"));
    }

    #[test]
    fn guard_passes_success_through() {
        let ptr = guard(std::ptr::null_mut);
        assert!(ptr.is_null());
    }

    #[test]
    fn text_arg_rejects_null() {
        let result = unsafe { text_arg(std::ptr::null(), "uri") };
        let err = result.unwrap_err();
        assert!(unsafe { read_back(err) }.contains("null uri pointer"));
    }

    #[test]
    fn text_arg_decodes_utf8() {
        let arg = CString::new("file:///tmp/x").unwrap();
        let decoded = unsafe { text_arg(arg.as_ptr(), "uri") }.unwrap();
        assert_eq!(decoded, "file:///tmp/x");
    }
}
