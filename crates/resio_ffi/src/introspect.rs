//! Introspection entry points.

use crate::engine;
use crate::error::into_c_string;
use std::ffi::c_char;

/// Returns the library version as a null-terminated string.
///
/// The returned pointer is static and must not be freed.
#[no_mangle]
pub extern "C" fn resio_version() -> *const c_char {
    static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");
    VERSION.as_ptr().cast()
}

/// Returns the registered scheme names as a comma-delimited string.
///
/// The list is stable for the process lifetime. The caller owns the
/// returned string; release it with `resio_string_free`.
#[no_mangle]
pub extern "C" fn resio_schemes() -> *mut c_char {
    into_c_string(engine().scheme_names().join(","))
}

/// Returns the registered algorithm names as a comma-delimited string.
///
/// The list is stable for the process lifetime and always contains
/// `none`. The caller owns the returned string; release it with
/// `resio_string_free`.
#[no_mangle]
pub extern "C" fn resio_algorithms() -> *mut c_char {
    into_c_string(engine().algorithm_names().join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    fn consume(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null());
        let s = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        unsafe { crate::buffer::resio_string_free(ptr) };
        s
    }

    #[test]
    fn version_is_static_and_nonempty() {
        let ptr = resio_version();
        assert!(!ptr.is_null());
        let version = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap();
        assert!(!version.is_empty());
    }

    #[test]
    fn schemes_list() {
        let schemes = consume(resio_schemes());
        assert_eq!(schemes, "file,http,https,stdin,stdout,stderr");
    }

    #[test]
    fn algorithms_list_contains_none() {
        let algorithms = consume(resio_algorithms());
        assert!(algorithms.split(',').any(|name| name == "none"));
    }

    #[test]
    fn lists_do_not_change_between_calls() {
        assert_eq!(consume(resio_schemes()), consume(resio_schemes()));
        assert_eq!(consume(resio_algorithms()), consume(resio_algorithms()));
    }
}
