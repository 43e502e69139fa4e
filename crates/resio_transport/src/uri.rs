//! URI splitting and reserved device literals.

use crate::handler::Direction;

/// Local file scheme name.
pub const SCHEME_FILE: &str = "file";
/// HTTP scheme name.
pub const SCHEME_HTTP: &str = "http";
/// HTTPS scheme name.
pub const SCHEME_HTTPS: &str = "https";
/// Standard input device name.
pub const SCHEME_STDIN: &str = "stdin";
/// Standard output device name.
pub const SCHEME_STDOUT: &str = "stdout";
/// Standard error device name.
pub const SCHEME_STDERR: &str = "stderr";

/// Splits a URI into a scheme and remainder on the first `"://"`.
///
/// If no scheme is present, returns `None` and the original string.
#[must_use]
pub fn split(uri: &str) -> (Option<&str>, &str) {
    match uri.find("://") {
        Some(i) => (Some(&uri[..i]), &uri[i + 3..]),
        None => (None, uri),
    }
}

/// Maps a reserved device literal to its scheme name.
///
/// `stdin`, `stdout`, and `stderr` resolve to themselves; `-` resolves
/// to `stdin` when reading and `stdout` when writing. Anything else is
/// not a device.
#[must_use]
pub fn device(uri: &str, direction: Direction) -> Option<&'static str> {
    match uri {
        "-" => Some(match direction {
            Direction::Read => SCHEME_STDIN,
            Direction::Write => SCHEME_STDOUT,
        }),
        "stdin" => Some(SCHEME_STDIN),
        "stdout" => Some(SCHEME_STDOUT),
        "stderr" => Some(SCHEME_STDERR),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_with_scheme() {
        assert_eq!(split("http://example.com/doc.txt"), (Some("http"), "example.com/doc.txt"));
        assert_eq!(split("file:///tmp/a.txt"), (Some("file"), "/tmp/a.txt"));
    }

    #[test]
    fn split_without_scheme() {
        assert_eq!(split("/tmp/a.txt"), (None, "/tmp/a.txt"));
        assert_eq!(split("relative/path.txt"), (None, "relative/path.txt"));
        assert_eq!(split(""), (None, ""));
    }

    #[test]
    fn split_uses_first_separator() {
        assert_eq!(split("a://b://c"), (Some("a"), "b://c"));
    }

    #[test]
    fn device_literals() {
        assert_eq!(device("stdin", Direction::Read), Some("stdin"));
        assert_eq!(device("stdout", Direction::Write), Some("stdout"));
        assert_eq!(device("stderr", Direction::Write), Some("stderr"));
        assert_eq!(device("/tmp/a.txt", Direction::Read), None);
    }

    #[test]
    fn dash_depends_on_direction() {
        assert_eq!(device("-", Direction::Read), Some("stdin"));
        assert_eq!(device("-", Direction::Write), Some("stdout"));
    }
}
