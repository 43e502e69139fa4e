//! HTTP and HTTPS scheme handler.

use crate::error::{TransportError, TransportResult};
use crate::handler::{ByteSource, Direction, RawSink, SchemeHandler};

/// Read-only handler for `http` and `https` URIs.
///
/// Each open issues one blocking GET and yields the response body as the
/// byte source. There is no retry and no timeout; a caller wanting
/// bounded latency must enforce it externally. A non-success status is
/// an open failure, not an empty stream.
#[derive(Debug)]
pub struct HttpScheme {
    scheme: &'static str,
}

impl HttpScheme {
    /// Creates a handler for the given scheme name (`http` or `https`).
    #[must_use]
    pub const fn new(scheme: &'static str) -> Self {
        Self { scheme }
    }
}

impl SchemeHandler for HttpScheme {
    fn name(&self) -> &str {
        self.scheme
    }

    fn open_read(&self, path: &str) -> TransportResult<ByteSource> {
        let url = format!("{}://{}", self.scheme, path);
        let response = reqwest::blocking::get(&url).map_err(|source| TransportError::Http {
            url: url.clone(),
            source,
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }
        Ok(Box::new(response))
    }

    fn open_write(&self, _path: &str, _append: bool) -> TransportResult<RawSink> {
        Err(TransportError::DirectionMismatch {
            scheme: self.scheme.to_string(),
            direction: Direction::Write,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_construction() {
        assert_eq!(HttpScheme::new("http").name(), "http");
        assert_eq!(HttpScheme::new("https").name(), "https");
    }

    #[test]
    fn write_is_a_direction_mismatch() {
        let result = HttpScheme::new("https").open_write("example.com/x", false);
        assert!(matches!(
            result,
            Err(TransportError::DirectionMismatch {
                direction: Direction::Write,
                ..
            })
        ));
    }
}
