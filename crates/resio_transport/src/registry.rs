//! Scheme registry.

use crate::device::{StderrDevice, StdinDevice, StdoutDevice};
use crate::error::{TransportError, TransportResult};
use crate::file::FileScheme;
use crate::handler::SchemeHandler;
use crate::http::HttpScheme;
use crate::uri::{SCHEME_HTTP, SCHEME_HTTPS};

/// An ordered collection of scheme handlers.
///
/// Built once at initialization and read-only afterward, which makes
/// concurrent lookup safe without locking. `names` reports handlers in
/// registration order, so introspection output is stable for the
/// process lifetime.
#[derive(Default)]
pub struct SchemeRegistry {
    handlers: Vec<Box<dyn SchemeHandler>>,
}

impl SchemeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Creates a registry with the built-in handlers.
    ///
    /// Registers `file`, `http`, `https`, `stdin`, `stdout`, and
    /// `stderr`, in that order.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(FileScheme::new()));
        registry.register(Box::new(HttpScheme::new(SCHEME_HTTP)));
        registry.register(Box::new(HttpScheme::new(SCHEME_HTTPS)));
        registry.register(Box::new(StdinDevice::new()));
        registry.register(Box::new(StdoutDevice::new()));
        registry.register(Box::new(StderrDevice::new()));
        registry
    }

    /// Registers an additional handler.
    ///
    /// A handler registered under an already-present name shadows
    /// nothing; the earlier registration wins on resolve.
    pub fn register(&mut self, handler: Box<dyn SchemeHandler>) {
        self.handlers.push(handler);
    }

    /// Resolves a scheme name to its handler.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::UnsupportedScheme`] if no handler is
    /// registered under `scheme`.
    pub fn resolve(&self, scheme: &str) -> TransportResult<&dyn SchemeHandler> {
        self.handlers
            .iter()
            .find(|handler| handler.name() == scheme)
            .map(Box::as_ref)
            .ok_or_else(|| TransportError::UnsupportedScheme {
                scheme: scheme.to_string(),
            })
    }

    /// Returns the registered scheme names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.handlers.iter().map(|handler| handler.name()).collect()
    }

    /// Returns the number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
