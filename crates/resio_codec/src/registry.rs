//! Algorithm registry.

use crate::bzip2::Bzip2;
use crate::codec::Codec;
use crate::deflate::{Flate, Gzip, Zlib};
use crate::error::{CodecError, CodecResult};
use crate::identity::Identity;
use crate::snappy::Snappy;
use crate::zstd::Zstd;

/// bzip2 compression.
pub const ALGORITHM_BZIP2: &str = "bzip2";
/// Raw DEFLATE, no container framing.
pub const ALGORITHM_FLATE: &str = "flate";
/// gzip.
pub const ALGORITHM_GZIP: &str = "gzip";
/// No compression.
pub const ALGORITHM_NONE: &str = "none";
/// Snappy frame format.
pub const ALGORITHM_SNAPPY: &str = "snappy";
/// zlib.
pub const ALGORITHM_ZLIB: &str = "zlib";
/// Zstandard.
pub const ALGORITHM_ZSTD: &str = "zstd";

/// An ordered collection of codecs.
///
/// Built once at initialization and read-only afterward. `names`
/// reports codecs in registration order, so introspection output is
/// stable for the process lifetime.
#[derive(Default)]
pub struct AlgorithmRegistry {
    codecs: Vec<Box<dyn Codec>>,
}

impl AlgorithmRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { codecs: Vec::new() }
    }

    /// Creates a registry with the built-in codecs.
    ///
    /// Registers `bzip2`, `flate`, `gzip`, `none`, `snappy`, `zlib`,
    /// and `zstd`, in that order.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(Bzip2::new()));
        registry.register(Box::new(Flate::new()));
        registry.register(Box::new(Gzip::new()));
        registry.register(Box::new(Identity::new()));
        registry.register(Box::new(Snappy::new()));
        registry.register(Box::new(Zlib::new()));
        registry.register(Box::new(Zstd::new()));
        registry
    }

    /// Registers an additional codec.
    pub fn register(&mut self, codec: Box<dyn Codec>) {
        self.codecs.push(codec);
    }

    /// Resolves an algorithm name to its codec.
    ///
    /// The empty string is an alias for `"none"`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnsupportedAlgorithm`] if no codec is
    /// registered under `name`.
    pub fn resolve(&self, name: &str) -> CodecResult<&dyn Codec> {
        let name = if name.is_empty() { ALGORITHM_NONE } else { name };
        self.codecs
            .iter()
            .find(|codec| codec.name() == name)
            .map(Box::as_ref)
            .ok_or_else(|| CodecError::UnsupportedAlgorithm {
                algorithm: name.to_string(),
            })
    }

    /// Returns the registered algorithm names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.codecs.iter().map(|codec| codec.name()).collect()
    }

    /// Returns the number of registered codecs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// Returns true if no codecs are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::roundtrip;
    use proptest::prelude::*;

    #[test]
    fn builtin_roster_and_order() {
        let registry = AlgorithmRegistry::builtin();
        assert_eq!(
            registry.names(),
            vec!["bzip2", "flate", "gzip", "none", "snappy", "zlib", "zstd"]
        );
    }

    #[test]
    fn none_is_always_present() {
        let registry = AlgorithmRegistry::builtin();
        assert!(registry.names().contains(&ALGORITHM_NONE));
    }

    #[test]
    fn empty_string_aliases_none() {
        let registry = AlgorithmRegistry::builtin();
        assert_eq!(registry.resolve("").unwrap().name(), "none");
    }

    #[test]
    fn resolve_unknown_algorithm() {
        let registry = AlgorithmRegistry::builtin();
        let result = registry.resolve("not-a-real-codec");
        assert!(matches!(
            result,
            Err(CodecError::UnsupportedAlgorithm { algorithm }) if algorithm == "not-a-real-codec"
        ));
    }

    #[test]
    fn names_are_stable_across_calls() {
        let registry = AlgorithmRegistry::builtin();
        assert_eq!(registry.names(), registry.names());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn every_codec_roundtrips_arbitrary_bytes(
            data in proptest::collection::vec(any::<u8>(), 0..2048)
        ) {
            let registry = AlgorithmRegistry::builtin();
            for name in registry.names() {
                let codec = registry.resolve(name).unwrap();
                let (_, decoded) = roundtrip(codec, 0, &data);
                prop_assert_eq!(&decoded, &data);
            }
        }
    }
}
