//! jwe.rs
//! Stable public API: a configured JWE instance.

use tracing::debug;

use crate::compact::{deserialize_compact, serialize_compact, DecryptedJwe};
use crate::config::JweConfig;
use crate::headers::{Header, HeaderNames};
use crate::registry::{builtin_algorithm, builtin_algorithms, Algorithm, AlgorithmKind, AlgorithmRegistry, ConfigError};
use crate::types::JweError;

/// A JWE compact serializer/deserializer bound to a fixed algorithm registry and
/// a fixed set of admitted private header names.
///
/// Read-only after construction; share it freely across threads.
#[derive(Clone, Debug)]
pub struct Jwe {
    registry: AlgorithmRegistry,
    header_names: HeaderNames,
    max_token_len: Option<usize>,
}

impl Jwe {
    /// Build from explicit algorithm descriptors and private header names.
    ///
    /// # Errors
    /// `ConfigError::InvalidEnvelope` if any descriptor is not tagged for JWE.
    pub fn new<A, P, S>(algorithms: A, private_headers: P) -> Result<Self, ConfigError>
    where
        A: IntoIterator<Item = Algorithm>,
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let registry = AlgorithmRegistry::from_algorithms(algorithms)?;
        let header_names = HeaderNames::with_private(private_headers);

        debug!(
            alg = ?registry.names(AlgorithmKind::KeyManagement),
            enc = ?registry.names(AlgorithmKind::ContentEncryption),
            zip = ?registry.names(AlgorithmKind::Compression),
            "configured JWE"
        );
        Ok(Self { registry, header_names, max_token_len: None })
    }

    /// Every built-in algorithm, no private headers.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::from_config(&JweConfig::default())
    }

    /// Build from configuration, resolving built-in algorithms by name.
    ///
    /// # Errors
    /// `ConfigError::UnknownAlgorithm` for a name that is not a built-in algorithm.
    pub fn from_config(config: &JweConfig) -> Result<Self, ConfigError> {
        let algorithms = match &config.algorithms {
            None => builtin_algorithms(config.max_decompressed_len),
            Some(names) => names
                .iter()
                .map(|name| {
                    builtin_algorithm(name, config.max_decompressed_len)
                        .ok_or_else(|| ConfigError::UnknownAlgorithm { name: name.clone() })
                })
                .collect::<Result<Vec<_>, _>>()?,
        };

        let mut jwe = Self::new(algorithms, config.private_headers.iter().cloned())?;
        jwe.max_token_len = config.max_token_len;
        Ok(jwe)
    }

    /// Encrypt `plaintext` under `header` for `key`; returns the compact token.
    pub fn serialize_compact(&self, header: &Header, plaintext: &[u8], key: &[u8]) -> Result<String, JweError> {
        serialize_compact(self, header, plaintext, key)
    }

    /// Decrypt a compact token with `key`.
    pub fn deserialize_compact(&self, token: &str, key: &[u8]) -> Result<DecryptedJwe, JweError> {
        deserialize_compact(self, token, key)
    }

    pub fn registry(&self) -> &AlgorithmRegistry {
        &self.registry
    }

    pub fn header_names(&self) -> &HeaderNames {
        &self.header_names
    }

    pub fn max_token_len(&self) -> Option<usize> {
        self.max_token_len
    }
}
