//! registry/registry.rs
//! Three disjoint name → implementation maps, one per algorithm kind.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::headers::HeaderError;
use crate::registry::types::{
    Algorithm, AlgorithmKind, CompressionAlgorithm, ConfigError, ContentEncryptionAlgorithm,
    EnvelopeType, KeyManagementAlgorithm,
};

#[derive(Clone, Default)]
pub struct AlgorithmRegistry {
    key_management: HashMap<String, Arc<dyn KeyManagementAlgorithm>>,
    content_encryption: HashMap<String, Arc<dyn ContentEncryptionAlgorithm>>,
    compression: HashMap<String, Arc<dyn CompressionAlgorithm>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of descriptors.
    pub fn from_algorithms<I>(algorithms: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Algorithm>,
    {
        let mut registry = Self::new();
        for algorithm in algorithms {
            registry.register(algorithm)?;
        }
        Ok(registry)
    }

    /// Register one algorithm.
    ///
    /// Rejects descriptors not tagged for JWE. A duplicate name within the same
    /// kind replaces the earlier registration.
    pub fn register(&mut self, algorithm: Algorithm) -> Result<(), ConfigError> {
        if algorithm.envelope() != EnvelopeType::Jwe {
            return Err(ConfigError::InvalidEnvelope {
                name: algorithm.name().to_owned(),
                envelope: algorithm.envelope(),
            });
        }

        let name = algorithm.name().to_owned();
        let kind = algorithm.kind();
        let replaced = match algorithm {
            Algorithm::KeyManagement(a)     => self.key_management.insert(name.clone(), a).is_some(),
            Algorithm::ContentEncryption(a) => self.content_encryption.insert(name.clone(), a).is_some(),
            Algorithm::Compression(a)       => self.compression.insert(name.clone(), a).is_some(),
        };

        if replaced {
            debug!(%name, %kind, "replaced registered algorithm");
        } else {
            trace!(%name, %kind, "registered algorithm");
        }
        Ok(())
    }

    /// Whether `name` is registered under `kind`.
    pub fn contains(&self, kind: AlgorithmKind, name: &str) -> bool {
        match kind {
            AlgorithmKind::KeyManagement     => self.key_management.contains_key(name),
            AlgorithmKind::ContentEncryption => self.content_encryption.contains_key(name),
            AlgorithmKind::Compression       => self.compression.contains_key(name),
        }
    }

    /// Look up `name` under `kind`; unsupported names map to the kind's own error.
    pub fn resolve(&self, kind: AlgorithmKind, name: &str) -> Result<Algorithm, HeaderError> {
        match kind {
            AlgorithmKind::KeyManagement     => self.key_management(name).map(|a| Algorithm::KeyManagement(a.clone())),
            AlgorithmKind::ContentEncryption => self.content_encryption(name).map(|a| Algorithm::ContentEncryption(a.clone())),
            AlgorithmKind::Compression       => self.compression(name).map(|a| Algorithm::Compression(a.clone())),
        }
    }

    pub fn key_management(&self, name: &str) -> Result<&Arc<dyn KeyManagementAlgorithm>, HeaderError> {
        self.key_management
            .get(name)
            .ok_or_else(|| AlgorithmKind::KeyManagement.unsupported(name))
    }

    pub fn content_encryption(&self, name: &str) -> Result<&Arc<dyn ContentEncryptionAlgorithm>, HeaderError> {
        self.content_encryption
            .get(name)
            .ok_or_else(|| AlgorithmKind::ContentEncryption.unsupported(name))
    }

    pub fn compression(&self, name: &str) -> Result<&Arc<dyn CompressionAlgorithm>, HeaderError> {
        self.compression
            .get(name)
            .ok_or_else(|| AlgorithmKind::Compression.unsupported(name))
    }

    /// Registered names for `kind`, sorted.
    pub fn names(&self, kind: AlgorithmKind) -> Vec<&str> {
        let mut names: Vec<&str> = match kind {
            AlgorithmKind::KeyManagement     => self.key_management.keys().map(String::as_str).collect(),
            AlgorithmKind::ContentEncryption => self.content_encryption.keys().map(String::as_str).collect(),
            AlgorithmKind::Compression       => self.compression.keys().map(String::as_str).collect(),
        };
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for AlgorithmRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmRegistry")
            .field("alg", &self.names(AlgorithmKind::KeyManagement))
            .field("enc", &self.names(AlgorithmKind::ContentEncryption))
            .field("zip", &self.names(AlgorithmKind::Compression))
            .finish()
    }
}
