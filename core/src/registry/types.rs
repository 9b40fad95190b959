//! registry/types.rs
//! Capability traits per algorithm kind and the registration descriptor.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use zeroize::Zeroizing;

use crate::compression::CompressionError;
use crate::constants::header_keys;
use crate::crypto::{random_bytes, random_key, AlgorithmError};
use crate::headers::{Header, HeaderError};

/// Envelope type an algorithm implementation is written for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EnvelopeType {
    Jws,
    Jwe,
}

/// Algorithm kind, one per header parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    KeyManagement,
    ContentEncryption,
    Compression,
}

impl AlgorithmKind {
    /// Header parameter carrying this kind's name.
    pub fn header_key(self) -> &'static str {
        match self {
            AlgorithmKind::KeyManagement     => header_keys::ALG,
            AlgorithmKind::ContentEncryption => header_keys::ENC,
            AlgorithmKind::Compression       => header_keys::ZIP,
        }
    }

    /// The "unsupported" failure for this kind.
    pub fn unsupported(self, name: &str) -> HeaderError {
        let name = name.to_owned();
        match self {
            AlgorithmKind::KeyManagement     => HeaderError::UnsupportedAlgorithm { name },
            AlgorithmKind::ContentEncryption => HeaderError::UnsupportedEncryptionAlgorithm { name },
            AlgorithmKind::Compression       => HeaderError::UnsupportedCompressionAlgorithm { name },
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmKind::KeyManagement     => f.write_str("key management"),
            AlgorithmKind::ContentEncryption => f.write_str("content encryption"),
            AlgorithmKind::Compression       => f.write_str("compression"),
        }
    }
}

/// Output of a key-management wrap.
///
/// `cek` is the key the content is actually encrypted with. Key wrapping passes the
/// generated CEK through; direct modes substitute the key they determine.
pub struct WrappedKey {
    pub encrypted_key: Vec<u8>,
    pub cek: Zeroizing<Vec<u8>>,
}

impl fmt::Debug for WrappedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrappedKey")
            .field("encrypted_key_len", &self.encrypted_key.len())
            .field("cek", &"<redacted>")
            .finish()
    }
}

/// AEAD output with the tag detached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sealed {
    pub ciphertext: Vec<u8>,
    pub tag: Vec<u8>,
}

/// Key-management algorithm (`alg`).
pub trait KeyManagementAlgorithm: Send + Sync {
    fn name(&self) -> &str;

    fn envelope(&self) -> EnvelopeType {
        EnvelopeType::Jwe
    }

    /// Protect `cek` for the recipient `key`. The header is available for
    /// algorithms that derive per-message parameters from it.
    fn wrap(
        &self,
        cek: Zeroizing<Vec<u8>>,
        header: &Header,
        key: &[u8],
    ) -> Result<WrappedKey, AlgorithmError>;

    /// Recover the CEK from `encrypted_key`.
    fn unwrap(
        &self,
        encrypted_key: &[u8],
        header: &Header,
        key: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>, AlgorithmError>;
}

/// Content-encryption algorithm (`enc`). Must be an AEAD.
pub trait ContentEncryptionAlgorithm: Send + Sync {
    fn name(&self) -> &str;

    fn envelope(&self) -> EnvelopeType {
        EnvelopeType::Jwe
    }

    /// CEK length in bytes.
    fn cek_len(&self) -> usize;

    /// IV length in bytes.
    fn iv_len(&self) -> usize;

    fn generate_cek(&self) -> Zeroizing<Vec<u8>> {
        random_key(self.cek_len())
    }

    fn generate_iv(&self) -> Vec<u8> {
        random_bytes(self.iv_len())
    }

    fn encrypt(&self, msg: &[u8], aad: &[u8], iv: &[u8], cek: &[u8]) -> Result<Sealed, AlgorithmError>;

    fn decrypt(
        &self,
        ciphertext: &[u8],
        aad: &[u8],
        iv: &[u8],
        tag: &[u8],
        cek: &[u8],
    ) -> Result<Vec<u8>, AlgorithmError>;
}

/// Compression algorithm (`zip`).
pub trait CompressionAlgorithm: Send + Sync {
    fn name(&self) -> &str;

    fn envelope(&self) -> EnvelopeType {
        EnvelopeType::Jwe
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CompressionError>;

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CompressionError>;
}

/// Registration descriptor: one implementation tagged with its kind.
#[derive(Clone)]
pub enum Algorithm {
    KeyManagement(Arc<dyn KeyManagementAlgorithm>),
    ContentEncryption(Arc<dyn ContentEncryptionAlgorithm>),
    Compression(Arc<dyn CompressionAlgorithm>),
}

impl Algorithm {
    pub fn key_management(alg: impl KeyManagementAlgorithm + 'static) -> Self {
        Algorithm::KeyManagement(Arc::new(alg))
    }

    pub fn content_encryption(alg: impl ContentEncryptionAlgorithm + 'static) -> Self {
        Algorithm::ContentEncryption(Arc::new(alg))
    }

    pub fn compression(alg: impl CompressionAlgorithm + 'static) -> Self {
        Algorithm::Compression(Arc::new(alg))
    }

    pub fn name(&self) -> &str {
        match self {
            Algorithm::KeyManagement(a)     => a.name(),
            Algorithm::ContentEncryption(a) => a.name(),
            Algorithm::Compression(a)       => a.name(),
        }
    }

    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Algorithm::KeyManagement(_)     => AlgorithmKind::KeyManagement,
            Algorithm::ContentEncryption(_) => AlgorithmKind::ContentEncryption,
            Algorithm::Compression(_)       => AlgorithmKind::Compression,
        }
    }

    pub fn envelope(&self) -> EnvelopeType {
        match self {
            Algorithm::KeyManagement(a)     => a.envelope(),
            Algorithm::ContentEncryption(a) => a.envelope(),
            Algorithm::Compression(a)       => a.envelope(),
        }
    }
}

impl fmt::Debug for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Algorithm")
            .field("name", &self.name())
            .field("kind", &self.kind())
            .field("envelope", &self.envelope())
            .finish()
    }
}

/// Setup-time failures. Caller errors, never data errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid algorithm for JWE: {name} ({envelope:?})")]
    InvalidEnvelope { name: String, envelope: EnvelopeType },

    #[error("unknown algorithm: {name}")]
    UnknownAlgorithm { name: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
