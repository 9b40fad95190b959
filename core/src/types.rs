use thiserror::Error;

use crate::compression::CompressionError;
use crate::crypto::AlgorithmError;
use crate::headers::HeaderError;
use crate::registry::ConfigError;
use crate::segments::DecodeError;

/// Unified JWE error.
/// - `From<T>` impls enable `?` across the pipeline.
/// - `Crypto` carries no cause: unwrap and authentication failures are indistinguishable.
#[derive(Debug, Error)]
pub enum JweError {
    /// Registry or configuration problem at setup.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed compact token.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Header not admitted.
    #[error("header error: {0}")]
    Header(#[from] HeaderError),

    /// CEK could not be wrapped for the supplied key (encryption path only).
    #[error("key management error: {0}")]
    KeyManagement(AlgorithmError),

    /// Content cipher rejected its inputs (encryption path only).
    #[error("encryption error: {0}")]
    Encryption(AlgorithmError),

    /// Key unwrap or AEAD authentication failure.
    #[error("decryption failed")]
    Crypto,

    /// Compression failure, or corrupt compressed payload after authentication.
    #[error("compression error: {0}")]
    Compression(#[from] CompressionError),
}

impl JweError {
    pub fn is_crypto(&self) -> bool {
        matches!(self, JweError::Crypto)
    }
}
