use thiserror::Error;

/// AES-GCM nonce length (96 bits).
pub const GCM_IV_LEN: usize = 12;

/// AES-GCM authentication tag length (128 bits).
pub const GCM_TAG_LEN: usize = 16;

/// AES key wrap integrity block length (RFC 3394).
pub const KW_BLOCK_LEN: usize = 8;

/// Errors raised by algorithm implementations.
///
/// The envelope layer collapses every decryption-side variant into a single
/// opaque failure; the detail here is for encryption-side diagnostics and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgorithmError {
    #[error("invalid key length: expected={expected}, actual={actual}")]
    InvalidKeyLen { expected: usize, actual: usize },

    #[error("invalid iv length: expected={expected}, actual={actual}")]
    InvalidIvLen { expected: usize, actual: usize },

    #[error("invalid tag length: expected={expected}, actual={actual}")]
    InvalidTagLen { expected: usize, actual: usize },

    #[error("key wrap failed: {0}")]
    Wrap(String),

    #[error("key unwrap failed")]
    Unwrap,

    #[error("encryption failed")]
    Seal,

    #[error("authentication failed")]
    Open,
}
