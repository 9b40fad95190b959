//! jwe-core
//!
//! JSON Web Encryption (RFC 7516) compact serialization: header validation,
//! algorithm negotiation, AAD construction and compact encoding/decoding over
//! pluggable key-management, content-encryption and compression algorithms.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod config;

// Wire and header layers
pub mod segments;
pub mod headers;

// Algorithms
pub mod registry;
pub mod crypto;
pub mod compression;

// Envelope
pub mod compact;
pub mod jwe;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compact::DecryptedJwe;
    pub use crate::config::JweConfig;
    pub use crate::headers::{Header, HeaderError};
    pub use crate::jwe::Jwe;
    pub use crate::registry::{
        Algorithm, AlgorithmKind, CompressionAlgorithm, ConfigError, ContentEncryptionAlgorithm,
        EnvelopeType, KeyManagementAlgorithm, Sealed, WrappedKey,
    };
    pub use crate::segments::DecodeError;
    pub use crate::types::JweError;
}
