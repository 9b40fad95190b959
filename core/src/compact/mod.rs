//! compact/mod.rs
//! JWE Compact Serialization (RFC 7516 §7.1).
//!
//! ```text
//! BASE64URL(UTF8(JWE Protected Header)) '.'
//! BASE64URL(JWE Encrypted Key)          '.'
//! BASE64URL(JWE Initialization Vector)  '.'
//! BASE64URL(JWE Ciphertext)             '.'
//! BASE64URL(JWE Authentication Tag)
//! ```
//!
//! Invariants:
//! - AAD is the protected segment text as transmitted, on both paths.
//! - The token is assembled only after every step succeeded.
//! - Every unwrap or AEAD-open failure surfaces as the same `JweError::Crypto`.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
