//! compression/mod.rs
//! Payload compression applied before encryption (`zip` header parameter).
//!
//! Notes:
//! - Compression always runs on plaintext, never on ciphertext.
//! - Decompression is bounded to guard against inflation bombs.

pub mod types;
pub mod codecs;

pub use types::*;
pub use codecs::*;
