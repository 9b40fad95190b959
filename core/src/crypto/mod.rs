//! crypto/mod.rs
//! Built-in cryptographic collaborators: AES-GCM content encryption, direct and
//! AES key wrap key management, and CEK/IV generation.

pub mod types;
pub mod random;
pub mod aead;
pub mod keywrap;

pub use types::*;
pub use random::*;
pub use aead::*;
pub use keywrap::*;
