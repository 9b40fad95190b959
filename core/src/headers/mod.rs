//! headers/mod.rs
//! JWE Protected Header: model, canonical encoding, decoding and admission control.
//!
//! Notes:
//! - The encoded segment travels with the parsed header (`ProtectedHeader`) so the AAD
//!   is always computed from the exact transmitted bytes.
//! - Validation runs identically before encryption and before decryption.

pub mod types;
pub mod encode;
pub mod decode;
pub mod validate;

pub use types::*;
pub use encode::*;
pub use decode::*;
pub use validate::*;
