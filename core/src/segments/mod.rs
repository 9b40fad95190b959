//! segments/mod.rs
//! Segment codec: base64url (no padding) text segments and the JSON header segment.
//!
//! Notes:
//! - Decoding is strict: padding characters and non-canonical trailing bits are rejected.
//! - Decode failures name the segment that failed, never anything cryptographic.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
