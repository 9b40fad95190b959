//! registry/mod.rs
//! Algorithm registry: name-keyed lookup into key-management (`alg`),
//! content-encryption (`enc`) and compression (`zip`) implementations.
//!
//! Notes:
//! - Populated once at construction, read-only afterwards; shared across threads
//!   without locking.
//! - Each kind has its own capability trait; `Algorithm` is the closed tag.

pub mod types;
pub mod registry;
pub mod builtin;

pub use types::*;
pub use registry::*;
pub use builtin::*;
