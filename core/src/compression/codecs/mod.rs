//! compression/codecs/mod.rs
//! Registered `zip` codecs.

pub mod deflate;

pub use deflate::*;
