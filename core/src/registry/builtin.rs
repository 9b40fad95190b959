//! registry/builtin.rs
//! Built-in algorithm set, addressable by name for configuration.

use crate::compression::DeflateCompression;
use crate::crypto::{AesGcmEncryption, AesKeyWrap, DirectKey};
use crate::registry::types::Algorithm;

/// Default compression level for `DEF`.
const DEFLATE_LEVEL: u32 = 6;

/// Every built-in algorithm.
pub fn builtin_algorithms(max_decompressed_len: usize) -> Vec<Algorithm> {
    let mut out = vec![Algorithm::key_management(DirectKey)];
    out.extend(AesKeyWrap::all().into_iter().map(Algorithm::key_management));
    out.extend(AesGcmEncryption::all().into_iter().map(Algorithm::content_encryption));
    out.push(Algorithm::compression(DeflateCompression::new(DEFLATE_LEVEL, max_decompressed_len)));
    out
}

/// A built-in algorithm by its registered name.
pub fn builtin_algorithm(name: &str, max_decompressed_len: usize) -> Option<Algorithm> {
    builtin_algorithms(max_decompressed_len)
        .into_iter()
        .find(|a| a.name() == name)
}
