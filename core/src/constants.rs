//! Protocol constants for JWE compact serialization (RFC 7516 / RFC 7518).

/// Number of `.`-separated segments in a compact JWE.
pub const COMPACT_SEGMENTS: usize = 5;

/// Segment separator in the compact serialization.
pub const SEGMENT_SEPARATOR: char = '.';

/// Registered header parameter names (RFC 7516 §4.1).
/// Accepted without caller declaration.
pub const REGISTERED_HEADER_NAMES: &[&str] = &[
    "alg", "enc", "zip",
    "jku", "jwk", "kid",
    "x5u", "x5c", "x5t", "x5t#S256",
    "typ", "cty", "crit",
];

/// Header parameter keys that select an algorithm.
pub mod header_keys {
    pub const ALG: &str = "alg";
    pub const ENC: &str = "enc";
    pub const ZIP: &str = "zip";
}

/// Registered algorithm identifiers (RFC 7518).
pub mod alg_names {
    // Key management (`alg`)
    pub const DIR: &str    = "dir";
    pub const A128KW: &str = "A128KW";
    pub const A192KW: &str = "A192KW";
    pub const A256KW: &str = "A256KW";

    // Content encryption (`enc`)
    pub const A128GCM: &str = "A128GCM";
    pub const A192GCM: &str = "A192GCM";
    pub const A256GCM: &str = "A256GCM";

    // Compression (`zip`)
    pub const DEF: &str = "DEF";
}

/// Default upper bound for inflated `DEF` payloads (250 KiB).
pub const DEFAULT_MAX_DECOMPRESSED_LEN: usize = 250 * 1024;
