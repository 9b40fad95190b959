use thiserror::Error;

use crate::constants::COMPACT_SEGMENTS;

/// Position of a segment inside a compact JWE.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    Header,
    EncryptedKey,
    InitializationVector,
    Ciphertext,
    AuthenticationTag,
}

impl SegmentKind {
    pub fn name(self) -> &'static str {
        match self {
            SegmentKind::Header               => "header",
            SegmentKind::EncryptedKey         => "encryption key",
            SegmentKind::InitializationVector => "initialization vector",
            SegmentKind::Ciphertext           => "ciphertext",
            SegmentKind::AuthenticationTag    => "authentication tag",
        }
    }
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Malformed compact token.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Wrong number of `.`-separated segments (too few or too many).
    #[error("not enough segments: expected {}, found {found}", COMPACT_SEGMENTS)]
    SegmentCount { found: usize },

    /// Token exceeds the configured length bound.
    #[error("token too long: {len} > {max}")]
    TokenTooLong { len: usize, max: usize },

    /// Segment is not valid unpadded base64url.
    #[error("invalid {segment} segment: {msg}")]
    InvalidBase64 { segment: SegmentKind, msg: String },

    /// Header segment decoded, but is not a JSON object.
    #[error("invalid header segment: {0}")]
    InvalidHeaderJson(String),
}

impl DecodeError {
    /// Segment the error refers to, when determinable from structure.
    pub fn segment(&self) -> Option<SegmentKind> {
        match self {
            DecodeError::InvalidBase64 { segment, .. } => Some(*segment),
            DecodeError::InvalidHeaderJson(_) => Some(SegmentKind::Header),
            _ => None,
        }
    }
}
