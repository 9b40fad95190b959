use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::segments::types::{DecodeError, SegmentKind};

/// Decode an unpadded base64url segment.
///
/// Rejects `=` padding, standard-alphabet characters (`+`, `/`) and
/// non-canonical trailing bits.
#[inline]
pub fn decode_segment(segment: &str, kind: SegmentKind) -> Result<Vec<u8>, DecodeError> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| DecodeError::InvalidBase64 { segment: kind, msg: e.to_string() })
}
