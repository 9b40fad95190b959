//! headers/decode.rs
//!
//! Decodes the first compact segment into a `Header`, keeping the original segment
//! text verbatim. The decoded header is never re-encoded for AAD purposes.

use serde_json::{Map, Value};

use crate::headers::types::{Header, ProtectedHeader};
use crate::segments::{decode_segment, DecodeError, SegmentKind};

/// Decode a protected header segment.
///
/// # Errors
/// - `DecodeError::InvalidBase64` if the segment is not unpadded base64url.
/// - `DecodeError::InvalidHeaderJson` if the bytes are not a JSON object.
#[inline]
pub fn decode_protected(segment: &str) -> Result<ProtectedHeader, DecodeError> {
    let bytes = decode_segment(segment, SegmentKind::Header)?;
    let map: Map<String, Value> = serde_json::from_slice(&bytes)
        .map_err(|e| DecodeError::InvalidHeaderJson(e.to_string()))?;

    Ok(ProtectedHeader {
        header: Header::from(map),
        encoded: segment.to_owned(),
    })
}
