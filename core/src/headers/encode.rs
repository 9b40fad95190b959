//! headers/encode.rs
//!
//! Canonical header encoding: compact JSON (insertion order, no whitespace),
//! then unpadded base64url. The output is both the transmitted segment and the AAD.

use crate::headers::types::{Header, HeaderError, ProtectedHeader};
use crate::segments::encode_segment;

/// Encode a header into its protected segment.
#[inline]
pub fn encode_protected(header: &Header) -> Result<ProtectedHeader, HeaderError> {
    let json = serde_json::to_vec(header).map_err(|e| HeaderError::Encoding(e.to_string()))?;

    Ok(ProtectedHeader {
        header: header.clone(),
        encoded: encode_segment(&json),
    })
}
