use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Encode raw bytes as an unpadded base64url segment.
#[inline]
pub fn encode_segment(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}
