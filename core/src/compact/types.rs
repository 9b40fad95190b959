use std::fmt;
use std::str::FromStr;

use crate::constants::SEGMENT_SEPARATOR;
use crate::headers::{decode_protected, Header, ProtectedHeader};
use crate::segments::{decode_segment, encode_segment, DecodeError, SegmentKind};

/// The five parts of a compact JWE, binary segments decoded.
#[derive(Clone, Debug, PartialEq)]
pub struct CompactParts {
    pub protected: ProtectedHeader,
    pub encrypted_key: Vec<u8>,
    pub iv: Vec<u8>,
    pub ciphertext: Vec<u8>,
    pub tag: Vec<u8>,
}

/// Assemble the compact string. The protected segment is written verbatim.
impl fmt::Display for CompactParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = SEGMENT_SEPARATOR;
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.protected.encoded,
            encode_segment(&self.encrypted_key),
            encode_segment(&self.iv),
            encode_segment(&self.ciphertext),
            encode_segment(&self.tag),
        )
    }
}

/// Parse a compact string: segment count, header JSON, then each binary segment.
impl FromStr for CompactParts {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split(SEGMENT_SEPARATOR).collect();
        let [protected, encrypted_key, iv, ciphertext, tag] = segments.as_slice() else {
            return Err(DecodeError::SegmentCount { found: segments.len() });
        };

        Ok(Self {
            protected: decode_protected(protected)?,
            encrypted_key: decode_segment(encrypted_key, SegmentKind::EncryptedKey)?,
            iv: decode_segment(iv, SegmentKind::InitializationVector)?,
            ciphertext: decode_segment(ciphertext, SegmentKind::Ciphertext)?,
            tag: decode_segment(tag, SegmentKind::AuthenticationTag)?,
        })
    }
}

/// Result of a successful decryption.
#[derive(Clone, Debug, PartialEq)]
pub struct DecryptedJwe {
    pub header: Header,
    pub payload: Vec<u8>,
}
