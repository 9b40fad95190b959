//! compact/decode.rs
//! Decryption pipeline.

use tracing::debug;

use crate::compact::types::{CompactParts, DecryptedJwe};
use crate::headers::{validate_header, Header, HeaderError};
use crate::jwe::Jwe;
use crate::segments::DecodeError;
use crate::types::JweError;

/// Decrypt a compact JWE with `key`.
///
/// # Errors
/// - `JweError::Decode` for a malformed token (segment count, base64url, header JSON).
/// - `JweError::Header` if the header is not admitted.
/// - `JweError::Crypto` for any key-unwrap or authentication failure. The cause
///   is intentionally not reported.
/// - `JweError::Compression` if the authenticated payload does not inflate.
pub fn deserialize_compact(jwe: &Jwe, token: &str, key: &[u8]) -> Result<DecryptedJwe, JweError> {
    if let Some(max) = jwe.max_token_len() {
        if token.len() > max {
            return Err(DecodeError::TokenTooLong { len: token.len(), max }.into());
        }
    }

    // 1-3. Segments, header JSON, binary segments
    let parts: CompactParts = token.parse()?;
    let header = &parts.protected.header;

    // 4. Admission control, same rules as encryption
    validate_header(header, jwe.registry(), jwe.header_names())?;

    // 5. Negotiate algorithms
    let alg_name = header.alg().ok_or(HeaderError::MissingAlgorithm)?;
    let enc_name = header.enc().ok_or(HeaderError::MissingEncryptionAlgorithm)?;
    let alg = jwe.registry().key_management(alg_name)?;
    let enc = jwe.registry().content_encryption(enc_name)?;

    // 6. Recover CEK
    let cek = alg
        .unwrap(&parts.encrypted_key, header, key)
        .map_err(|_| crypto_failure(alg_name, enc_name))?;

    // 7. AAD from the received segment text, never from a re-encoding
    let aad = parts.protected.aad();

    // 8. AEAD open
    let msg = enc
        .decrypt(&parts.ciphertext, aad, &parts.iv, &parts.tag, &cek)
        .map_err(|_| crypto_failure(alg_name, enc_name))?;
    drop(cek);

    // 9. Inflate after authentication
    let payload = decompress_payload(jwe, header, msg)?;

    debug!(alg = alg_name, enc = enc_name, zip = header.zip(), "deserialized compact JWE");

    // 10. Validated header and payload
    Ok(DecryptedJwe { header: parts.protected.header, payload })
}

fn crypto_failure(alg: &str, enc: &str) -> JweError {
    debug!(alg, enc, "compact JWE decryption failed");
    JweError::Crypto
}

fn decompress_payload(jwe: &Jwe, header: &Header, msg: Vec<u8>) -> Result<Vec<u8>, JweError> {
    match header.zip() {
        Some(zip) => Ok(jwe.registry().compression(zip)?.decompress(&msg)?),
        None => Ok(msg),
    }
}
