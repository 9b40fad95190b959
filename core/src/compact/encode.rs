//! compact/encode.rs
//! Encryption pipeline. Step order is fixed: each step feeds the next.

use std::borrow::Cow;

use tracing::debug;

use crate::compact::types::CompactParts;
use crate::headers::{encode_protected, validate_header, Header, HeaderError};
use crate::jwe::Jwe;
use crate::registry::WrappedKey;
use crate::types::JweError;

/// Encrypt `plaintext` for `key` and return the compact serialization.
///
/// # Errors
/// - `JweError::Header` if the header is not admitted.
/// - `JweError::KeyManagement` if the CEK cannot be wrapped for `key`.
/// - `JweError::Encryption` if the content cipher rejects its inputs.
/// - `JweError::Compression` if `zip` is set and compression fails.
pub fn serialize_compact(
    jwe: &Jwe,
    header: &Header,
    plaintext: &[u8],
    key: &[u8],
) -> Result<String, JweError> {
    // 1. Admission control
    validate_header(header, jwe.registry(), jwe.header_names())?;

    // 2. Negotiate algorithms
    let alg_name = header.alg().ok_or(HeaderError::MissingAlgorithm)?;
    let enc_name = header.enc().ok_or(HeaderError::MissingEncryptionAlgorithm)?;
    let alg = jwe.registry().key_management(alg_name)?;
    let enc = jwe.registry().content_encryption(enc_name)?;

    // 3. Protected segment: transmitted as-is and the sole AAD source
    let protected = encode_protected(header)?;

    // 4. Fresh CEK
    let cek = enc.generate_cek();

    // 5. Wrap CEK for the recipient
    let WrappedKey { encrypted_key, cek } = alg
        .wrap(cek, header, key)
        .map_err(JweError::KeyManagement)?;

    // 6. Fresh IV
    let iv = enc.generate_iv();

    // 7. AAD = ASCII(protected segment)
    let aad = protected.aad();

    // 8. Compress before encrypt
    let msg = compress_payload(jwe, header, plaintext)?;

    // 9. AEAD
    let sealed = enc
        .encrypt(&msg, aad, &iv, &cek)
        .map_err(JweError::Encryption)?;
    drop(cek);

    // 10. Assemble
    let parts = CompactParts {
        protected,
        encrypted_key,
        iv,
        ciphertext: sealed.ciphertext,
        tag: sealed.tag,
    };
    let token = parts.to_string();

    debug!(
        alg = alg_name,
        enc = enc_name,
        zip = header.zip(),
        token_len = token.len(),
        "serialized compact JWE"
    );
    Ok(token)
}

fn compress_payload<'a>(jwe: &Jwe, header: &Header, plaintext: &'a [u8]) -> Result<Cow<'a, [u8]>, JweError> {
    match header.zip() {
        Some(zip) => {
            let codec = jwe.registry().compression(zip)?;
            Ok(Cow::Owned(codec.compress(plaintext)?))
        }
        None => Ok(Cow::Borrowed(plaintext)),
    }
}
