//! crypto/aead.rs
//! AES-GCM content encryption (`A128GCM`, `A192GCM`, `A256GCM`, RFC 7518 §5.3).
//!
//! Design notes:
//! - 96-bit IV, 128-bit tag, detached from the ciphertext on the wire.
//! - The AAD is supplied by the envelope layer; this module never builds it.
//! - Tag verification fails closed: no plaintext is returned on mismatch.

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::aes::Aes192;
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm};

use crate::constants::alg_names;
use crate::crypto::types::{AlgorithmError, GCM_IV_LEN, GCM_TAG_LEN};
use crate::registry::{ContentEncryptionAlgorithm, Sealed};

type Aes192Gcm = AesGcm<Aes192, U12>;

/// AES-GCM cipher selected by key length.
enum AeadImpl {
    Aes128(Aes128Gcm),
    Aes192(Aes192Gcm),
    Aes256(Aes256Gcm),
}

impl AeadImpl {
    fn new(key_len: usize, cek: &[u8]) -> Result<Self, AlgorithmError> {
        let bad_len = || AlgorithmError::InvalidKeyLen { expected: key_len, actual: cek.len() };
        if cek.len() != key_len {
            return Err(bad_len());
        }

        match key_len {
            16 => Aes128Gcm::new_from_slice(cek).map(Self::Aes128).map_err(|_| bad_len()),
            24 => Aes192Gcm::new_from_slice(cek).map(Self::Aes192).map_err(|_| bad_len()),
            32 => Aes256Gcm::new_from_slice(cek).map(Self::Aes256).map_err(|_| bad_len()),
            _ => Err(bad_len()),
        }
    }

    fn seal(&self, iv: &[u8], aad: &[u8], buffer: &mut [u8]) -> Result<Vec<u8>, AlgorithmError> {
        let nonce = GenericArray::from_slice(iv);
        let tag = match self {
            AeadImpl::Aes128(c) => c.encrypt_in_place_detached(nonce, aad, buffer),
            AeadImpl::Aes192(c) => c.encrypt_in_place_detached(nonce, aad, buffer),
            AeadImpl::Aes256(c) => c.encrypt_in_place_detached(nonce, aad, buffer),
        }
        .map_err(|_| AlgorithmError::Seal)?;
        Ok(tag.to_vec())
    }

    fn open(&self, iv: &[u8], aad: &[u8], buffer: &mut [u8], tag: &[u8]) -> Result<(), AlgorithmError> {
        let nonce = GenericArray::from_slice(iv);
        let tag = GenericArray::from_slice(tag);
        match self {
            AeadImpl::Aes128(c) => c.decrypt_in_place_detached(nonce, aad, buffer, tag),
            AeadImpl::Aes192(c) => c.decrypt_in_place_detached(nonce, aad, buffer, tag),
            AeadImpl::Aes256(c) => c.decrypt_in_place_detached(nonce, aad, buffer, tag),
        }
        .map_err(|_| AlgorithmError::Open)
    }
}

/// `A128GCM` / `A192GCM` / `A256GCM`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AesGcmEncryption {
    name: &'static str,
    key_len: usize,
}

impl AesGcmEncryption {
    pub const A128GCM: Self = Self { name: alg_names::A128GCM, key_len: 16 };
    pub const A192GCM: Self = Self { name: alg_names::A192GCM, key_len: 24 };
    pub const A256GCM: Self = Self { name: alg_names::A256GCM, key_len: 32 };

    pub fn all() -> [Self; 3] {
        [Self::A128GCM, Self::A192GCM, Self::A256GCM]
    }
}

impl ContentEncryptionAlgorithm for AesGcmEncryption {
    fn name(&self) -> &str {
        self.name
    }

    fn cek_len(&self) -> usize {
        self.key_len
    }

    fn iv_len(&self) -> usize {
        GCM_IV_LEN
    }

    fn encrypt(&self, msg: &[u8], aad: &[u8], iv: &[u8], cek: &[u8]) -> Result<Sealed, AlgorithmError> {
        if iv.len() != GCM_IV_LEN {
            return Err(AlgorithmError::InvalidIvLen { expected: GCM_IV_LEN, actual: iv.len() });
        }

        let cipher = AeadImpl::new(self.key_len, cek)?;
        let mut buffer = msg.to_vec();
        let tag = cipher.seal(iv, aad, &mut buffer)?;

        Ok(Sealed { ciphertext: buffer, tag })
    }

    fn decrypt(
        &self,
        ciphertext: &[u8],
        aad: &[u8],
        iv: &[u8],
        tag: &[u8],
        cek: &[u8],
    ) -> Result<Vec<u8>, AlgorithmError> {
        if iv.len() != GCM_IV_LEN {
            return Err(AlgorithmError::InvalidIvLen { expected: GCM_IV_LEN, actual: iv.len() });
        }
        if tag.len() != GCM_TAG_LEN {
            return Err(AlgorithmError::InvalidTagLen { expected: GCM_TAG_LEN, actual: tag.len() });
        }

        let cipher = AeadImpl::new(self.key_len, cek)?;
        let mut buffer = ciphertext.to_vec();
        cipher.open(iv, aad, &mut buffer, tag)?;

        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_then_open() {
        let enc = AesGcmEncryption::A256GCM;
        let cek = enc.generate_cek();
        let iv = enc.generate_iv();

        let sealed = enc.encrypt(b"payload", b"aad", &iv, &cek).unwrap();
        assert_eq!(sealed.tag.len(), GCM_TAG_LEN);

        let opened = enc.decrypt(&sealed.ciphertext, b"aad", &iv, &sealed.tag, &cek).unwrap();
        assert_eq!(opened, b"payload");
    }

    #[test]
    fn open_rejects_other_aad() {
        let enc = AesGcmEncryption::A128GCM;
        let cek = enc.generate_cek();
        let iv = enc.generate_iv();

        let sealed = enc.encrypt(b"payload", b"aad-1", &iv, &cek).unwrap();
        let err = enc.decrypt(&sealed.ciphertext, b"aad-2", &iv, &sealed.tag, &cek).unwrap_err();
        assert_eq!(err, AlgorithmError::Open);
    }

    #[test]
    fn wrong_lengths_are_rejected_without_panicking() {
        let enc = AesGcmEncryption::A192GCM;
        let cek = enc.generate_cek();

        assert!(matches!(
            enc.encrypt(b"x", b"", &[0u8; 8], &cek),
            Err(AlgorithmError::InvalidIvLen { expected: 12, actual: 8 })
        ));
        assert!(matches!(
            enc.encrypt(b"x", b"", &[0u8; 12], &[0u8; 16]),
            Err(AlgorithmError::InvalidKeyLen { expected: 24, actual: 16 })
        ));
        assert!(matches!(
            enc.decrypt(b"x", b"", &[0u8; 12], &[0u8; 4], &cek),
            Err(AlgorithmError::InvalidTagLen { .. })
        ));
    }
}
