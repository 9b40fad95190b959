//! crypto/keywrap.rs
//! Key management: direct encryption (`dir`) and AES key wrap
//! (`A128KW`, `A192KW`, `A256KW`, RFC 7518 §4.4 / RFC 3394).
//!
//! Design notes:
//! - `dir` uses the recipient key as the CEK and transmits an empty encrypted key.
//! - AES-KW wraps the generated CEK under the recipient key; unwrap verifies the
//!   RFC 3394 integrity block. Every unwrap failure is the same `Unwrap` error.

use aes_gcm::aead::generic_array::GenericArray;
use aes_kw::{KekAes128, KekAes192, KekAes256};
use zeroize::Zeroizing;

use crate::constants::alg_names;
use crate::crypto::types::{AlgorithmError, KW_BLOCK_LEN};
use crate::headers::Header;
use crate::registry::{KeyManagementAlgorithm, WrappedKey};

/// `dir`: the shared symmetric key is the CEK.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectKey;

impl KeyManagementAlgorithm for DirectKey {
    fn name(&self) -> &str {
        alg_names::DIR
    }

    fn wrap(
        &self,
        _cek: Zeroizing<Vec<u8>>,
        _header: &Header,
        key: &[u8],
    ) -> Result<WrappedKey, AlgorithmError> {
        Ok(WrappedKey {
            encrypted_key: Vec::new(),
            cek: Zeroizing::new(key.to_vec()),
        })
    }

    fn unwrap(
        &self,
        encrypted_key: &[u8],
        _header: &Header,
        key: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>, AlgorithmError> {
        // RFC 7516 §5.2 step 10: the encrypted key MUST be empty for direct encryption.
        if !encrypted_key.is_empty() {
            return Err(AlgorithmError::Unwrap);
        }
        Ok(Zeroizing::new(key.to_vec()))
    }
}

/// AES key-encryption key selected by length.
enum KekImpl {
    Aes128(KekAes128),
    Aes192(KekAes192),
    Aes256(KekAes256),
}

impl KekImpl {
    fn new(kek_len: usize, key: &[u8]) -> Result<Self, AlgorithmError> {
        if key.len() != kek_len {
            return Err(AlgorithmError::InvalidKeyLen { expected: kek_len, actual: key.len() });
        }

        match kek_len {
            16 => Ok(Self::Aes128(KekAes128::new(GenericArray::from_slice(key)))),
            24 => Ok(Self::Aes192(KekAes192::new(GenericArray::from_slice(key)))),
            32 => Ok(Self::Aes256(KekAes256::new(GenericArray::from_slice(key)))),
            other => Err(AlgorithmError::InvalidKeyLen { expected: other, actual: key.len() }),
        }
    }

    fn wrap(&self, data: &[u8], out: &mut [u8]) -> Result<(), aes_kw::Error> {
        match self {
            KekImpl::Aes128(k) => k.wrap(data, out),
            KekImpl::Aes192(k) => k.wrap(data, out),
            KekImpl::Aes256(k) => k.wrap(data, out),
        }
    }

    fn unwrap(&self, data: &[u8], out: &mut [u8]) -> Result<(), aes_kw::Error> {
        match self {
            KekImpl::Aes128(k) => k.unwrap(data, out),
            KekImpl::Aes192(k) => k.unwrap(data, out),
            KekImpl::Aes256(k) => k.unwrap(data, out),
        }
    }
}

/// `A128KW` / `A192KW` / `A256KW`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AesKeyWrap {
    name: &'static str,
    kek_len: usize,
}

impl AesKeyWrap {
    pub const A128KW: Self = Self { name: alg_names::A128KW, kek_len: 16 };
    pub const A192KW: Self = Self { name: alg_names::A192KW, kek_len: 24 };
    pub const A256KW: Self = Self { name: alg_names::A256KW, kek_len: 32 };

    pub fn all() -> [Self; 3] {
        [Self::A128KW, Self::A192KW, Self::A256KW]
    }
}

impl KeyManagementAlgorithm for AesKeyWrap {
    fn name(&self) -> &str {
        self.name
    }

    fn wrap(
        &self,
        cek: Zeroizing<Vec<u8>>,
        _header: &Header,
        key: &[u8],
    ) -> Result<WrappedKey, AlgorithmError> {
        let kek = KekImpl::new(self.kek_len, key)?;

        let mut encrypted_key = vec![0u8; cek.len() + KW_BLOCK_LEN];
        kek.wrap(&cek, &mut encrypted_key)
            .map_err(|e| AlgorithmError::Wrap(e.to_string()))?;

        Ok(WrappedKey { encrypted_key, cek })
    }

    fn unwrap(
        &self,
        encrypted_key: &[u8],
        _header: &Header,
        key: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>, AlgorithmError> {
        let kek = KekImpl::new(self.kek_len, key).map_err(|_| AlgorithmError::Unwrap)?;

        // At least two 64-bit blocks after the integrity block, 64-bit aligned.
        if encrypted_key.len() < 3 * KW_BLOCK_LEN || encrypted_key.len() % KW_BLOCK_LEN != 0 {
            return Err(AlgorithmError::Unwrap);
        }

        let mut cek = Zeroizing::new(vec![0u8; encrypted_key.len() - KW_BLOCK_LEN]);
        kek.unwrap(encrypted_key, cek.as_mut_slice())
            .map_err(|_| AlgorithmError::Unwrap)?;

        Ok(cek)
    }
}
