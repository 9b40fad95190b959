//! crypto/random.rs
//! CEK and IV generation from the OS RNG.

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

/// Fresh random bytes (IVs).
#[inline]
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    OsRng.fill_bytes(&mut buf);
    buf
}

/// Fresh random key material, zeroed on drop.
#[inline]
pub fn random_key(len: usize) -> Zeroizing<Vec<u8>> {
    let mut key = Zeroizing::new(vec![0u8; len]);
    OsRng.fill_bytes(key.as_mut_slice());
    key
}
