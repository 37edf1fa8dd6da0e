//! RIPEMD160(SHA256(data)) fingerprints used for pubkey and script hashes.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Size in bytes of a hash160 fingerprint
pub const HASH160_SIZE: usize = 20;

/// Calculate RIPEMD160(SHA256(data)).
pub fn hash160(data: &[u8]) -> [u8; HASH160_SIZE] {
    let sha = Sha256::digest(data);
    let mut out = [0u8; HASH160_SIZE];
    out.copy_from_slice(&Ripemd160::digest(sha));
    out
}
