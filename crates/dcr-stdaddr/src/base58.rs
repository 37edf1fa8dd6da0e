//! Checksummed base58 with a two-byte version prefix.
//!
//! The encoded form is `base58(version || payload || checksum)` where the
//! checksum is the first four bytes of BLAKE-256(BLAKE-256(version || payload)).

use blake_hash::{Blake256, Digest};

/// Number of checksum bytes appended before encoding
pub const CHECKSUM_LEN: usize = 4;

/// Number of version (magic prefix) bytes
pub const VERSION_LEN: usize = 2;

/// Errors returned by [`check_decode`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckDecodeError {
    /// Not base58, or too short to hold a version and checksum
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Decoded fine but the checksum does not match
    #[error("checksum mismatch")]
    Checksum,
}

fn checksum(input: &[u8]) -> [u8; CHECKSUM_LEN] {
    let first = Blake256::digest(input);
    let second = Blake256::digest(first.as_slice());
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&second[..CHECKSUM_LEN]);
    out
}

/// Encode `payload` under the given two-byte version.
pub fn check_encode(payload: &[u8], version: [u8; VERSION_LEN]) -> String {
    let mut buf = Vec::with_capacity(VERSION_LEN + payload.len() + CHECKSUM_LEN);
    buf.extend_from_slice(&version);
    buf.extend_from_slice(payload);
    let cksum = checksum(&buf);
    buf.extend_from_slice(&cksum);
    bs58::encode(buf).into_string()
}

/// Decode a checksummed string into its version and payload.
pub fn check_decode(s: &str) -> Result<([u8; VERSION_LEN], Vec<u8>), CheckDecodeError> {
    let decoded = bs58::decode(s)
        .into_vec()
        .map_err(|e| CheckDecodeError::InvalidFormat(e.to_string()))?;
    if decoded.len() < VERSION_LEN + CHECKSUM_LEN {
        return Err(CheckDecodeError::InvalidFormat(format!(
            "decoded length {} is shorter than version and checksum",
            decoded.len()
        )));
    }

    let (body, cksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if checksum(body)[..] != cksum[..] {
        return Err(CheckDecodeError::Checksum);
    }

    let version = [body[0], body[1]];
    Ok((version, body[VERSION_LEN..].to_vec()))
}
