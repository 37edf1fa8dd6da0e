//! Error types for address handling
//!
//! Every failure carries a detail string for humans and a stable
//! [`ErrorKind`] for programs. Nothing here is transient, so no error is
//! worth retrying.

use std::fmt;

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Address errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Requested script version is not implemented
    #[error("unsupported script version: {0}")]
    UnsupportedScriptVersion(u16),

    /// Public key bytes are not in the single accepted encoding
    #[error("invalid public key format: {0}")]
    InvalidPubKeyFormat(String),

    /// Public key bytes do not describe a valid key
    #[error("invalid public key: {0}")]
    InvalidPubKey(String),

    /// Public key hash or script hash is not 20 bytes
    #[error("invalid hash length: {0}")]
    InvalidHashLen(String),

    /// Address decodes but its checksum does not match
    #[error("bad address checksum: {0}")]
    BadAddressChecksum(String),

    /// Address is not any supported kind on the given network
    #[error("unsupported address: {0}")]
    UnsupportedAddress(String),

    /// Address is not valid checksummed base58
    #[error("malformed address: {0}")]
    MalformedAddress(String),

    /// Address decodes correctly but carries an invalid payload
    #[error("malformed address data: {0}")]
    MalformedAddressData(String),
}

impl Error {
    /// Get the stable classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedScriptVersion(_) => ErrorKind::UnsupportedScriptVersion,
            Error::InvalidPubKeyFormat(_) => ErrorKind::InvalidPubKeyFormat,
            Error::InvalidPubKey(_) => ErrorKind::InvalidPubKey,
            Error::InvalidHashLen(_) => ErrorKind::InvalidHashLen,
            Error::BadAddressChecksum(_) => ErrorKind::BadAddressChecksum,
            Error::UnsupportedAddress(_) => ErrorKind::UnsupportedAddress,
            Error::MalformedAddress(_) => ErrorKind::MalformedAddress,
            Error::MalformedAddressData(_) => ErrorKind::MalformedAddressData,
        }
    }
}

/// Error kinds for classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Script version not implemented
    UnsupportedScriptVersion,
    /// Wrong public key encoding for the algorithm
    InvalidPubKeyFormat,
    /// Invalid public key
    InvalidPubKey,
    /// Hash payload is not 20 bytes
    InvalidHashLen,
    /// Checksum mismatch
    BadAddressChecksum,
    /// Not a supported address kind for the network
    UnsupportedAddress,
    /// Not valid checksummed base58
    MalformedAddress,
    /// Invalid payload for the decoded address kind
    MalformedAddressData,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnsupportedScriptVersion => write!(f, "UnsupportedScriptVersion"),
            ErrorKind::InvalidPubKeyFormat => write!(f, "InvalidPubKeyFormat"),
            ErrorKind::InvalidPubKey => write!(f, "InvalidPubKey"),
            ErrorKind::InvalidHashLen => write!(f, "InvalidHashLen"),
            ErrorKind::BadAddressChecksum => write!(f, "BadAddressChecksum"),
            ErrorKind::UnsupportedAddress => write!(f, "UnsupportedAddress"),
            ErrorKind::MalformedAddress => write!(f, "MalformedAddress"),
            ErrorKind::MalformedAddressData => write!(f, "MalformedAddressData"),
        }
    }
}
