//! Decred network parameters
//!
//! This crate provides the per-network constants needed to encode and decode
//! human-readable addresses: the two-byte magic prefixes for every address
//! kind, plus a few identifying values for each network.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod network;

pub use network::{AddressPrefixes, Network, NetworkType};

/// Error types for parameter operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid network specified
    #[error("Invalid network: {0}")]
    InvalidNetwork(String),

    /// Custom parameter table could not be parsed
    #[error("Invalid parameter config: {0}")]
    InvalidConfig(String),
}

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, Error>;
