//! Decred network definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Network type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// Mainnet
    Mainnet,
    /// Public test network (testnet3)
    Testnet,
    /// Regression test network (local development)
    Regnet,
    /// Simulation test network
    Simnet,
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NetworkType::Mainnet => "mainnet",
            NetworkType::Testnet => "testnet",
            NetworkType::Regnet => "regnet",
            NetworkType::Simnet => "simnet",
        })
    }
}

impl FromStr for NetworkType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(NetworkType::Mainnet),
            "testnet" | "testnet3" => Ok(NetworkType::Testnet),
            "regnet" | "regtest" => Ok(NetworkType::Regnet),
            "simnet" => Ok(NetworkType::Simnet),
            other => Err(Error::InvalidNetwork(other.to_string())),
        }
    }
}

/// Two-byte magic prefixes prepended to address payloads before base58
/// encoding.
///
/// Every prefix is unique per kind within a network so a decoded prefix
/// identifies exactly one address kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressPrefixes {
    /// Pay-to-pubkey addresses (all signature algorithms)
    pub pubkey_id: [u8; 2],
    /// Pay-to-pubkey-hash, secp256k1 key with ECDSA signatures
    pub pubkey_hash_ecdsa_id: [u8; 2],
    /// Pay-to-pubkey-hash, Ed25519 key and signatures
    pub pubkey_hash_ed25519_id: [u8; 2],
    /// Pay-to-pubkey-hash, secp256k1 key with Schnorr signatures
    pub pubkey_hash_schnorr_id: [u8; 2],
    /// Pay-to-script-hash addresses
    pub script_hash_id: [u8; 2],
    /// WIF-encoded private keys
    pub private_key_id: [u8; 2],
}

impl AddressPrefixes {
    /// Load a custom prefix table from JSON.
    ///
    /// Every prefix is a two element byte array, e.g. `"script_hash_id": [7, 26]`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}

/// Network configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Network {
    /// Network type
    pub network_type: NetworkType,
    /// Human-readable name
    pub name: &'static str,
    /// Address magic prefixes
    pub prefixes: AddressPrefixes,
}

impl Network {
    /// Get mainnet parameters
    pub const fn mainnet() -> Self {
        Self {
            network_type: NetworkType::Mainnet,
            name: "mainnet",
            prefixes: AddressPrefixes {
                pubkey_id: [0x13, 0x86],              // Dk
                pubkey_hash_ecdsa_id: [0x07, 0x3f],   // Ds
                pubkey_hash_ed25519_id: [0x07, 0x1f], // De
                pubkey_hash_schnorr_id: [0x07, 0x01], // DS
                script_hash_id: [0x07, 0x1a],         // Dc
                private_key_id: [0x22, 0xde],         // Pm
            },
        }
    }

    /// Get testnet parameters
    pub const fn testnet() -> Self {
        Self {
            network_type: NetworkType::Testnet,
            name: "testnet3",
            prefixes: AddressPrefixes {
                pubkey_id: [0x28, 0xf7],              // Tk
                pubkey_hash_ecdsa_id: [0x0f, 0x21],   // Ts
                pubkey_hash_ed25519_id: [0x0f, 0x01], // Te
                pubkey_hash_schnorr_id: [0x0e, 0xe3], // TS
                script_hash_id: [0x0e, 0xfc],         // Tc
                private_key_id: [0x23, 0x0e],         // Pt
            },
        }
    }

    /// Get regnet parameters
    pub const fn regnet() -> Self {
        Self {
            network_type: NetworkType::Regnet,
            name: "regnet",
            prefixes: AddressPrefixes {
                pubkey_id: [0x25, 0xe5],              // Rk
                pubkey_hash_ecdsa_id: [0x0e, 0x00],   // Rs
                pubkey_hash_ed25519_id: [0x0d, 0xe0], // Re
                pubkey_hash_schnorr_id: [0x0d, 0xc2], // RS
                script_hash_id: [0x0d, 0xdb],         // Rc
                private_key_id: [0x22, 0xfe],         // Pr
            },
        }
    }

    /// Get simnet parameters
    pub const fn simnet() -> Self {
        Self {
            network_type: NetworkType::Simnet,
            name: "simnet",
            prefixes: AddressPrefixes {
                pubkey_id: [0x27, 0x6f],              // Sk
                pubkey_hash_ecdsa_id: [0x0e, 0x91],   // Ss
                pubkey_hash_ed25519_id: [0x0e, 0x71], // Se
                pubkey_hash_schnorr_id: [0x0e, 0x53], // SS
                script_hash_id: [0x0e, 0x6c],         // Sc
                private_key_id: [0x23, 0x07],         // Ps
            },
        }
    }

    /// Get network by type
    pub const fn from_type(network_type: NetworkType) -> Self {
        match network_type {
            NetworkType::Mainnet => Self::mainnet(),
            NetworkType::Testnet => Self::testnet(),
            NetworkType::Regnet => Self::regnet(),
            NetworkType::Simnet => Self::simnet(),
        }
    }
}
