//! Network parameters consumed by address construction and decoding.
//!
//! Addresses only need the two-byte magic prefix of each address kind, so
//! the capability is a small trait rather than a full network description.
//! It is implemented for the built-in [`dcr_params::Network`] tables and for
//! custom [`dcr_params::AddressPrefixes`] loaded from configuration.

use dcr_params::{AddressPrefixes, Network};

/// Per-network magic prefixes for version 0 addresses.
pub trait AddressParams {
    /// Prefix for pay-to-pubkey addresses of every signature algorithm.
    fn addr_id_pubkey_v0(&self) -> [u8; 2];

    /// Prefix for pay-to-pubkey-hash addresses where the pubkey is secp256k1
    /// and the signature algorithm is ECDSA.
    fn addr_id_pubkey_hash_ecdsa_v0(&self) -> [u8; 2];

    /// Prefix for pay-to-pubkey-hash addresses where the pubkey and
    /// signature algorithm are Ed25519.
    fn addr_id_pubkey_hash_ed25519_v0(&self) -> [u8; 2];

    /// Prefix for pay-to-pubkey-hash addresses where the pubkey is secp256k1
    /// and the signature algorithm is Schnorr.
    fn addr_id_pubkey_hash_schnorr_v0(&self) -> [u8; 2];

    /// Prefix for pay-to-script-hash addresses.
    fn addr_id_script_hash_v0(&self) -> [u8; 2];
}

impl AddressParams for AddressPrefixes {
    fn addr_id_pubkey_v0(&self) -> [u8; 2] {
        self.pubkey_id
    }

    fn addr_id_pubkey_hash_ecdsa_v0(&self) -> [u8; 2] {
        self.pubkey_hash_ecdsa_id
    }

    fn addr_id_pubkey_hash_ed25519_v0(&self) -> [u8; 2] {
        self.pubkey_hash_ed25519_id
    }

    fn addr_id_pubkey_hash_schnorr_v0(&self) -> [u8; 2] {
        self.pubkey_hash_schnorr_id
    }

    fn addr_id_script_hash_v0(&self) -> [u8; 2] {
        self.script_hash_id
    }
}

impl AddressParams for Network {
    fn addr_id_pubkey_v0(&self) -> [u8; 2] {
        self.prefixes.addr_id_pubkey_v0()
    }

    fn addr_id_pubkey_hash_ecdsa_v0(&self) -> [u8; 2] {
        self.prefixes.addr_id_pubkey_hash_ecdsa_v0()
    }

    fn addr_id_pubkey_hash_ed25519_v0(&self) -> [u8; 2] {
        self.prefixes.addr_id_pubkey_hash_ed25519_v0()
    }

    fn addr_id_pubkey_hash_schnorr_v0(&self) -> [u8; 2] {
        self.prefixes.addr_id_pubkey_hash_schnorr_v0()
    }

    fn addr_id_script_hash_v0(&self) -> [u8; 2] {
        self.prefixes.addr_id_script_hash_v0()
    }
}
