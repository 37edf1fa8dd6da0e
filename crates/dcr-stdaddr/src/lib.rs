//! Standard Decred addresses
//!
//! This crate converts between human-readable base58 addresses and the
//! version-tagged payment and stake scripts they commit to. Addresses are
//! constructed explicitly through typed constructors or decoded from text
//! against a set of network parameters.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod address;
pub mod base58;
pub mod decode;
pub mod error;
pub mod hash160;
pub mod params;
pub mod script;
pub mod stake;

pub use address::{
    Address, AddressKind, AddressPubKeyEcdsaSecp256k1V0, AddressPubKeyEd25519V0,
    AddressPubKeyHashEcdsaSecp256k1V0, AddressPubKeyHashEd25519V0,
    AddressPubKeyHashSchnorrSecp256k1V0, AddressPubKeySchnorrSecp256k1V0, AddressScriptHashV0,
    SigType,
};
pub use decode::{decode_address, decode_address_v0, probably_v0_base58_addr};
pub use error::{Error, ErrorKind, Result};
pub use hash160::{hash160, HASH160_SIZE};
pub use params::AddressParams;
pub use stake::{Hash160, StakeAddress};

/// The only script version implemented by this crate.
pub const SCRIPT_VERSION_V0: u16 = 0;
