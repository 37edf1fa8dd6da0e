//! Version-tagged addresses
//!
//! [`Address`] is the closed set of address kinds this crate understands.
//! Each variant wraps a concrete version 0 type that can also be used on its
//! own when the kind is known up front.
//!
//! The generic constructors on [`Address`] take the script version the
//! caller wants to pay to and fail with
//! [`Error::UnsupportedScriptVersion`] for anything other than version 0.

mod pubkey;
mod pubkey_hash;
mod script_hash;

pub use pubkey::{
    AddressPubKeyEcdsaSecp256k1V0, AddressPubKeyEd25519V0, AddressPubKeySchnorrSecp256k1V0,
};
pub use pubkey_hash::{
    AddressPubKeyHashEcdsaSecp256k1V0, AddressPubKeyHashEd25519V0,
    AddressPubKeyHashSchnorrSecp256k1V0,
};
pub use script_hash::AddressScriptHashV0;

pub(crate) use pubkey::{secp256k1_from_addr_data, PUBKEY_ADDR_DATA_LEN, PUBKEY_ODD_Y_FLAG};

use crate::hash160::HASH160_SIZE;
use crate::params::AddressParams;
use crate::stake::StakeAddress;
use crate::{Error, Result, SCRIPT_VERSION_V0};
use std::fmt;

/// Signature algorithm an address is spendable with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigType {
    /// ECDSA over secp256k1
    EcdsaSecp256k1,
    /// EdDSA over Curve25519
    Ed25519,
    /// EC-Schnorr-DCRv0 over secp256k1
    SchnorrSecp256k1,
}

impl SigType {
    /// Identifier stored in the low bits of a pay-to-pubkey address payload
    pub fn identifier(self) -> u8 {
        match self {
            SigType::EcdsaSecp256k1 => 0,
            SigType::Ed25519 => 1,
            SigType::SchnorrSecp256k1 => 2,
        }
    }

    /// Reverse of [`SigType::identifier`]
    pub fn from_identifier(id: u8) -> Option<Self> {
        match id {
            0 => Some(SigType::EcdsaSecp256k1),
            1 => Some(SigType::Ed25519),
            2 => Some(SigType::SchnorrSecp256k1),
            _ => None,
        }
    }
}

impl fmt::Display for SigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigType::EcdsaSecp256k1 => write!(f, "ecdsa-secp256k1"),
            SigType::Ed25519 => write!(f, "ed25519"),
            SigType::SchnorrSecp256k1 => write!(f, "schnorr-secp256k1"),
        }
    }
}

/// Address kind without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// Pay to a secp256k1 pubkey with ECDSA
    PubKeyEcdsaSecp256k1,
    /// Pay to an Ed25519 pubkey
    PubKeyEd25519,
    /// Pay to a secp256k1 pubkey with Schnorr
    PubKeySchnorrSecp256k1,
    /// Pay to a secp256k1 pubkey hash with ECDSA
    PubKeyHashEcdsaSecp256k1,
    /// Pay to an Ed25519 pubkey hash
    PubKeyHashEd25519,
    /// Pay to a secp256k1 pubkey hash with Schnorr
    PubKeyHashSchnorrSecp256k1,
    /// Pay to a script hash
    ScriptHash,
}

impl AddressKind {
    /// Signature algorithm, `None` for script hashes
    pub fn sig_type(&self) -> Option<SigType> {
        match self {
            AddressKind::PubKeyEcdsaSecp256k1 | AddressKind::PubKeyHashEcdsaSecp256k1 => {
                Some(SigType::EcdsaSecp256k1)
            }
            AddressKind::PubKeyEd25519 | AddressKind::PubKeyHashEd25519 => Some(SigType::Ed25519),
            AddressKind::PubKeySchnorrSecp256k1 | AddressKind::PubKeyHashSchnorrSecp256k1 => {
                Some(SigType::SchnorrSecp256k1)
            }
            AddressKind::ScriptHash => None,
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressKind::PubKeyEcdsaSecp256k1 => write!(f, "p2pk-ecdsa-secp256k1"),
            AddressKind::PubKeyEd25519 => write!(f, "p2pk-ed25519"),
            AddressKind::PubKeySchnorrSecp256k1 => write!(f, "p2pk-schnorr-secp256k1"),
            AddressKind::PubKeyHashEcdsaSecp256k1 => write!(f, "p2pkh-ecdsa-secp256k1"),
            AddressKind::PubKeyHashEd25519 => write!(f, "p2pkh-ed25519"),
            AddressKind::PubKeyHashSchnorrSecp256k1 => write!(f, "p2pkh-schnorr-secp256k1"),
            AddressKind::ScriptHash => write!(f, "p2sh"),
        }
    }
}

/// A decoded or constructed address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Address {
    /// Version 0 pay-to-pubkey, ECDSA secp256k1
    PubKeyEcdsaSecp256k1V0(AddressPubKeyEcdsaSecp256k1V0),
    /// Version 0 pay-to-pubkey, Ed25519
    PubKeyEd25519V0(AddressPubKeyEd25519V0),
    /// Version 0 pay-to-pubkey, Schnorr secp256k1
    PubKeySchnorrSecp256k1V0(AddressPubKeySchnorrSecp256k1V0),
    /// Version 0 pay-to-pubkey-hash, ECDSA secp256k1
    PubKeyHashEcdsaSecp256k1V0(AddressPubKeyHashEcdsaSecp256k1V0),
    /// Version 0 pay-to-pubkey-hash, Ed25519
    PubKeyHashEd25519V0(AddressPubKeyHashEd25519V0),
    /// Version 0 pay-to-pubkey-hash, Schnorr secp256k1
    PubKeyHashSchnorrSecp256k1V0(AddressPubKeyHashSchnorrSecp256k1V0),
    /// Version 0 pay-to-script-hash
    ScriptHashV0(AddressScriptHashV0),
}

fn require_v0(script_version: u16) -> Result<()> {
    if script_version != SCRIPT_VERSION_V0 {
        return Err(Error::UnsupportedScriptVersion(script_version));
    }
    Ok(())
}

impl Address {
    /// Pay-to-pubkey with ECDSA from a serialized secp256k1 key.
    ///
    /// Only the 33-byte compressed encoding is accepted.
    pub fn pubkey_ecdsa_secp256k1_raw(
        script_version: u16,
        serialized_pubkey: &[u8],
        params: &dyn AddressParams,
    ) -> Result<Self> {
        require_v0(script_version)?;
        AddressPubKeyEcdsaSecp256k1V0::from_raw(serialized_pubkey, params).map(Into::into)
    }

    /// Pay-to-pubkey with ECDSA from a parsed secp256k1 key
    pub fn pubkey_ecdsa_secp256k1(
        script_version: u16,
        pubkey: &secp256k1::PublicKey,
        params: &dyn AddressParams,
    ) -> Result<Self> {
        Self::pubkey_ecdsa_secp256k1_raw(script_version, &pubkey.serialize(), params)
    }

    /// Pay-to-pubkey with Ed25519 from a 32-byte serialized key
    pub fn pubkey_ed25519_raw(
        script_version: u16,
        serialized_pubkey: &[u8],
        params: &dyn AddressParams,
    ) -> Result<Self> {
        require_v0(script_version)?;
        AddressPubKeyEd25519V0::from_raw(serialized_pubkey, params).map(Into::into)
    }

    /// Pay-to-pubkey with Ed25519 from a parsed key
    pub fn pubkey_ed25519(
        script_version: u16,
        pubkey: &ed25519_dalek::VerifyingKey,
        params: &dyn AddressParams,
    ) -> Result<Self> {
        Self::pubkey_ed25519_raw(script_version, pubkey.as_bytes(), params)
    }

    /// Pay-to-pubkey with Schnorr from a serialized secp256k1 key.
    ///
    /// Only the 33-byte compressed encoding is accepted.
    pub fn pubkey_schnorr_secp256k1_raw(
        script_version: u16,
        serialized_pubkey: &[u8],
        params: &dyn AddressParams,
    ) -> Result<Self> {
        require_v0(script_version)?;
        AddressPubKeySchnorrSecp256k1V0::from_raw(serialized_pubkey, params).map(Into::into)
    }

    /// Pay-to-pubkey with Schnorr from a parsed secp256k1 key
    pub fn pubkey_schnorr_secp256k1(
        script_version: u16,
        pubkey: &secp256k1::PublicKey,
        params: &dyn AddressParams,
    ) -> Result<Self> {
        Self::pubkey_schnorr_secp256k1_raw(script_version, &pubkey.serialize(), params)
    }

    /// Pay-to-pubkey-hash with ECDSA from a 20-byte hash
    pub fn pubkey_hash_ecdsa_secp256k1(
        script_version: u16,
        pubkey_hash: &[u8],
        params: &dyn AddressParams,
    ) -> Result<Self> {
        require_v0(script_version)?;
        AddressPubKeyHashEcdsaSecp256k1V0::from_hash(pubkey_hash, params).map(Into::into)
    }

    /// Pay-to-pubkey-hash with Ed25519 from a 20-byte hash
    pub fn pubkey_hash_ed25519(
        script_version: u16,
        pubkey_hash: &[u8],
        params: &dyn AddressParams,
    ) -> Result<Self> {
        require_v0(script_version)?;
        AddressPubKeyHashEd25519V0::from_hash(pubkey_hash, params).map(Into::into)
    }

    /// Pay-to-pubkey-hash with Schnorr from a 20-byte hash
    pub fn pubkey_hash_schnorr_secp256k1(
        script_version: u16,
        pubkey_hash: &[u8],
        params: &dyn AddressParams,
    ) -> Result<Self> {
        require_v0(script_version)?;
        AddressPubKeyHashSchnorrSecp256k1V0::from_hash(pubkey_hash, params).map(Into::into)
    }

    /// Pay-to-script-hash committing to the hash160 of `redeem_script`
    pub fn script_hash(
        script_version: u16,
        redeem_script: &[u8],
        params: &dyn AddressParams,
    ) -> Result<Self> {
        require_v0(script_version)?;
        Ok(AddressScriptHashV0::from_script(redeem_script, params).into())
    }

    /// Pay-to-script-hash from an already computed 20-byte script hash
    pub fn script_hash_from_hash(
        script_version: u16,
        script_hash: &[u8],
        params: &dyn AddressParams,
    ) -> Result<Self> {
        require_v0(script_version)?;
        AddressScriptHashV0::from_hash(script_hash, params).map(Into::into)
    }

    /// Base58 string form
    pub fn address(&self) -> String {
        match self {
            Address::PubKeyEcdsaSecp256k1V0(a) => a.address(),
            Address::PubKeyEd25519V0(a) => a.address(),
            Address::PubKeySchnorrSecp256k1V0(a) => a.address(),
            Address::PubKeyHashEcdsaSecp256k1V0(a) => a.address(),
            Address::PubKeyHashEd25519V0(a) => a.address(),
            Address::PubKeyHashSchnorrSecp256k1V0(a) => a.address(),
            Address::ScriptHashV0(a) => a.address(),
        }
    }

    /// Script version and script that pays to this address
    pub fn payment_script(&self) -> (u16, Vec<u8>) {
        match self {
            Address::PubKeyEcdsaSecp256k1V0(a) => a.payment_script(),
            Address::PubKeyEd25519V0(a) => a.payment_script(),
            Address::PubKeySchnorrSecp256k1V0(a) => a.payment_script(),
            Address::PubKeyHashEcdsaSecp256k1V0(a) => a.payment_script(),
            Address::PubKeyHashEd25519V0(a) => a.payment_script(),
            Address::PubKeyHashSchnorrSecp256k1V0(a) => a.payment_script(),
            Address::ScriptHashV0(a) => a.payment_script(),
        }
    }

    /// Script version the address pays to
    pub fn script_version(&self) -> u16 {
        match self {
            Address::PubKeyEcdsaSecp256k1V0(_)
            | Address::PubKeyEd25519V0(_)
            | Address::PubKeySchnorrSecp256k1V0(_)
            | Address::PubKeyHashEcdsaSecp256k1V0(_)
            | Address::PubKeyHashEd25519V0(_)
            | Address::PubKeyHashSchnorrSecp256k1V0(_)
            | Address::ScriptHashV0(_) => SCRIPT_VERSION_V0,
        }
    }

    /// Kind of address
    pub fn kind(&self) -> AddressKind {
        match self {
            Address::PubKeyEcdsaSecp256k1V0(_) => AddressKind::PubKeyEcdsaSecp256k1,
            Address::PubKeyEd25519V0(_) => AddressKind::PubKeyEd25519,
            Address::PubKeySchnorrSecp256k1V0(_) => AddressKind::PubKeySchnorrSecp256k1,
            Address::PubKeyHashEcdsaSecp256k1V0(_) => AddressKind::PubKeyHashEcdsaSecp256k1,
            Address::PubKeyHashEd25519V0(_) => AddressKind::PubKeyHashEd25519,
            Address::PubKeyHashSchnorrSecp256k1V0(_) => AddressKind::PubKeyHashSchnorrSecp256k1,
            Address::ScriptHashV0(_) => AddressKind::ScriptHash,
        }
    }

    /// The 20-byte hash for hash-based kinds
    pub fn hash160(&self) -> Option<&[u8; HASH160_SIZE]> {
        self.as_stake_address().map(|a| a.hash160())
    }

    /// Stake script generation, available on hash-based kinds only
    pub fn as_stake_address(&self) -> Option<&dyn StakeAddress> {
        match self {
            Address::PubKeyHashEcdsaSecp256k1V0(a) => Some(a),
            Address::PubKeyHashEd25519V0(a) => Some(a),
            Address::PubKeyHashSchnorrSecp256k1V0(a) => Some(a),
            Address::ScriptHashV0(a) => Some(a),
            Address::PubKeyEcdsaSecp256k1V0(_)
            | Address::PubKeyEd25519V0(_)
            | Address::PubKeySchnorrSecp256k1V0(_) => None,
        }
    }

    /// Pay-to-pubkey-hash form of a pay-to-pubkey address
    pub fn address_pubkey_hash(&self) -> Option<Address> {
        match self {
            Address::PubKeyEcdsaSecp256k1V0(a) => Some(a.address_pubkey_hash().into()),
            Address::PubKeyEd25519V0(a) => Some(a.address_pubkey_hash().into()),
            Address::PubKeySchnorrSecp256k1V0(a) => Some(a.address_pubkey_hash().into()),
            _ => None,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address())
    }
}

macro_rules! impl_from_v0 {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Address {
                fn from(addr: $ty) -> Self {
                    Address::$variant(addr)
                }
            }
        )*
    };
}

impl_from_v0!(
    PubKeyEcdsaSecp256k1V0(AddressPubKeyEcdsaSecp256k1V0),
    PubKeyEd25519V0(AddressPubKeyEd25519V0),
    PubKeySchnorrSecp256k1V0(AddressPubKeySchnorrSecp256k1V0),
    PubKeyHashEcdsaSecp256k1V0(AddressPubKeyHashEcdsaSecp256k1V0),
    PubKeyHashEd25519V0(AddressPubKeyHashEd25519V0),
    PubKeyHashSchnorrSecp256k1V0(AddressPubKeyHashSchnorrSecp256k1V0),
    ScriptHashV0(AddressScriptHashV0),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use dcr_params::Network;

    const ECDSA_PUBKEY: &str = "028f53838b7639563f27c94845549a41e5146bcd52e7fef0ea6da143a02b0fe2ed";
    const PKH: &str = "2789d58cfa0957d206f025c2af056fc8a77cebb0";

    #[test]
    fn test_sig_type_identifiers() {
        for sig_type in [
            SigType::EcdsaSecp256k1,
            SigType::Ed25519,
            SigType::SchnorrSecp256k1,
        ] {
            assert_eq!(SigType::from_identifier(sig_type.identifier()), Some(sig_type));
        }
        assert_eq!(SigType::from_identifier(3), None);
        assert_eq!(SigType::from_identifier(0x7f), None);
    }

    #[test]
    fn test_unsupported_script_version() {
        let net = Network::mainnet();
        let pk = hex::decode(ECDSA_PUBKEY).unwrap();
        let hash = hex::decode(PKH).unwrap();

        let results = [
            Address::pubkey_ecdsa_secp256k1_raw(1, &pk, &net),
            Address::pubkey_schnorr_secp256k1_raw(9999, &pk, &net),
            Address::pubkey_ed25519_raw(1, &[0u8; 32], &net),
            Address::pubkey_hash_ecdsa_secp256k1(1, &hash, &net),
            Address::pubkey_hash_ed25519(u16::MAX, &hash, &net),
            Address::pubkey_hash_schnorr_secp256k1(2, &hash, &net),
            Address::script_hash(1, &[0x51], &net),
            Address::script_hash_from_hash(1, &hash, &net),
        ];
        for result in results {
            assert_eq!(result.unwrap_err().kind(), ErrorKind::UnsupportedScriptVersion);
        }
    }

    #[test]
    fn test_version_checked_before_payload() {
        // A bad payload under an unsupported version reports the version
        let err = Address::pubkey_hash_ecdsa_secp256k1(1, &[0u8; 3], &Network::mainnet())
            .unwrap_err();
        assert_eq!(err, Error::UnsupportedScriptVersion(1));
    }

    #[test]
    fn test_kind_and_capabilities() {
        let net = Network::mainnet();
        let pk = hex::decode(ECDSA_PUBKEY).unwrap();
        let hash = hex::decode(PKH).unwrap();

        let p2pk = Address::pubkey_ecdsa_secp256k1_raw(0, &pk, &net).unwrap();
        assert_eq!(p2pk.kind(), AddressKind::PubKeyEcdsaSecp256k1);
        assert!(p2pk.as_stake_address().is_none());
        assert!(p2pk.hash160().is_none());
        assert_eq!(p2pk.script_version(), 0);

        let p2pkh = Address::pubkey_hash_ed25519(0, &hash, &net).unwrap();
        assert_eq!(p2pkh.kind(), AddressKind::PubKeyHashEd25519);
        assert_eq!(p2pkh.hash160().map(|h| hex::encode(h)), Some(PKH.to_string()));
        assert!(p2pkh.as_stake_address().is_some());
        assert!(p2pkh.address_pubkey_hash().is_none());

        let p2sh = Address::script_hash_from_hash(0, &hash, &net).unwrap();
        assert_eq!(p2sh.kind(), AddressKind::ScriptHash);
        assert_eq!(p2sh.kind().sig_type(), None);
        assert!(p2sh.as_stake_address().is_some());
    }

    #[test]
    fn test_display_matches_address() {
        let net = Network::mainnet();
        let hash = hex::decode(PKH).unwrap();
        let addr = Address::pubkey_hash_ecdsa_secp256k1(0, &hash, &net).unwrap();
        assert_eq!(addr.to_string(), "DsUZxxoHJSty8DCfwfartwTYbuhmVct7tJu");
        assert_eq!(format!("{}", addr), addr.address());
    }

    #[test]
    fn test_pubkey_to_pubkey_hash() {
        let net = Network::mainnet();
        let pk = hex::decode(ECDSA_PUBKEY).unwrap();

        let ecdsa = Address::pubkey_ecdsa_secp256k1_raw(0, &pk, &net).unwrap();
        let pkh = ecdsa.address_pubkey_hash().unwrap();
        assert_eq!(pkh.kind(), AddressKind::PubKeyHashEcdsaSecp256k1);
        assert_eq!(pkh.address(), "DsWgWcoumpQZGB95FER5nPTuJEzvUKEseGW");

        let schnorr = Address::pubkey_schnorr_secp256k1_raw(0, &pk, &net).unwrap();
        let pkh = schnorr.address_pubkey_hash().unwrap();
        assert_eq!(pkh.kind(), AddressKind::PubKeyHashSchnorrSecp256k1);
        assert_eq!(pkh.address(), "DSZj7a5RuoDpwUGRsiQS2Kh2XDiwzG4Wu7C");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(AddressKind::ScriptHash.to_string(), "p2sh");
        assert_eq!(
            AddressKind::PubKeyHashEcdsaSecp256k1.to_string(),
            "p2pkh-ecdsa-secp256k1"
        );
        assert_eq!(SigType::Ed25519.to_string(), "ed25519");
    }
}
