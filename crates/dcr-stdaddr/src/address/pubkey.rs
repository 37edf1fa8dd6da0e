//! Version 0 pay-to-pubkey addresses
//!
//! The encoded payload is 33 bytes. Byte 0 carries the signature algorithm
//! identifier in its low 7 bits. For secp256k1 keys the high bit stores the
//! oddness of the Y coordinate and the remaining 32 bytes are the X
//! coordinate. For Ed25519 the high bit is clear and the remaining 32 bytes
//! are the key itself.

use super::pubkey_hash::{
    AddressPubKeyHashEcdsaSecp256k1V0, AddressPubKeyHashEd25519V0,
    AddressPubKeyHashSchnorrSecp256k1V0,
};
use super::SigType;
use crate::base58;
use crate::hash160::hash160;
use crate::params::AddressParams;
use crate::script::pay_to_pubkey_script;
use crate::{Error, Result, SCRIPT_VERSION_V0};
use std::fmt;

/// Length of a decoded pay-to-pubkey payload
pub(crate) const PUBKEY_ADDR_DATA_LEN: usize = 33;

/// Length of a compressed secp256k1 public key
const SECP256K1_COMPRESSED_LEN: usize = 33;

/// Length of an Ed25519 public key
const ED25519_PUBKEY_LEN: usize = 32;

const PUBKEY_COMPRESSED_EVEN: u8 = 0x02;
const PUBKEY_COMPRESSED_ODD: u8 = 0x03;

/// Set in the payload's first byte when the Y coordinate is odd
pub(crate) const PUBKEY_ODD_Y_FLAG: u8 = 0x80;

/// Validate a serialized secp256k1 key and require the compressed encoding.
fn parse_compressed_secp256k1(serialized: &[u8]) -> Result<[u8; SECP256K1_COMPRESSED_LEN]> {
    secp256k1::PublicKey::from_slice(serialized)
        .map_err(|e| Error::InvalidPubKey(format!("failed to parse public key: {}", e)))?;

    let compressed: [u8; SECP256K1_COMPRESSED_LEN] = serialized.try_into().map_err(|_| {
        Error::InvalidPubKeyFormat(format!(
            "serialized public key is {} bytes with format byte {:#04x}, expected compressed",
            serialized.len(),
            serialized[0]
        ))
    })?;
    debug_assert!(matches!(
        compressed[0],
        PUBKEY_COMPRESSED_EVEN | PUBKEY_COMPRESSED_ODD
    ));
    Ok(compressed)
}

/// Pack a compressed secp256k1 key into the address payload.
fn secp256k1_addr_data(sig_type: SigType, pubkey: &[u8; SECP256K1_COMPRESSED_LEN]) -> [u8; PUBKEY_ADDR_DATA_LEN] {
    let mut data = [0u8; PUBKEY_ADDR_DATA_LEN];
    data[0] = sig_type.identifier();
    if pubkey[0] == PUBKEY_COMPRESSED_ODD {
        data[0] |= PUBKEY_ODD_Y_FLAG;
    }
    data[1..].copy_from_slice(&pubkey[1..]);
    data
}

/// Rebuild the compressed secp256k1 encoding from an address payload.
pub(crate) fn secp256k1_from_addr_data(data: &[u8]) -> Vec<u8> {
    let mut pubkey = Vec::with_capacity(SECP256K1_COMPRESSED_LEN);
    if data[0] & PUBKEY_ODD_Y_FLAG != 0 {
        pubkey.push(PUBKEY_COMPRESSED_ODD);
    } else {
        pubkey.push(PUBKEY_COMPRESSED_EVEN);
    }
    pubkey.extend_from_slice(&data[1..]);
    pubkey
}

/// Pay-to-pubkey address for a secp256k1 key signed with ECDSA.
///
/// Spendable by a signature from the key itself; the script is
/// `<33-byte compressed pubkey> OP_CHECKSIG`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressPubKeyEcdsaSecp256k1V0 {
    pubkey_id: [u8; 2],
    pubkey_hash_id: [u8; 2],
    serialized_pubkey: [u8; SECP256K1_COMPRESSED_LEN],
}

impl AddressPubKeyEcdsaSecp256k1V0 {
    /// Create from a serialized key. Only the compressed encoding is
    /// accepted even though other encodings may describe a valid key.
    pub fn from_raw(serialized_pubkey: &[u8], params: &dyn AddressParams) -> Result<Self> {
        let serialized_pubkey = parse_compressed_secp256k1(serialized_pubkey)?;
        Ok(Self {
            pubkey_id: params.addr_id_pubkey_v0(),
            pubkey_hash_id: params.addr_id_pubkey_hash_ecdsa_v0(),
            serialized_pubkey,
        })
    }

    /// Create from a parsed key
    pub fn new(pubkey: &secp256k1::PublicKey, params: &dyn AddressParams) -> Self {
        Self {
            pubkey_id: params.addr_id_pubkey_v0(),
            pubkey_hash_id: params.addr_id_pubkey_hash_ecdsa_v0(),
            serialized_pubkey: pubkey.serialize(),
        }
    }

    /// Base58 string form
    pub fn address(&self) -> String {
        let data = secp256k1_addr_data(SigType::EcdsaSecp256k1, &self.serialized_pubkey);
        base58::check_encode(&data, self.pubkey_id)
    }

    /// Script version and script that pays to this address
    pub fn payment_script(&self) -> (u16, Vec<u8>) {
        (
            SCRIPT_VERSION_V0,
            pay_to_pubkey_script(SigType::EcdsaSecp256k1, &self.serialized_pubkey),
        )
    }

    /// Compressed serialization of the key
    pub fn serialized_pubkey(&self) -> &[u8] {
        &self.serialized_pubkey
    }

    /// Pay-to-pubkey-hash address for the same key on the same network
    pub fn address_pubkey_hash(&self) -> AddressPubKeyHashEcdsaSecp256k1V0 {
        AddressPubKeyHashEcdsaSecp256k1V0::from_parts(
            self.pubkey_hash_id,
            hash160(&self.serialized_pubkey),
        )
    }
}

impl fmt::Display for AddressPubKeyEcdsaSecp256k1V0 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address())
    }
}

/// Pay-to-pubkey address for an Ed25519 key.
///
/// The script is `<32-byte pubkey> OP_1 OP_CHECKSIGALT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressPubKeyEd25519V0 {
    pubkey_id: [u8; 2],
    pubkey_hash_id: [u8; 2],
    serialized_pubkey: [u8; ED25519_PUBKEY_LEN],
}

impl AddressPubKeyEd25519V0 {
    /// Create from a 32-byte serialized key
    pub fn from_raw(serialized_pubkey: &[u8], params: &dyn AddressParams) -> Result<Self> {
        let bytes: [u8; ED25519_PUBKEY_LEN] = serialized_pubkey.try_into().map_err(|_| {
            Error::InvalidPubKey(format!(
                "ed25519 public key must be {} bytes, got {}",
                ED25519_PUBKEY_LEN,
                serialized_pubkey.len()
            ))
        })?;
        let pubkey = ed25519_dalek::VerifyingKey::from_bytes(&bytes)
            .map_err(|e| Error::InvalidPubKey(format!("failed to parse public key: {}", e)))?;
        Ok(Self::new(&pubkey, params))
    }

    /// Create from a parsed key
    pub fn new(pubkey: &ed25519_dalek::VerifyingKey, params: &dyn AddressParams) -> Self {
        Self {
            pubkey_id: params.addr_id_pubkey_v0(),
            pubkey_hash_id: params.addr_id_pubkey_hash_ed25519_v0(),
            serialized_pubkey: pubkey.to_bytes(),
        }
    }

    /// Base58 string form
    pub fn address(&self) -> String {
        let mut data = [0u8; PUBKEY_ADDR_DATA_LEN];
        data[0] = SigType::Ed25519.identifier();
        data[1..].copy_from_slice(&self.serialized_pubkey);
        base58::check_encode(&data, self.pubkey_id)
    }

    /// Script version and script that pays to this address
    pub fn payment_script(&self) -> (u16, Vec<u8>) {
        (
            SCRIPT_VERSION_V0,
            pay_to_pubkey_script(SigType::Ed25519, &self.serialized_pubkey),
        )
    }

    /// The 32-byte key
    pub fn serialized_pubkey(&self) -> &[u8] {
        &self.serialized_pubkey
    }

    /// Pay-to-pubkey-hash address for the same key on the same network
    pub fn address_pubkey_hash(&self) -> AddressPubKeyHashEd25519V0 {
        AddressPubKeyHashEd25519V0::from_parts(self.pubkey_hash_id, hash160(&self.serialized_pubkey))
    }
}

impl fmt::Display for AddressPubKeyEd25519V0 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address())
    }
}

/// Pay-to-pubkey address for a secp256k1 key signed with EC-Schnorr-DCRv0.
///
/// The script is `<33-byte compressed pubkey> OP_2 OP_CHECKSIGALT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressPubKeySchnorrSecp256k1V0 {
    pubkey_id: [u8; 2],
    pubkey_hash_id: [u8; 2],
    serialized_pubkey: [u8; SECP256K1_COMPRESSED_LEN],
}

impl AddressPubKeySchnorrSecp256k1V0 {
    /// Create from a serialized key. Only the compressed encoding is
    /// accepted.
    pub fn from_raw(serialized_pubkey: &[u8], params: &dyn AddressParams) -> Result<Self> {
        let serialized_pubkey = parse_compressed_secp256k1(serialized_pubkey)?;
        Ok(Self {
            pubkey_id: params.addr_id_pubkey_v0(),
            pubkey_hash_id: params.addr_id_pubkey_hash_schnorr_v0(),
            serialized_pubkey,
        })
    }

    /// Create from a parsed key
    pub fn new(pubkey: &secp256k1::PublicKey, params: &dyn AddressParams) -> Self {
        Self {
            pubkey_id: params.addr_id_pubkey_v0(),
            pubkey_hash_id: params.addr_id_pubkey_hash_schnorr_v0(),
            serialized_pubkey: pubkey.serialize(),
        }
    }

    /// Base58 string form
    pub fn address(&self) -> String {
        let data = secp256k1_addr_data(SigType::SchnorrSecp256k1, &self.serialized_pubkey);
        base58::check_encode(&data, self.pubkey_id)
    }

    /// Script version and script that pays to this address
    pub fn payment_script(&self) -> (u16, Vec<u8>) {
        (
            SCRIPT_VERSION_V0,
            pay_to_pubkey_script(SigType::SchnorrSecp256k1, &self.serialized_pubkey),
        )
    }

    /// Compressed serialization of the key
    pub fn serialized_pubkey(&self) -> &[u8] {
        &self.serialized_pubkey
    }

    /// Pay-to-pubkey-hash address for the same key on the same network
    pub fn address_pubkey_hash(&self) -> AddressPubKeyHashSchnorrSecp256k1V0 {
        AddressPubKeyHashSchnorrSecp256k1V0::from_parts(
            self.pubkey_hash_id,
            hash160(&self.serialized_pubkey),
        )
    }
}

impl fmt::Display for AddressPubKeySchnorrSecp256k1V0 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use dcr_params::Network;

    const COMPRESSED_EVEN: &str =
        "028f53838b7639563f27c94845549a41e5146bcd52e7fef0ea6da143a02b0fe2ed";
    const COMPRESSED_ODD: &str =
        "03e925aafc1edd44e7c7f1ea4fb7d265dc672f204c3d0c81930389c10b81fb75de";
    const UNCOMPRESSED: &str = "0464c44653d6567eff5753c5d24a682ddc2b2cadfe1b0c6433b16374dace6778f0b87ca4279b565d2130ce59f75bfbb2b88da794143d7cfd3e80808a1fa3203904";
    const HYBRID: &str = "0664c44653d6567eff5753c5d24a682ddc2b2cadfe1b0c6433b16374dace6778f0b87ca4279b565d2130ce59f75bfbb2b88da794143d7cfd3e80808a1fa3203904";
    const ED25519: &str = "cecc1507dc1ddd7295951c290888f095adb9044d1b73d696e6df065d683bd4fc";

    #[test]
    fn test_ecdsa_compressed_keys() {
        let net = Network::mainnet();
        let even = hex::decode(COMPRESSED_EVEN).unwrap();
        let addr = AddressPubKeyEcdsaSecp256k1V0::from_raw(&even, &net).unwrap();
        assert_eq!(
            addr.address(),
            "DkM3ZigNyiwHrsXRjkDQ8t8tW6uKGW9g61qEkG3bMqQPQWYEf5X3J"
        );
        assert_eq!(addr.serialized_pubkey(), &even[..]);

        let odd = hex::decode(COMPRESSED_ODD).unwrap();
        let addr = AddressPubKeyEcdsaSecp256k1V0::from_raw(&odd, &net).unwrap();
        assert_eq!(
            addr.address(),
            "DkRM4ZcdejbYRu4AbcEdfDLzU9w1ZTqPXatXvL1g8Q77ibDjz7gwF"
        );
    }

    #[test]
    fn test_raw_rejects_uncompressed_and_hybrid() {
        let net = Network::mainnet();
        for key in [UNCOMPRESSED, HYBRID] {
            let raw = hex::decode(key).unwrap();
            let err = AddressPubKeyEcdsaSecp256k1V0::from_raw(&raw, &net).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidPubKeyFormat);
            let err = AddressPubKeySchnorrSecp256k1V0::from_raw(&raw, &net).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidPubKeyFormat);
        }
    }

    #[test]
    fn test_raw_rejects_invalid_keys() {
        let net = Network::mainnet();
        // 32 bytes of a 33-byte key
        let short = hex::decode(&COMPRESSED_EVEN[..64]).unwrap();
        let err = AddressPubKeyEcdsaSecp256k1V0::from_raw(&short, &net).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPubKey);

        let err = AddressPubKeyEcdsaSecp256k1V0::from_raw(&[], &net).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPubKey);

        // X coordinate not on the curve
        let mut off_curve = vec![0x02];
        off_curve.extend_from_slice(&[0xff; 32]);
        let err = AddressPubKeySchnorrSecp256k1V0::from_raw(&off_curve, &net).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPubKey);
    }

    #[test]
    fn test_typed_constructor_compresses() {
        let net = Network::mainnet();
        let raw = hex::decode(UNCOMPRESSED).unwrap();
        let pubkey = secp256k1::PublicKey::from_slice(&raw).unwrap();
        let addr = AddressPubKeyEcdsaSecp256k1V0::new(&pubkey, &net);
        assert_eq!(
            addr.address(),
            "DkM3EyZ546GghVSkvzb6J47PvGDyntqiDtFgipQhNj78Xm2mUYRpf"
        );
        assert_eq!(
            hex::encode(addr.payment_script().1),
            "210264c44653d6567eff5753c5d24a682ddc2b2cadfe1b0c6433b16374dace6778f0ac"
        );
    }

    #[test]
    fn test_schnorr_addresses() {
        let even = hex::decode(COMPRESSED_EVEN).unwrap();
        let addr = AddressPubKeySchnorrSecp256k1V0::from_raw(&even, &Network::mainnet()).unwrap();
        assert_eq!(
            addr.address(),
            "DkM7TD2qsne9DKo4uA2ZNt3XhejYVwT5mmQWtUXtjdPhRHXTSKxN4"
        );
        let (version, script) = addr.payment_script();
        assert_eq!(version, 0);
        assert_eq!(hex::encode(script), format!("21{}52be", COMPRESSED_EVEN));

        let odd = hex::decode(COMPRESSED_ODD).unwrap();
        let addr = AddressPubKeySchnorrSecp256k1V0::from_raw(&odd, &Network::testnet()).unwrap();
        assert_eq!(
            addr.address(),
            "TkQ92NozHj7DU3iWAbxLn2av5kizQ87AQtN7UwshALeDXu9vzamnx"
        );
    }

    #[test]
    fn test_ed25519_addresses() {
        let key = hex::decode(ED25519).unwrap();
        let addr = AddressPubKeyEd25519V0::from_raw(&key, &Network::mainnet()).unwrap();
        assert_eq!(
            addr.address(),
            "DkM5zR8tqWNAHngZQDTyAeqzabZxMKrkSbCFULDhmvySn3uHmm221"
        );
        assert_eq!(
            hex::encode(addr.payment_script().1),
            format!("20{}51be", ED25519)
        );
        assert_eq!(
            addr.address_pubkey_hash().address(),
            "DefEXaPHBLFFxdMm3e27bcDafgxCnoUvBiU"
        );

        let addr = AddressPubKeyEd25519V0::from_raw(&key, &Network::regnet()).unwrap();
        assert_eq!(
            addr.address(),
            "Rk44TM8ZWqLsuaLr37pH7jNvB31oEPuzGBrvSvZ729Qs9GfoiBryE"
        );
    }

    #[test]
    fn test_ed25519_rejects_bad_lengths() {
        let net = Network::mainnet();
        let key = hex::decode(ED25519).unwrap();
        for len in [0, 31, 33] {
            let mut raw = key.clone();
            raw.resize(len, 0);
            let err = AddressPubKeyEd25519V0::from_raw(&raw, &net).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidPubKey);
        }
    }

    #[test]
    fn test_addr_data_round_trip() {
        for key in [COMPRESSED_EVEN, COMPRESSED_ODD] {
            let raw: [u8; 33] = hex::decode(key).unwrap().try_into().unwrap();
            let data = secp256k1_addr_data(SigType::SchnorrSecp256k1, &raw);
            assert_eq!(data[0] & !PUBKEY_ODD_Y_FLAG, SigType::SchnorrSecp256k1.identifier());
            assert_eq!(secp256k1_from_addr_data(&data), raw.to_vec());
        }
    }
}
