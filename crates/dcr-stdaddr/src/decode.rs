//! Text to [`Address`] decoding
//!
//! Two entry points share one dispatcher:
//!
//! - [`decode_address`] is what wallets call. It screens input cheaply and
//!   reports any undecodable text as [`Error::UnsupportedAddress`] unless the
//!   checksum is wrong.
//! - [`decode_address_v0`] is for tooling that expects a version 0 address
//!   and wants to know whether the text itself or its payload is broken.

use crate::address::{
    secp256k1_from_addr_data, Address, AddressPubKeyEcdsaSecp256k1V0, AddressPubKeyEd25519V0,
    AddressPubKeyHashEcdsaSecp256k1V0, AddressPubKeyHashEd25519V0,
    AddressPubKeyHashSchnorrSecp256k1V0, AddressPubKeySchnorrSecp256k1V0, AddressScriptHashV0,
    SigType, PUBKEY_ADDR_DATA_LEN, PUBKEY_ODD_Y_FLAG,
};
use crate::base58::{self, CheckDecodeError};
use crate::params::AddressParams;
use crate::{Error, Result};
use std::ops::RangeInclusive;

/// Encoded lengths of version 0 hash-based addresses.
///
/// Two prefix bytes, a 20-byte hash and a 4-byte checksum. The built-in
/// networks all encode to 35 characters; other prefix tables land anywhere
/// in the range.
const V0_HASH_ADDR_LENS: RangeInclusive<usize> = 34..=36;

/// Encoded lengths of version 0 pay-to-pubkey addresses.
///
/// Two prefix bytes, a 33-byte payload and a 4-byte checksum. The built-in
/// networks all encode to 53 characters.
const V0_PUBKEY_ADDR_LENS: RangeInclusive<usize> = 50..=54;

fn is_base58_char(c: u8) -> bool {
    matches!(
        c,
        b'1'..=b'9' | b'A'..=b'H' | b'J'..=b'N' | b'P'..=b'Z' | b'a'..=b'k' | b'm'..=b'z'
    )
}

/// Cheap check whether `addr` could be a version 0 address.
///
/// True when the length is plausible for a version 0 encoding under any
/// two-byte prefix and every character is in the base58 alphabet. Passing
/// says nothing about the checksum or payload.
pub fn probably_v0_base58_addr(addr: &str) -> bool {
    if !V0_HASH_ADDR_LENS.contains(&addr.len()) && !V0_PUBKEY_ADDR_LENS.contains(&addr.len()) {
        return false;
    }
    addr.bytes().all(is_base58_char)
}

/// Decode an address of any supported version for the network.
///
/// Malformed text and malformed payloads are both reported as
/// [`Error::UnsupportedAddress`]. A checksum mismatch is reported as
/// [`Error::BadAddressChecksum`].
pub fn decode_address(addr: &str, params: &dyn AddressParams) -> Result<Address> {
    if !probably_v0_base58_addr(addr) {
        tracing::trace!("Rejected {:?} before decoding", addr);
        return Err(Error::UnsupportedAddress(format!(
            "address {:?} is not a supported address",
            addr
        )));
    }

    match decode_address_v0(addr, params) {
        Err(Error::MalformedAddress(detail)) | Err(Error::MalformedAddressData(detail)) => {
            Err(Error::UnsupportedAddress(detail))
        }
        result => result,
    }
}

/// What a version 0 prefix says the payload holds
#[derive(Debug, Clone, Copy)]
enum V0Payload {
    PubKey,
    PubKeyHash(SigType),
    ScriptHash,
}

fn v0_prefix_table(params: &dyn AddressParams) -> [([u8; 2], V0Payload); 5] {
    [
        (params.addr_id_pubkey_v0(), V0Payload::PubKey),
        (
            params.addr_id_pubkey_hash_ecdsa_v0(),
            V0Payload::PubKeyHash(SigType::EcdsaSecp256k1),
        ),
        (
            params.addr_id_pubkey_hash_ed25519_v0(),
            V0Payload::PubKeyHash(SigType::Ed25519),
        ),
        (
            params.addr_id_pubkey_hash_schnorr_v0(),
            V0Payload::PubKeyHash(SigType::SchnorrSecp256k1),
        ),
        (params.addr_id_script_hash_v0(), V0Payload::ScriptHash),
    ]
}

/// Decode the 33-byte pay-to-pubkey payload.
fn decode_pubkey_payload(data: &[u8], params: &dyn AddressParams) -> Result<Address> {
    if data.len() != PUBKEY_ADDR_DATA_LEN {
        return Err(Error::MalformedAddressData(format!(
            "pay-to-pubkey payload is {} bytes, expected {}",
            data.len(),
            PUBKEY_ADDR_DATA_LEN
        )));
    }

    let id = data[0] & !PUBKEY_ODD_Y_FLAG;
    let sig_type = SigType::from_identifier(id).ok_or_else(|| {
        Error::MalformedAddressData(format!("unknown signature type {}", id))
    })?;

    let addr = match sig_type {
        SigType::EcdsaSecp256k1 => {
            AddressPubKeyEcdsaSecp256k1V0::from_raw(&secp256k1_from_addr_data(data), params)?
                .into()
        }
        SigType::SchnorrSecp256k1 => {
            AddressPubKeySchnorrSecp256k1V0::from_raw(&secp256k1_from_addr_data(data), params)?
                .into()
        }
        SigType::Ed25519 => {
            if data[0] & PUBKEY_ODD_Y_FLAG != 0 {
                return Err(Error::MalformedAddressData(
                    "ed25519 payload has the odd Y flag set".to_string(),
                ));
            }
            AddressPubKeyEd25519V0::from_raw(&data[1..], params)?.into()
        }
    };
    Ok(addr)
}

fn decode_v0_payload(kind: V0Payload, data: &[u8], params: &dyn AddressParams) -> Result<Address> {
    match kind {
        V0Payload::PubKey => decode_pubkey_payload(data, params),
        V0Payload::PubKeyHash(SigType::EcdsaSecp256k1) => {
            AddressPubKeyHashEcdsaSecp256k1V0::from_hash(data, params).map(Into::into)
        }
        V0Payload::PubKeyHash(SigType::Ed25519) => {
            AddressPubKeyHashEd25519V0::from_hash(data, params).map(Into::into)
        }
        V0Payload::PubKeyHash(SigType::SchnorrSecp256k1) => {
            AddressPubKeyHashSchnorrSecp256k1V0::from_hash(data, params).map(Into::into)
        }
        V0Payload::ScriptHash => AddressScriptHashV0::from_hash(data, params).map(Into::into),
    }
}

/// Decode a version 0 address for the network with detailed errors.
///
/// - [`Error::MalformedAddress`]: not valid base58 or too short
/// - [`Error::BadAddressChecksum`]: checksum mismatch
/// - [`Error::UnsupportedAddress`]: prefix unknown to `params`, or the
///   payload is valid for more than one kind sharing the prefix
/// - [`Error::MalformedAddressData`]: prefix known but the payload is
///   invalid for every kind using it
pub fn decode_address_v0(addr: &str, params: &dyn AddressParams) -> Result<Address> {
    let (prefix, payload) = base58::check_decode(addr).map_err(|e| match e {
        CheckDecodeError::InvalidFormat(detail) => {
            Error::MalformedAddress(format!("failed to decode address {:?}: {}", addr, detail))
        }
        CheckDecodeError::Checksum => {
            Error::BadAddressChecksum(format!("checksum mismatch in address {:?}", addr))
        }
    })?;

    let mut matched = false;
    let mut last_err = None;
    let mut decoded = Vec::with_capacity(1);
    for (_, kind) in v0_prefix_table(params)
        .into_iter()
        .filter(|(id, _)| *id == prefix)
    {
        matched = true;
        match decode_v0_payload(kind, &payload, params) {
            Ok(a) => decoded.push(a),
            Err(e) => {
                tracing::debug!("Payload of {:?} rejected as {:?}: {}", addr, kind, e);
                last_err = Some(e);
            }
        }
    }

    if !matched {
        return Err(Error::UnsupportedAddress(format!(
            "address {:?} has prefix {:02x}{:02x} which is not a version 0 address for this network",
            addr, prefix[0], prefix[1]
        )));
    }

    let mut decoded = decoded.into_iter();
    match (decoded.next(), decoded.next()) {
        (Some(a), None) => Ok(a),
        (Some(_), Some(_)) => Err(Error::UnsupportedAddress(format!(
            "address {:?} is valid for more than one kind with prefix {:02x}{:02x}",
            addr, prefix[0], prefix[1]
        ))),
        (None, _) => {
            let reason = last_err.map(|e| e.to_string()).unwrap_or_default();
            Err(Error::MalformedAddressData(format!(
                "address {:?} has an invalid payload: {}",
                addr, reason
            )))
        }
    }
}
