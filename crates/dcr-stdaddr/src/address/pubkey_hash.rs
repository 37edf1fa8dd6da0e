//! Version 0 pay-to-pubkey-hash addresses
//!
//! All three algorithms share the same 20-byte payload and differ only in
//! their network prefix and the checksig suffix of the payment script.

use super::SigType;
use crate::base58;
use crate::hash160::HASH160_SIZE;
use crate::params::AddressParams;
use crate::script::HashTemplate;
use crate::stake::{Hash160, StakeAddress};
use crate::{Error, Result, SCRIPT_VERSION_V0};
use std::fmt;

/// Copy a hash slice into a fixed array, rejecting any other length.
pub(crate) fn hash_from_slice(hash: &[u8], what: &str) -> Result<[u8; HASH160_SIZE]> {
    hash.try_into().map_err(|_| {
        Error::InvalidHashLen(format!(
            "{} is {} bytes, expected {}",
            what,
            hash.len(),
            HASH160_SIZE
        ))
    })
}

macro_rules! pubkey_hash_address {
    (
        $(#[$meta:meta])*
        $name:ident, $sig_type:expr, $prefix:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            pubkey_hash_id: [u8; 2],
            hash: [u8; HASH160_SIZE],
        }

        impl $name {
            /// Create from the 20-byte hash160 of a serialized public key
            pub fn from_hash(pubkey_hash: &[u8], params: &dyn AddressParams) -> Result<Self> {
                let hash = hash_from_slice(pubkey_hash, "public key hash")?;
                Ok(Self::from_parts(params.$prefix(), hash))
            }

            pub(crate) fn from_parts(pubkey_hash_id: [u8; 2], hash: [u8; HASH160_SIZE]) -> Self {
                Self {
                    pubkey_hash_id,
                    hash,
                }
            }

            /// Base58 string form
            pub fn address(&self) -> String {
                base58::check_encode(&self.hash, self.pubkey_hash_id)
            }

            /// Script version and script that pays to this address
            pub fn payment_script(&self) -> (u16, Vec<u8>) {
                (SCRIPT_VERSION_V0, self.hash_template().payment_script())
            }
        }

        impl Hash160 for $name {
            fn hash160(&self) -> &[u8; HASH160_SIZE] {
                &self.hash
            }
        }

        impl StakeAddress for $name {
            fn hash_template(&self) -> HashTemplate {
                HashTemplate::PubKeyHash {
                    sig_type: $sig_type,
                    hash: self.hash,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.address())
            }
        }
    };
}

pubkey_hash_address!(
    /// Pay-to-pubkey-hash address for a secp256k1 key signed with ECDSA.
    ///
    /// The script is `OP_DUP OP_HASH160 <hash> OP_EQUALVERIFY OP_CHECKSIG`.
    AddressPubKeyHashEcdsaSecp256k1V0,
    SigType::EcdsaSecp256k1,
    addr_id_pubkey_hash_ecdsa_v0
);

pubkey_hash_address!(
    /// Pay-to-pubkey-hash address for an Ed25519 key.
    ///
    /// The script is
    /// `OP_DUP OP_HASH160 <hash> OP_EQUALVERIFY OP_1 OP_CHECKSIGALT`.
    AddressPubKeyHashEd25519V0,
    SigType::Ed25519,
    addr_id_pubkey_hash_ed25519_v0
);

pubkey_hash_address!(
    /// Pay-to-pubkey-hash address for a secp256k1 key signed with
    /// EC-Schnorr-DCRv0.
    ///
    /// The script is
    /// `OP_DUP OP_HASH160 <hash> OP_EQUALVERIFY OP_2 OP_CHECKSIGALT`.
    AddressPubKeyHashSchnorrSecp256k1V0,
    SigType::SchnorrSecp256k1,
    addr_id_pubkey_hash_schnorr_v0
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use dcr_params::Network;

    const HASH: &str = "2789d58cfa0957d206f025c2af056fc8a77cebb0";

    #[test]
    fn test_addresses_per_network() {
        let hash = hex::decode(HASH).unwrap();
        let cases = [
            (Network::mainnet(), "DsUZxxoHJSty8DCfwfartwTYbuhmVct7tJu", "DebkfTKk5j8963LDAtAChRSqRmZXJn3e99R", "DSXcZv4oSRiEoWL2a9aD8sgfptRo1YEXNKj"),
            (Network::testnet(), "TsUdBwvnhEx5EZt2m4D23WUpC1fh4DqDtHT", "TebotSTFUXBFCQ1ZzGnMqzU71sXSsVxrz1B", "TSXfnuCJqDmLus1PPYCNHShwQzPiaBUKD7H"),
            (Network::regnet(), "RsBwsPYeS3pA2DcjiyxkwNF9q7tESnV4pgp", "ReK8Zt57DL3Kz3kGxCY6jrESeyjzFz3PJyz", "RSEzULpAa2dRhWk6MTx7BJUH46cFxi7Bnox"),
        ];
        for (net, ecdsa, ed25519, schnorr) in cases {
            let addr = AddressPubKeyHashEcdsaSecp256k1V0::from_hash(&hash, &net).unwrap();
            assert_eq!(addr.address(), ecdsa);
            let addr = AddressPubKeyHashEd25519V0::from_hash(&hash, &net).unwrap();
            assert_eq!(addr.address(), ed25519);
            let addr = AddressPubKeyHashSchnorrSecp256k1V0::from_hash(&hash, &net).unwrap();
            assert_eq!(addr.address(), schnorr);
        }
    }

    #[test]
    fn test_payment_scripts() {
        let hash = hex::decode(HASH).unwrap();
        let net = Network::mainnet();

        let (version, script) = AddressPubKeyHashEcdsaSecp256k1V0::from_hash(&hash, &net)
            .unwrap()
            .payment_script();
        assert_eq!(version, 0);
        assert_eq!(hex::encode(script), format!("76a914{}88ac", HASH));

        let (_, script) = AddressPubKeyHashEd25519V0::from_hash(&hash, &net)
            .unwrap()
            .payment_script();
        assert_eq!(hex::encode(script), format!("76a914{}8851be", HASH));

        let (_, script) = AddressPubKeyHashSchnorrSecp256k1V0::from_hash(&hash, &net)
            .unwrap()
            .payment_script();
        assert_eq!(hex::encode(script), format!("76a914{}8852be", HASH));
    }

    #[test]
    fn test_bad_hash_lengths() {
        let net = Network::mainnet();
        for len in [0usize, 19, 21, 32] {
            let hash = vec![0u8; len];
            let err = AddressPubKeyHashEcdsaSecp256k1V0::from_hash(&hash, &net).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidHashLen);
            let err = AddressPubKeyHashEd25519V0::from_hash(&hash, &net).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidHashLen);
            let err = AddressPubKeyHashSchnorrSecp256k1V0::from_hash(&hash, &net).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidHashLen);
        }
    }

    #[test]
    fn test_stake_scripts() {
        let hash = hex::decode(HASH).unwrap();
        let addr =
            AddressPubKeyHashSchnorrSecp256k1V0::from_hash(&hash, &Network::mainnet()).unwrap();
        assert_eq!(hex::encode(addr.hash160()), HASH);

        let payment = format!("76a914{}8852be", HASH);
        let cases = [
            (addr.voting_rights_script(), "ba"),
            (addr.stake_change_script(), "bd"),
            (addr.pay_vote_commitment_script(), "bb"),
            (addr.pay_revoke_commitment_script(), "bc"),
            (addr.pay_from_treasury_script(), "c3"),
        ];
        for ((version, script), tag) in cases {
            assert_eq!(version, 0);
            assert_eq!(hex::encode(script), format!("{}{}", tag, payment));
        }

        let (version, script) = addr.reward_commitment_script(100_000_000, 0x5800);
        assert_eq!(version, 0);
        assert_eq!(
            hex::encode(script),
            "6a1e2789d58cfa0957d206f025c2af056fc8a77cebb000e1f505000000000058"
        );
    }
}
