//! Version 0 script templates.
//!
//! Every address kind pays to one fixed template. Hash-based kinds share a
//! [`HashTemplate`], which also produces the stake-tagged variants and the
//! ticket reward commitment.

use crate::address::SigType;
use crate::hash160::HASH160_SIZE;

/// Opcodes used by the version 0 templates
pub mod opcodes {
    /// Push the next 20 bytes
    pub const OP_DATA_20: u8 = 0x14;
    /// Push the next 30 bytes
    pub const OP_DATA_30: u8 = 0x1e;
    /// Push the next 32 bytes
    pub const OP_DATA_32: u8 = 0x20;
    /// Push the next 33 bytes
    pub const OP_DATA_33: u8 = 0x21;
    /// Push the number 1
    pub const OP_1: u8 = 0x51;
    /// Push the number 2
    pub const OP_2: u8 = 0x52;
    /// Mark the output provably unspendable
    pub const OP_RETURN: u8 = 0x6a;
    /// Duplicate the top stack item
    pub const OP_DUP: u8 = 0x76;
    /// Push whether the top two items are equal
    pub const OP_EQUAL: u8 = 0x87;
    /// OP_EQUAL followed by OP_VERIFY
    pub const OP_EQUALVERIFY: u8 = 0x88;
    /// RIPEMD160(SHA256(top))
    pub const OP_HASH160: u8 = 0xa9;
    /// Check an ECDSA secp256k1 signature
    pub const OP_CHECKSIG: u8 = 0xac;
    /// Ticket purchase (voting rights) output
    pub const OP_SSTX: u8 = 0xba;
    /// Vote output
    pub const OP_SSGEN: u8 = 0xbb;
    /// Revocation output
    pub const OP_SSRTX: u8 = 0xbc;
    /// Ticket purchase change output
    pub const OP_SSTXCHANGE: u8 = 0xbd;
    /// Check a signature of the algorithm selected by the preceding push
    pub const OP_CHECKSIGALT: u8 = 0xbe;
    /// Treasury spend output
    pub const OP_TGEN: u8 = 0xc3;
}

use opcodes::*;

/// Length of a version 0 reward commitment script
pub const REWARD_COMMITMENT_SCRIPT_LEN: usize = 32;

/// Flag set in the committed amount when the reward pays to a script hash
const REWARD_SCRIPT_HASH_FLAG: u64 = 1 << 63;

/// Signature check opcodes that end a payment script for the algorithm.
pub fn checksig_suffix(sig_type: SigType) -> &'static [u8] {
    match sig_type {
        SigType::EcdsaSecp256k1 => &[OP_CHECKSIG],
        SigType::Ed25519 => &[OP_1, OP_CHECKSIGALT],
        SigType::SchnorrSecp256k1 => &[OP_2, OP_CHECKSIGALT],
    }
}

/// `<push pubkey> <checksig>` for the algorithm.
///
/// `pubkey` is the 33-byte compressed secp256k1 key or the 32-byte Ed25519
/// key, so the push length always fits a single direct-push opcode.
pub fn pay_to_pubkey_script(sig_type: SigType, pubkey: &[u8]) -> Vec<u8> {
    debug_assert!(pubkey.len() == 32 || pubkey.len() == 33);
    let suffix = checksig_suffix(sig_type);
    let mut script = Vec::with_capacity(1 + pubkey.len() + suffix.len());
    script.push(pubkey.len() as u8);
    script.extend_from_slice(pubkey);
    script.extend_from_slice(suffix);
    script
}

/// Hash commitment behind pay-to-pubkey-hash and pay-to-script-hash scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashTemplate {
    /// `OP_DUP OP_HASH160 <hash> OP_EQUALVERIFY <checksig>`
    PubKeyHash {
        /// Algorithm selecting the checksig suffix
        sig_type: SigType,
        /// Hash160 of the serialized public key
        hash: [u8; HASH160_SIZE],
    },
    /// `OP_HASH160 <hash> OP_EQUAL`
    ScriptHash {
        /// Hash160 of the redeem script
        hash: [u8; HASH160_SIZE],
    },
}

impl HashTemplate {
    /// The committed hash
    pub fn hash(&self) -> &[u8; HASH160_SIZE] {
        match self {
            HashTemplate::PubKeyHash { hash, .. } | HashTemplate::ScriptHash { hash } => hash,
        }
    }

    fn write_payment_script(&self, script: &mut Vec<u8>) {
        match self {
            HashTemplate::PubKeyHash { sig_type, hash } => {
                script.extend_from_slice(&[OP_DUP, OP_HASH160, OP_DATA_20]);
                script.extend_from_slice(hash);
                script.push(OP_EQUALVERIFY);
                script.extend_from_slice(checksig_suffix(*sig_type));
            }
            HashTemplate::ScriptHash { hash } => {
                script.extend_from_slice(&[OP_HASH160, OP_DATA_20]);
                script.extend_from_slice(hash);
                script.push(OP_EQUAL);
            }
        }
    }

    /// Plain payment script
    pub fn payment_script(&self) -> Vec<u8> {
        let mut script = Vec::with_capacity(26);
        self.write_payment_script(&mut script);
        script
    }

    /// Payment script prefixed with a stake opcode such as [`OP_SSTX`]
    pub fn stake_tagged_script(&self, tag: u8) -> Vec<u8> {
        let mut script = Vec::with_capacity(27);
        script.push(tag);
        self.write_payment_script(&mut script);
        script
    }

    /// `OP_RETURN OP_DATA_30 <hash> <amount LE u64> <fee limits LE u16>`
    ///
    /// The high bit of the amount flags a script hash commitment.
    pub fn reward_commitment_script(&self, amount: i64, fee_limits: u16) -> Vec<u8> {
        let mut amount = amount as u64;
        if let HashTemplate::ScriptHash { .. } = self {
            amount |= REWARD_SCRIPT_HASH_FLAG;
        }

        let mut script = Vec::with_capacity(REWARD_COMMITMENT_SCRIPT_LEN);
        script.extend_from_slice(&[OP_RETURN, OP_DATA_30]);
        script.extend_from_slice(self.hash());
        script.extend_from_slice(&amount.to_le_bytes());
        script.extend_from_slice(&fee_limits.to_le_bytes());
        script
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash(s: &str) -> [u8; 20] {
        hex::decode(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn test_pay_to_pubkey_templates() {
        let pk = hex::decode("028f53838b7639563f27c94845549a41e5146bcd52e7fef0ea6da143a02b0fe2ed")
            .unwrap();
        assert_eq!(
            hex::encode(pay_to_pubkey_script(SigType::EcdsaSecp256k1, &pk)),
            "21028f53838b7639563f27c94845549a41e5146bcd52e7fef0ea6da143a02b0fe2edac"
        );
        assert_eq!(
            hex::encode(pay_to_pubkey_script(SigType::SchnorrSecp256k1, &pk)),
            "21028f53838b7639563f27c94845549a41e5146bcd52e7fef0ea6da143a02b0fe2ed52be"
        );

        let ed = hex::decode("cecc1507dc1ddd7295951c290888f095adb9044d1b73d696e6df065d683bd4fc")
            .unwrap();
        assert_eq!(
            hex::encode(pay_to_pubkey_script(SigType::Ed25519, &ed)),
            "20cecc1507dc1ddd7295951c290888f095adb9044d1b73d696e6df065d683bd4fc51be"
        );
    }

    #[test]
    fn test_hash_templates() {
        let h = hash("2789d58cfa0957d206f025c2af056fc8a77cebb0");
        let pkh = HashTemplate::PubKeyHash {
            sig_type: SigType::EcdsaSecp256k1,
            hash: h,
        };
        assert_eq!(
            hex::encode(pkh.payment_script()),
            "76a9142789d58cfa0957d206f025c2af056fc8a77cebb088ac"
        );
        assert_eq!(
            hex::encode(pkh.stake_tagged_script(OP_SSTX)),
            "ba76a9142789d58cfa0957d206f025c2af056fc8a77cebb088ac"
        );

        let sh = HashTemplate::ScriptHash { hash: h };
        assert_eq!(
            hex::encode(sh.payment_script()),
            "a9142789d58cfa0957d206f025c2af056fc8a77cebb087"
        );
        assert_eq!(
            hex::encode(sh.stake_tagged_script(OP_TGEN)),
            "c3a9142789d58cfa0957d206f025c2af056fc8a77cebb087"
        );
    }

    #[test]
    fn test_reward_commitment_layout() {
        let h = hash("f0b4e85100aee1a996f22915eb3c3f764d53779a");
        let sh = HashTemplate::ScriptHash { hash: h };
        let script = sh.reward_commitment_script(100_000_000, 0x5800);
        assert_eq!(script.len(), REWARD_COMMITMENT_SCRIPT_LEN);
        assert_eq!(
            hex::encode(&script),
            "6a1ef0b4e85100aee1a996f22915eb3c3f764d53779a00e1f505000000800058"
        );

        let pkh = HashTemplate::PubKeyHash {
            sig_type: SigType::Ed25519,
            hash: h,
        };
        let script = pkh.reward_commitment_script(100_000_000, 0x5800);
        assert_eq!(
            hex::encode(&script),
            "6a1ef0b4e85100aee1a996f22915eb3c3f764d53779a00e1f505000000000058"
        );
    }
}
