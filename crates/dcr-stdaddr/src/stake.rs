//! Capabilities carried only by hash-based addresses.
//!
//! Pay-to-pubkey-hash and pay-to-script-hash addresses expose their hash and
//! can be used in stake transactions. Raw pay-to-pubkey addresses implement
//! neither trait; [`crate::Address::as_stake_address`] and
//! [`crate::Address::hash160`] return `None` for them.

use crate::hash160::HASH160_SIZE;
use crate::script::opcodes::{OP_SSGEN, OP_SSRTX, OP_SSTX, OP_SSTXCHANGE, OP_TGEN};
use crate::script::HashTemplate;
use crate::SCRIPT_VERSION_V0;

/// Access to the 20-byte hash an address commits to.
pub trait Hash160 {
    /// The RIPEMD160(SHA256(x)) of the public key or redeem script
    fn hash160(&self) -> &[u8; HASH160_SIZE];
}

/// Stake script generation for addresses that can be used in tickets,
/// votes, revocations and treasury spends.
///
/// Every script is returned together with its script version.
pub trait StakeAddress: Hash160 {
    /// Hash commitment the stake scripts are built from
    fn hash_template(&self) -> HashTemplate;

    /// Script for the voting rights output of a ticket purchase
    fn voting_rights_script(&self) -> (u16, Vec<u8>) {
        (SCRIPT_VERSION_V0, self.hash_template().stake_tagged_script(OP_SSTX))
    }

    /// Script committing a ticket to pay `amount` atoms of vote or revoke
    /// rewards to this address, limited by the `fee_limits` bitfield
    fn reward_commitment_script(&self, amount: i64, fee_limits: u16) -> (u16, Vec<u8>) {
        (
            SCRIPT_VERSION_V0,
            self.hash_template().reward_commitment_script(amount, fee_limits),
        )
    }

    /// Script for the change output of a ticket purchase
    fn stake_change_script(&self) -> (u16, Vec<u8>) {
        (
            SCRIPT_VERSION_V0,
            self.hash_template().stake_tagged_script(OP_SSTXCHANGE),
        )
    }

    /// Script paying a vote reward committed to by a ticket
    fn pay_vote_commitment_script(&self) -> (u16, Vec<u8>) {
        (SCRIPT_VERSION_V0, self.hash_template().stake_tagged_script(OP_SSGEN))
    }

    /// Script paying a revocation refund committed to by a ticket
    fn pay_revoke_commitment_script(&self) -> (u16, Vec<u8>) {
        (SCRIPT_VERSION_V0, self.hash_template().stake_tagged_script(OP_SSRTX))
    }

    /// Script paying funds out of the treasury
    fn pay_from_treasury_script(&self) -> (u16, Vec<u8>) {
        (SCRIPT_VERSION_V0, self.hash_template().stake_tagged_script(OP_TGEN))
    }
}
