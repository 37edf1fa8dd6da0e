//! Version 0 pay-to-script-hash addresses

use super::pubkey_hash::hash_from_slice;
use crate::base58;
use crate::hash160::{hash160, HASH160_SIZE};
use crate::params::AddressParams;
use crate::script::HashTemplate;
use crate::stake::{Hash160, StakeAddress};
use crate::{Result, SCRIPT_VERSION_V0};
use std::fmt;

/// Pay-to-script-hash address.
///
/// The script is `OP_HASH160 <hash> OP_EQUAL` and is spent by providing a
/// redeem script hashing to `<hash>` along with data satisfying it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressScriptHashV0 {
    script_hash_id: [u8; 2],
    hash: [u8; HASH160_SIZE],
}

impl AddressScriptHashV0 {
    /// Create from a redeem script. The script itself is not validated.
    pub fn from_script(redeem_script: &[u8], params: &dyn AddressParams) -> Self {
        Self {
            script_hash_id: params.addr_id_script_hash_v0(),
            hash: hash160(redeem_script),
        }
    }

    /// Create from the 20-byte hash160 of a redeem script
    pub fn from_hash(script_hash: &[u8], params: &dyn AddressParams) -> Result<Self> {
        Ok(Self {
            script_hash_id: params.addr_id_script_hash_v0(),
            hash: hash_from_slice(script_hash, "script hash")?,
        })
    }

    /// Base58 string form
    pub fn address(&self) -> String {
        base58::check_encode(&self.hash, self.script_hash_id)
    }

    /// Script version and script that pays to this address
    pub fn payment_script(&self) -> (u16, Vec<u8>) {
        (SCRIPT_VERSION_V0, self.hash_template().payment_script())
    }
}

impl Hash160 for AddressScriptHashV0 {
    fn hash160(&self) -> &[u8; HASH160_SIZE] {
        &self.hash
    }
}

impl StakeAddress for AddressScriptHashV0 {
    fn hash_template(&self) -> HashTemplate {
        HashTemplate::ScriptHash { hash: self.hash }
    }
}

impl fmt::Display for AddressScriptHashV0 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address())
    }
}
