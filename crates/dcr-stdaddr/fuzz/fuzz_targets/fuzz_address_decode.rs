//! Fuzz test for address decoding
//!
//! Ensures both decoders handle malformed input gracefully

#![no_main]

use dcr_params::Network;
use dcr_stdaddr::{decode_address, decode_address_v0};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for net in [Network::mainnet(), Network::testnet(), Network::regnet()] {
            // Should never panic, and a successful decode must re-encode to the input
            if let Ok(addr) = decode_address(s, &net) {
                assert_eq!(addr.address(), s);
            }
            let _ = decode_address_v0(s, &net);
        }
    }
});
