//! # Identifier Syntax
//!
//! Proposals reference markets, assets and parties by hex-encoded identifiers.
//! These helpers only check syntax; whether the referenced entity exists is
//! decided by the ledger, not here.
//!
//! | Kind | Shape |
//! |------|-------|
//! | Entity id (market, asset) | 64 hex characters (32 bytes) |
//! | Party public key | 64 hex characters (32 bytes) |
//! | Ethereum address | `0x` followed by 40 hex characters |

/// Byte length of entity ids and party public keys.
pub const ID_BYTES: usize = 32;

/// Byte length of an Ethereum address.
pub const ETH_ADDRESS_BYTES: usize = 20;

fn is_hex_of_len(value: &str, bytes: usize) -> bool {
    value.len() == bytes * 2 && hex::decode(value).is_ok()
}

/// True when `value` is a 64 character hex entity id.
pub fn is_valid_id(value: &str) -> bool {
    is_hex_of_len(value, ID_BYTES)
}

/// True when `value` is a 64 character hex party public key.
pub fn is_valid_public_key(value: &str) -> bool {
    is_hex_of_len(value, ID_BYTES)
}

/// True when `value` is `0x` followed by 40 hex characters.
pub fn is_valid_ethereum_address(value: &str) -> bool {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .is_some_and(|rest| is_hex_of_len(rest, ETH_ADDRESS_BYTES))
}
