//! Address text handling on top of `alloy_primitives::Address`.
//!
//! Input accepts 40 hex digits with or without `0x`, in any case. Output uses
//! `Address`'s `Display`, which is the EIP-55 checksum form.

use crate::core::error::T0kenError;
use alloy_primitives::Address;
use regex::Regex;
use std::sync::OnceLock;

fn hex_address_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(0x)?[0-9a-fA-F]{40}$").unwrap())
}

/// Whether `s` is a 40-digit hex address, optionally `0x`-prefixed.
pub fn is_hex_address(s: &str) -> bool {
    hex_address_pattern().is_match(s)
}

/// Parse a hex address. Checksum case is not enforced.
pub fn parse_address(s: &str) -> Result<Address, T0kenError> {
    if !is_hex_address(s) {
        return Err(T0kenError::ArgumentError(format!(
            "'{}' is not a valid hex address",
            s
        )));
    }
    s.parse::<Address>()
        .map_err(|e| T0kenError::ArgumentError(format!("'{}': {}", s, e)))
}

/// Lowercase `0x`-prefixed hex, the form JSON-RPC nodes expect.
pub fn to_rpc_hex(address: &Address) -> String {
    format!("0x{}", hex::encode(address.as_slice()))
}
