//! Contract call encoding and the values getters print.
//!
//! Calls are typed `alloy_sol_types::SolCall` structs generated by `sol!` in
//! each plugin. `Token` is the decoded value a getter hands back for printing.

use crate::core::error::T0kenError;
use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use std::fmt;

/// A decoded getter result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Address(Address),
    Uint(U256),
    Bool(bool),
    String(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Address(a) => write!(f, "{}", a),
            Token::Uint(n) => write!(f, "{}", n),
            Token::Bool(b) => write!(f, "{}", b),
            Token::String(s) => f.write_str(s),
        }
    }
}

impl From<Address> for Token {
    fn from(a: Address) -> Self {
        Token::Address(a)
    }
}

impl From<U256> for Token {
    fn from(n: U256) -> Self {
        Token::Uint(n)
    }
}

impl From<bool> for Token {
    fn from(b: bool) -> Self {
        Token::Bool(b)
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token::String(s)
    }
}

/// Parse a non-negative decimal integer that fits in 256 bits.
pub fn parse_uint(s: &str) -> Result<U256, T0kenError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(T0kenError::ArgumentError(format!(
            "'{}' is not a non-negative integer",
            s
        )));
    }
    U256::from_str_radix(s, 10)
        .map_err(|e| T0kenError::ArgumentError(format!("'{}': {}", s, e)))
}

/// Decode the return data of `C`, strictly.
pub fn decode_returns<C: SolCall>(data: &[u8]) -> Result<C::Return, T0kenError> {
    if data.is_empty() {
        return Err(T0kenError::ContractCallError(format!(
            "{}: empty return data (no contract code at the target address?)",
            C::SIGNATURE
        )));
    }
    C::abi_decode_returns(data, true)
        .map_err(|e| T0kenError::ContractCallError(format!("{}: {}", C::SIGNATURE, e)))
}
