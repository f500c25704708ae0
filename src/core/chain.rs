//! Seams to the blockchain node.
//!
//! `ChainConnection` is everything the CLI needs from a node; `CallSession`
//! binds a connection to one contract address for read-only getters.

use crate::core::abi;
use crate::core::config::Config;
use crate::core::error::T0kenError;
use alloy_primitives::Address;
use alloy_sol_types::SolCall;

pub trait ChainConnection {
    /// Next sequence number for `account`, counting pending transactions.
    fn pending_nonce_at(&self, account: Address) -> Result<u64, T0kenError>;

    /// Read-only call against the latest block. Returns raw return data.
    fn call(&self, to: Address, data: &[u8]) -> Result<Vec<u8>, T0kenError>;
}

impl<T: ChainConnection + ?Sized> ChainConnection for &T {
    fn pending_nonce_at(&self, account: Address) -> Result<u64, T0kenError> {
        (**self).pending_nonce_at(account)
    }

    fn call(&self, to: Address, data: &[u8]) -> Result<Vec<u8>, T0kenError> {
        (**self).call(to, data)
    }
}

impl<T: ChainConnection + ?Sized> ChainConnection for Box<T> {
    fn pending_nonce_at(&self, account: Address) -> Result<u64, T0kenError> {
        (**self).pending_nonce_at(account)
    }

    fn call(&self, to: Address, data: &[u8]) -> Result<Vec<u8>, T0kenError> {
        (**self).call(to, data)
    }
}

/// Opens a connection from the effective configuration.
pub trait Connect {
    fn connect(&self, config: &Config) -> Result<Box<dyn ChainConnection>, T0kenError>;
}

impl<F> Connect for F
where
    F: Fn(&Config) -> Result<Box<dyn ChainConnection>, T0kenError>,
{
    fn connect(&self, config: &Config) -> Result<Box<dyn ChainConnection>, T0kenError> {
        self(config)
    }
}

/// A connection bound to one deployed contract.
pub struct CallSession<'a> {
    conn: &'a dyn ChainConnection,
    address: Address,
}

impl<'a> CallSession<'a> {
    pub fn new(conn: &'a dyn ChainConnection, address: Address) -> Self {
        Self { conn, address }
    }

    /// Run `call` read-only against the bound contract and decode its return.
    pub fn call<C: SolCall>(&self, call: C) -> Result<C::Return, T0kenError> {
        let data = call.abi_encode();
        tracing::debug!(contract = %self.address, signature = C::SIGNATURE, "eth_call");
        let output = self.conn.call(self.address, &data)?;
        abi::decode_returns::<C>(&output)
    }
}
