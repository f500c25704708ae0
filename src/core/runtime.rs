//! Per-invocation state: effective config, the address book and the chain
//! connection. The address book and connection are built on first use, so
//! commands that need neither (`abi`, `bin`) never validate aliases or dial
//! the node.

use crate::core::address::{is_hex_address, parse_address};
use crate::core::chain::{ChainConnection, Connect};
use crate::core::config::Config;
use crate::core::error::T0kenError;
use crate::core::resolve::{self, AddressBook};
use alloy_primitives::Address;
use std::cell::OnceCell;

pub struct Runtime<'a> {
    config: Config,
    book: OnceCell<AddressBook>,
    connector: &'a dyn Connect,
    connection: Option<Box<dyn ChainConnection>>,
}

impl<'a> Runtime<'a> {
    pub fn new(config: Config, connector: &'a dyn Connect) -> Self {
        Self {
            config,
            book: OnceCell::new(),
            connector,
            connection: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Aliases from config and keystore, validated on first use.
    pub fn address_book(&self) -> Result<&AddressBook, T0kenError> {
        if let Some(book) = self.book.get() {
            return Ok(book);
        }
        let book = AddressBook::from_config(&self.config)?;
        Ok(self.book.get_or_init(|| book))
    }

    /// Hex address or alias, resolved against the address book.
    pub fn resolve(&self, token: &str) -> Result<Address, T0kenError> {
        if is_hex_address(token) {
            return parse_address(token);
        }
        resolve::resolve_address(self.address_book()?, token)
    }

    /// The signing account from `--from` or `signer` in config.
    pub fn signer(&self) -> Result<Address, T0kenError> {
        let token = self.config.signer.as_deref().ok_or_else(|| {
            T0kenError::ResolutionError(
                "no signing account: pass --from or set signer in the config".into(),
            )
        })?;
        self.resolve(token)
    }

    /// Open the connection on first use.
    pub fn connection(&mut self) -> Result<&dyn ChainConnection, T0kenError> {
        if self.connection.is_none() {
            self.connection = Some(self.connector.connect(&self.config)?);
        }
        self.connection
            .as_deref()
            .ok_or_else(|| T0kenError::NetworkError("connection unavailable".into()))
    }
}
