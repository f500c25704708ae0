//! Address resolution: literal hex, config aliases, then keystore files.

use crate::core::address::{is_hex_address, parse_address};
use crate::core::config::Config;
use crate::core::error::T0kenError;
use alloy_primitives::Address;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

pub trait AddressResolver {
    /// Look up a local alias. `None` when the alias is unknown.
    fn resolve_alias(&self, alias: &str) -> Option<Address>;
}

/// Resolve `token` as a hex address or, failing that, a local alias.
pub fn resolve_address(resolver: &dyn AddressResolver, token: &str) -> Result<Address, T0kenError> {
    if is_hex_address(token) {
        return parse_address(token);
    }
    match resolver.resolve_alias(token) {
        Some(address) => {
            tracing::debug!(alias = token, %address, "resolved alias");
            Ok(address)
        }
        None => Err(T0kenError::ResolutionError(format!(
            "'{}' is neither a hex address nor a known alias",
            token
        ))),
    }
}

#[derive(Deserialize)]
struct KeystoreFile {
    address: String,
}

/// Aliases from `[aliases]` plus `<keystore_dir>/<alias>.json` files.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    aliases: BTreeMap<String, Address>,
    keystore_dir: Option<PathBuf>,
}

impl AddressBook {
    pub fn from_config(config: &Config) -> Result<Self, T0kenError> {
        let mut aliases = BTreeMap::new();
        for (alias, value) in &config.aliases {
            let address = parse_address(value).map_err(|_| {
                T0kenError::ConfigError(format!(
                    "aliases.{} = '{}' is not a valid hex address",
                    alias, value
                ))
            })?;
            aliases.insert(alias.clone(), address);
        }
        Ok(Self {
            aliases,
            keystore_dir: config.keystore_dir.clone(),
        })
    }

    fn keystore_alias(&self, alias: &str) -> Option<Address> {
        let dir = self.keystore_dir.as_ref()?;
        if alias.contains(['/', '\\']) {
            return None;
        }
        let path = dir.join(format!("{}.json", alias));
        let content = fs::read_to_string(&path).ok()?;
        match serde_json::from_str::<KeystoreFile>(&content) {
            Ok(file) => parse_address(&file.address).ok(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable keystore file");
                None
            }
        }
    }
}

impl AddressResolver for AddressBook {
    fn resolve_alias(&self, alias: &str) -> Option<Address> {
        self.aliases
            .get(alias)
            .copied()
            .or_else(|| self.keystore_alias(alias))
    }
}
