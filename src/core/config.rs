//! Operator configuration.
//!
//! Loaded from TOML, by default `~/.t0ken/config.toml`. Command-line overrides
//! (`--rpc-url`, `--from`) are folded in by [`Config::apply_overrides`].

use crate::core::address::parse_address;
use crate::core::error::T0kenError;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON-RPC endpoint of the node.
    pub rpc_url: Option<String>,
    /// Signing account, hex or alias.
    pub signer: Option<String>,
    /// Directory of geth-style keystore files named `<alias>.json`.
    pub keystore_dir: Option<PathBuf>,
    pub rpc_timeout_secs: Option<u64>,
    /// Contract addresses keyed by contract config key (`token`, `broker`).
    pub contracts: BTreeMap<String, String>,
    /// Local address book.
    pub aliases: BTreeMap<String, String>,
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".t0ken").join("config.toml"))
    }

    /// Load `explicit` if given (must exist), else the default path (may be absent).
    pub fn load(explicit: Option<&Path>) -> Result<Self, T0kenError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    tracing::debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, T0kenError> {
        let content = fs::read_to_string(path).map_err(|e| {
            T0kenError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "loading config");
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, T0kenError> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_overrides(&mut self, rpc_url: Option<&str>, signer: Option<&str>) {
        if let Some(url) = rpc_url {
            self.rpc_url = Some(url.to_string());
        }
        if let Some(from) = signer {
            self.signer = Some(from.to_string());
        }
    }

    pub fn rpc_url(&self) -> &str {
        self.rpc_url.as_deref().unwrap_or(DEFAULT_RPC_URL)
    }

    pub fn rpc_timeout(&self) -> Duration {
        Duration::from_secs(self.rpc_timeout_secs.unwrap_or(DEFAULT_RPC_TIMEOUT_SECS))
    }

    /// Configured default address for a contract key, if any.
    pub fn contract_address(&self, key: &str) -> Result<Option<Address>, T0kenError> {
        match self.contracts.get(key).map(|v| v.trim()) {
            None | Some("") => Ok(None),
            Some(value) => parse_address(value).map(Some).map_err(|_| {
                T0kenError::ConfigError(format!(
                    "contracts.{} = '{}' is not a valid hex address",
                    key, value
                ))
            }),
        }
    }
}
