//! JSON-RPC 2.0 transport to an Ethereum-compatible node.
//!
//! # Envelopes
//!
//! Every request carries:
//! - `jsonrpc`: always `"2.0"`
//! - `id`: a fresh ULID for correlation in node logs
//! - `method` / `params`
//!
//! Responses carry either `result` or an `error` object. Error code `3`
//! (and messages mentioning a revert) are contract-call failures; everything
//! else is a network error.

use crate::core::address::to_rpc_hex;
use crate::core::chain::{ChainConnection, Connect};
use crate::core::config::Config;
use crate::core::error::T0kenError;
use alloy_primitives::Address;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// JSON-RPC request envelope
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    /// Request ID for correlation
    #[serde(default = "default_request_id")]
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub fn default_request_id() -> String {
    ulid::Ulid::new().to_string()
}

impl RpcRequest {
    pub fn new(method: &str, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: default_request_id(),
            method: method.to_string(),
            params,
        }
    }
}

/// JSON-RPC response envelope
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

/// JSON-RPC error object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl RpcError {
    pub fn is_revert(&self) -> bool {
        self.code == 3 || self.message.to_ascii_lowercase().contains("revert")
    }
}

impl From<RpcError> for T0kenError {
    fn from(err: RpcError) -> Self {
        if err.is_revert() {
            let detail = match &err.data {
                Some(data) => format!("{} ({})", err.message, data),
                None => err.message,
            };
            T0kenError::ContractCallError(detail)
        } else {
            T0kenError::NetworkError(format!("{} (code {})", err.message, err.code))
        }
    }
}

impl RpcResponse {
    pub fn into_result<T: DeserializeOwned>(self) -> Result<T, T0kenError> {
        if let Some(err) = self.error {
            return Err(err.into());
        }
        let result = self.result.ok_or_else(|| {
            T0kenError::NetworkError("response carried neither result nor error".into())
        })?;
        Ok(serde_json::from_value(result)?)
    }
}

/// Parse a hex quantity such as `0x1a`.
pub fn parse_quantity(s: &str) -> Result<u64, T0kenError> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| T0kenError::NetworkError(format!("quantity '{}' is not 0x-prefixed", s)))?;
    if digits.is_empty() {
        return Err(T0kenError::NetworkError("empty quantity".into()));
    }
    u64::from_str_radix(digits, 16)
        .map_err(|e| T0kenError::NetworkError(format!("quantity '{}': {}", s, e)))
}

/// Parse hex data such as `0x` or `0x00ff`.
pub fn parse_data(s: &str) -> Result<Vec<u8>, T0kenError> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| T0kenError::NetworkError(format!("data '{}' is not 0x-prefixed", s)))?;
    hex::decode(digits).map_err(|e| T0kenError::NetworkError(format!("data: {}", e)))
}

/// Blocking HTTP connection to a node.
pub struct HttpConnection {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpConnection {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, T0kenError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            url: url.to_string(),
            client,
        })
    }

    pub fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, T0kenError> {
        let request = RpcRequest::new(method, params);
        tracing::debug!(url = %self.url, method, id = %request.id, "json-rpc request");

        let response: RpcResponse = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .map_err(|e| T0kenError::NetworkError(format!("{}: {}", self.url, e)))?
            .error_for_status()?
            .json()?;
        tracing::trace!(?response, "json-rpc response");
        response.into_result()
    }
}

impl ChainConnection for HttpConnection {
    fn pending_nonce_at(&self, account: Address) -> Result<u64, T0kenError> {
        let count: String = self.request(
            "eth_getTransactionCount",
            serde_json::json!([to_rpc_hex(&account), "pending"]),
        )?;
        parse_quantity(&count)
    }

    fn call(&self, to: Address, data: &[u8]) -> Result<Vec<u8>, T0kenError> {
        let output: String = self.request(
            "eth_call",
            serde_json::json!([
                { "to": to_rpc_hex(&to), "data": format!("0x{}", hex::encode(data)) },
                "latest"
            ]),
        )?;
        parse_data(&output)
    }
}

/// Connects over HTTP to the configured `rpc_url`.
pub struct HttpConnector;

impl Connect for HttpConnector {
    fn connect(&self, config: &Config) -> Result<Box<dyn ChainConnection>, T0kenError> {
        tracing::info!(url = config.rpc_url(), "connecting");
        Ok(Box::new(HttpConnection::new(
            config.rpc_url(),
            config.rpc_timeout(),
        )?))
    }
}
