//! Core modules: codecs, configuration, the chain seam, nonce allocation and
//! the getter registry machinery.

pub mod abi;
pub mod address;
pub mod artifacts;
pub mod chain;
pub mod config;
pub mod error;
pub mod nonce;
pub mod registry;
pub mod resolve;
pub mod rpc;
pub mod runtime;
