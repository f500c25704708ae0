//! Command surfaces: per-contract getter registries, the capability modules
//! they share, and nonce utilities.

pub mod broker;
pub mod lockable;
pub mod nonce;
pub mod ownable;
pub mod token;

use crate::core::registry::Registry;

/// Every contract registry mounted under the root command.
pub fn registries() -> [&'static Registry; 2] {
    [token::registry(), broker::registry()]
}
