//! BrokerDealer registry getters.

use crate::core::chain::CallSession;
use crate::core::error::T0kenError;
use crate::core::registry::{GetterCommand, Registry, RegistryBuilder};
use crate::plugins::{lockable, ownable};
use alloy_primitives::Address;
use alloy_sol_types::sol;
use std::sync::OnceLock;

pub const COMMAND: &str = "broker";
pub const CONTRACT_KEY: &str = "broker";
pub const ARTIFACT: &str = "BrokerDealerRegistry";

sol! {
    interface IBrokerDealerRegistry {
        function store() external view returns (address);
    }
}

pub struct BrokerDealerRegistry<'a>(&'a CallSession<'a>);

impl<'a> BrokerDealerRegistry<'a> {
    pub fn new(session: &'a CallSession<'a>) -> Self {
        BrokerDealerRegistry(session)
    }

    /// Address of the backing Storage contract.
    pub fn store(&self) -> Result<Address, T0kenError> {
        Ok(self.0.call(IBrokerDealerRegistry::storeCall {})?._0)
    }
}

fn getter_commands() -> Vec<GetterCommand> {
    vec![GetterCommand::query(
        CONTRACT_KEY,
        "storage",
        "Gets the Storage contract address",
        "t0ken broker storage",
        |s, _| Ok(BrokerDealerRegistry::new(s).store()?.into()),
    )]
}

pub fn build_registry() -> Registry {
    RegistryBuilder::new(
        COMMAND,
        "BrokerDealer registry getters",
        CONTRACT_KEY,
        ARTIFACT,
    )
    .getters(getter_commands())
    .capability(ownable::getter_commands)
    .capability(lockable::getter_commands)
    .build()
}

pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(build_registry)
}
