//! Ownable capability: getters shared by every contract with a single owner.

use crate::core::chain::CallSession;
use crate::core::error::T0kenError;
use crate::core::registry::GetterCommand;
use alloy_primitives::Address;
use alloy_sol_types::sol;

sol! {
    interface IOwnable {
        function owner() external view returns (address);
    }
}

/// Typed view of the ownable read surface.
pub struct Ownable<'a>(&'a CallSession<'a>);

impl<'a> Ownable<'a> {
    pub fn new(session: &'a CallSession<'a>) -> Self {
        Ownable(session)
    }

    pub fn owner(&self) -> Result<Address, T0kenError> {
        Ok(self.0.call(IOwnable::ownerCall {})?._0)
    }
}

/// Ownable getters for the contract configured under `contract_key`.
pub fn getter_commands(contract_key: &'static str) -> Vec<GetterCommand> {
    vec![GetterCommand::query(
        contract_key,
        "owner",
        "Gets the owner of the contract",
        format!("t0ken {} owner", contract_key),
        |session, _| Ok(Ownable::new(session).owner()?.into()),
    )]
}
