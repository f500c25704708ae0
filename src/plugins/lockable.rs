//! Lockable capability: pause state shared by lockable contracts.

use crate::core::chain::CallSession;
use crate::core::error::T0kenError;
use crate::core::registry::GetterCommand;
use alloy_sol_types::sol;

sol! {
    interface ILockable {
        function isLocked() external view returns (bool);
    }
}

pub struct Lockable<'a>(&'a CallSession<'a>);

impl<'a> Lockable<'a> {
    pub fn new(session: &'a CallSession<'a>) -> Self {
        Lockable(session)
    }

    pub fn is_locked(&self) -> Result<bool, T0kenError> {
        Ok(self.0.call(ILockable::isLockedCall {})?._0)
    }
}

pub fn getter_commands(contract_key: &'static str) -> Vec<GetterCommand> {
    vec![GetterCommand::query(
        contract_key,
        "isLocked",
        "Checks if the contract is locked",
        format!("t0ken {} isLocked", contract_key),
        |session, _| Ok(Lockable::new(session).is_locked()?.into()),
    )]
}
