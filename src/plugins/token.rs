//! T0ken security token getters.

use crate::core::chain::CallSession;
use crate::core::error::T0kenError;
use crate::core::registry::{ArgKind, GetterCommand, Registry, RegistryBuilder};
use crate::plugins::{lockable, ownable};
use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;
use std::sync::OnceLock;

pub const COMMAND: &str = "token";
pub const CONTRACT_KEY: &str = "token";
pub const ARTIFACT: &str = "T0ken";

sol! {
    interface IT0ken {
        function allowance(address owner, address spender) external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function cancellations(address account) external view returns (address);
        function compliance() external view returns (address);
        // uint8 on chain; read as a full word and range-checked.
        function decimals() external view returns (uint256);
        function getSuperseded(address account) external view returns (address);
        function holderAt(uint256 index) external view returns (address);
        function isHolder(address account) external view returns (bool);
        function isSuperseded(address account) external view returns (bool);
        function issuer() external view returns (address);
        function issuingFinished() external view returns (bool);
        function name() external view returns (string);
        function shareholders() external view returns (uint256);
        function symbol() external view returns (string);
        function totalSupply() external view returns (uint256);
    }
}

/// Typed read surface of the T0ken contract.
pub struct T0ken<'a>(&'a CallSession<'a>);

impl<'a> T0ken<'a> {
    pub fn new(session: &'a CallSession<'a>) -> Self {
        T0ken(session)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> Result<U256, T0kenError> {
        Ok(self.0.call(IT0ken::allowanceCall { owner, spender })?._0)
    }

    pub fn balance_of(&self, account: Address) -> Result<U256, T0kenError> {
        Ok(self.0.call(IT0ken::balanceOfCall { account })?._0)
    }

    pub fn cancellations(&self, account: Address) -> Result<Address, T0kenError> {
        Ok(self.0.call(IT0ken::cancellationsCall { account })?._0)
    }

    pub fn compliance(&self) -> Result<Address, T0kenError> {
        Ok(self.0.call(IT0ken::complianceCall {})?._0)
    }

    pub fn decimals(&self) -> Result<U256, T0kenError> {
        let value = self.0.call(IT0ken::decimalsCall {})?._0;
        if value > U256::from(u8::MAX) {
            return Err(T0kenError::ContractCallError(format!(
                "decimals() returned {}, which does not fit in uint8",
                value
            )));
        }
        Ok(value)
    }

    pub fn get_superseded(&self, account: Address) -> Result<Address, T0kenError> {
        Ok(self.0.call(IT0ken::getSupersededCall { account })?._0)
    }

    pub fn holder_at(&self, index: U256) -> Result<Address, T0kenError> {
        Ok(self.0.call(IT0ken::holderAtCall { index })?._0)
    }

    pub fn is_holder(&self, account: Address) -> Result<bool, T0kenError> {
        Ok(self.0.call(IT0ken::isHolderCall { account })?._0)
    }

    pub fn is_superseded(&self, account: Address) -> Result<bool, T0kenError> {
        Ok(self.0.call(IT0ken::isSupersededCall { account })?._0)
    }

    pub fn issuer(&self) -> Result<Address, T0kenError> {
        Ok(self.0.call(IT0ken::issuerCall {})?._0)
    }

    pub fn issuing_finished(&self) -> Result<bool, T0kenError> {
        Ok(self.0.call(IT0ken::issuingFinishedCall {})?._0)
    }

    pub fn name(&self) -> Result<String, T0kenError> {
        Ok(self.0.call(IT0ken::nameCall {})?._0)
    }

    pub fn shareholders(&self) -> Result<U256, T0kenError> {
        Ok(self.0.call(IT0ken::shareholdersCall {})?._0)
    }

    pub fn symbol(&self) -> Result<String, T0kenError> {
        Ok(self.0.call(IT0ken::symbolCall {})?._0)
    }

    pub fn total_supply(&self) -> Result<U256, T0kenError> {
        Ok(self.0.call(IT0ken::totalSupplyCall {})?._0)
    }
}

const EXAMPLE_HOLDER: &str = "0xf01ff29dcbee147e9ca151a281bfdf136f66a45b";
const EXAMPLE_SPENDER: &str = "0xa01a0a93716633058d69a28fbd472fd40e7c6b79";

fn getter_commands() -> Vec<GetterCommand> {
    let key = CONTRACT_KEY;
    vec![
        GetterCommand::query(
            key,
            "allowance",
            "Gets the amount of tokens the <owner> has approved the <spender> to transfer",
            format!("t0ken token allowance {} {}", EXAMPLE_HOLDER, EXAMPLE_SPENDER),
            |s, args| Ok(T0ken::new(s).allowance(args.address(0)?, args.address(1)?)?.into()),
        )
        .arg("owner", ArgKind::Address)
        .arg("spender", ArgKind::Address),
        GetterCommand::query(
            key,
            "balanceOf",
            "Gets the balance of the given <account>",
            format!("t0ken token balanceOf {}", EXAMPLE_HOLDER),
            |s, args| Ok(T0ken::new(s).balance_of(args.address(0)?)?.into()),
        )
        .arg("account", ArgKind::Address),
        GetterCommand::query(
            key,
            "cancellations",
            "Gets the replacement address of the given <account>, or a zero-address when it has not been cancelled",
            format!("t0ken token cancellations {}", EXAMPLE_HOLDER),
            |s, args| Ok(T0ken::new(s).cancellations(args.address(0)?)?.into()),
        )
        .arg("account", ArgKind::Address),
        GetterCommand::query(
            key,
            "compliance",
            "Gets the compliance contract address for the t0ken",
            "t0ken token compliance",
            |s, _| Ok(T0ken::new(s).compliance()?.into()),
        ),
        GetterCommand::query(
            key,
            "decimals",
            "Gets the number of decimals the t0ken is set to",
            "t0ken token decimals",
            |s, _| Ok(T0ken::new(s).decimals()?.into()),
        ),
        GetterCommand::query(
            key,
            "getSuperseded",
            "Gets the superseded address of the given <account>",
            format!("t0ken token getSuperseded {}", EXAMPLE_HOLDER),
            |s, args| Ok(T0ken::new(s).get_superseded(args.address(0)?)?.into()),
        )
        .arg("account", ArgKind::Address),
        GetterCommand::query(
            key,
            "holderAt",
            "Gets the holder address at the given <index>",
            "t0ken token holderAt 5",
            |s, args| Ok(T0ken::new(s).holder_at(args.uint(0)?)?.into()),
        )
        .arg("index", ArgKind::Index),
        GetterCommand::query(
            key,
            "isHolder",
            "Checks if the given <account> is a current holder",
            format!("t0ken token isHolder {}", EXAMPLE_HOLDER),
            |s, args| Ok(T0ken::new(s).is_holder(args.address(0)?)?.into()),
        )
        .arg("account", ArgKind::Address),
        GetterCommand::query(
            key,
            "isSuperseded",
            "Checks if the <account> is superseded by another",
            format!("t0ken token isSuperseded {}", EXAMPLE_HOLDER),
            |s, args| Ok(T0ken::new(s).is_superseded(args.address(0)?)?.into()),
        )
        .arg("account", ArgKind::Address),
        GetterCommand::query(
            key,
            "issuer",
            "Gets the issuer of the t0ken",
            "t0ken token issuer",
            |s, _| Ok(T0ken::new(s).issuer()?.into()),
        ),
        GetterCommand::query(
            key,
            "issuingFinished",
            "Returns if issuing has been finished",
            "t0ken token issuingFinished",
            |s, _| Ok(T0ken::new(s).issuing_finished()?.into()),
        ),
        GetterCommand::query(
            key,
            "name",
            "Gets the name of the t0ken",
            "t0ken token name",
            |s, _| Ok(T0ken::new(s).name()?.into()),
        ),
        GetterCommand::query(
            key,
            "shareholders",
            "Gets the total number of shareholders",
            "t0ken token shareholders",
            |s, _| Ok(T0ken::new(s).shareholders()?.into()),
        ),
        GetterCommand::query(
            key,
            "symbol",
            "Gets the symbol of the t0ken",
            "t0ken token symbol",
            |s, _| Ok(T0ken::new(s).symbol()?.into()),
        ),
        GetterCommand::query(
            key,
            "totalSupply",
            "Gets the total supply",
            "t0ken token totalSupply",
            |s, _| Ok(T0ken::new(s).total_supply()?.into()),
        ),
    ]
}

pub fn build_registry() -> Registry {
    RegistryBuilder::new(COMMAND, "T0ken security token getters", CONTRACT_KEY, ARTIFACT)
        .getters(getter_commands())
        .capability(lockable::getter_commands)
        .capability(ownable::getter_commands)
        .build()
}

/// The process-wide T0ken registry, built on first use.
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(build_registry)
}
