//! Getter command descriptors and per-contract registries.
//!
//! A registry is `[abi, bin] ++ contract getters ++ capability getters`. Each
//! descriptor carries its own `address_override` tag: introspection commands
//! never take `--address`, every query command does. The clap tree is derived
//! from the descriptors, so nothing mutates commands after construction.

use crate::core::abi::{self, Token};
use crate::core::address::parse_address;
use crate::core::artifacts::{self, ArtifactKind};
use crate::core::chain::CallSession;
use crate::core::error::T0kenError;
use crate::core::runtime::Runtime;
use alloy_primitives::{Address, U256};
use clap::{Arg, ArgMatches, Command};
use std::fmt;

pub const ADDRESS_FLAG: &str = "address";

/// Positional argument validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Hex account or contract address.
    Address,
    /// Non-negative decimal integer up to 256 bits.
    Index,
}

impl ArgKind {
    pub fn parse(self, name: &str, raw: &str) -> Result<Token, T0kenError> {
        match self {
            ArgKind::Address => parse_address(raw).map(Token::Address).map_err(|_| {
                T0kenError::ArgumentError(format!("<{}> must be a hex address, got '{}'", name, raw))
            }),
            ArgKind::Index => abi::parse_uint(raw).map(Token::Uint).map_err(|_| {
                T0kenError::ArgumentError(format!(
                    "<{}> must be a non-negative integer, got '{}'",
                    name, raw
                ))
            }),
        }
    }

    fn help(self) -> &'static str {
        match self {
            ArgKind::Address => "hex address",
            ArgKind::Index => "non-negative integer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalArg {
    pub name: &'static str,
    pub kind: ArgKind,
}

/// Positional arguments after validation, in declaration order.
pub struct Args<'a>(&'a [Token]);

impl<'a> Args<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Args(tokens)
    }

    pub fn address(&self, index: usize) -> Result<Address, T0kenError> {
        match self.0.get(index) {
            Some(Token::Address(a)) => Ok(*a),
            _ => Err(T0kenError::ArgumentError(format!(
                "argument {} is not an address",
                index
            ))),
        }
    }

    pub fn uint(&self, index: usize) -> Result<U256, T0kenError> {
        match self.0.get(index) {
            Some(Token::Uint(n)) => Ok(*n),
            _ => Err(T0kenError::ArgumentError(format!(
                "argument {} is not an integer",
                index
            ))),
        }
    }
}

pub type QueryFn = fn(&CallSession<'_>, &Args<'_>) -> Result<Token, T0kenError>;

/// Builds a capability's getters for a contract config key.
pub type CapabilityFn = fn(&'static str) -> Vec<GetterCommand>;

#[derive(Clone, Copy)]
pub enum Action {
    /// Print embedded artifact text. No network.
    Artifact {
        contract: &'static str,
        kind: ArtifactKind,
    },
    /// Connect, resolve the contract address and run one read.
    Query(QueryFn),
}

impl Action {
    /// Whether the pre-run hook must establish the chain connection.
    pub fn needs_connection(&self) -> bool {
        matches!(self, Action::Query(_))
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Artifact { contract, kind } => f
                .debug_struct("Artifact")
                .field("contract", contract)
                .field("kind", kind)
                .finish(),
            Action::Query(_) => f.write_str("Query"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetterCommand {
    name: &'static str,
    about: String,
    example: String,
    contract_key: &'static str,
    args: Vec<PositionalArg>,
    address_override: bool,
    action: Action,
}

impl GetterCommand {
    /// `abi` or `bin` for `artifact`. Never takes `--address`.
    pub fn introspection(
        contract_key: &'static str,
        artifact: &'static str,
        kind: ArtifactKind,
        example: impl Into<String>,
    ) -> Self {
        let (name, what) = match kind {
            ArtifactKind::Abi => ("abi", "ABI"),
            ArtifactKind::Bin => ("bin", "Binary"),
        };
        Self {
            name,
            about: format!("Outputs the {} {}", artifact, what),
            example: example.into(),
            contract_key,
            args: Vec::new(),
            address_override: false,
            action: Action::Artifact {
                contract: artifact,
                kind,
            },
        }
    }

    /// A read-only contract call. Always takes `--address`.
    pub fn query(
        contract_key: &'static str,
        name: &'static str,
        about: impl Into<String>,
        example: impl Into<String>,
        run: QueryFn,
    ) -> Self {
        Self {
            name,
            about: about.into(),
            example: example.into(),
            contract_key,
            args: Vec::new(),
            address_override: true,
            action: Action::Query(run),
        }
    }

    pub fn arg(mut self, name: &'static str, kind: ArgKind) -> Self {
        self.args.push(PositionalArg { name, kind });
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn contract_key(&self) -> &'static str {
        self.contract_key
    }

    pub fn address_override(&self) -> bool {
        self.address_override
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(self.name)
            .about(self.about.clone())
            .after_help(format!("Example:\n  {}", self.example));
        for arg in &self.args {
            cmd = cmd.arg(
                Arg::new(arg.name)
                    .value_name(arg.name)
                    .required(true)
                    .help(arg.kind.help()),
            );
        }
        if self.address_override {
            cmd = cmd.arg(
                Arg::new(ADDRESS_FLAG)
                    .long(ADDRESS_FLAG)
                    .value_name("HEX")
                    .help(format!(
                        "address of the contract (default \"[{}] value from config\")",
                        self.contract_key
                    )),
            );
        }
        cmd
    }

    /// Validate arguments, then run. Argument and resolution failures happen
    /// before any connection is opened.
    pub fn execute(&self, matches: &ArgMatches, rt: &mut Runtime<'_>) -> Result<Token, T0kenError> {
        let tokens = self
            .args
            .iter()
            .map(|arg| {
                let raw = matches.get_one::<String>(arg.name).ok_or_else(|| {
                    T0kenError::ArgumentError(format!("missing <{}>", arg.name))
                })?;
                arg.kind.parse(arg.name, raw)
            })
            .collect::<Result<Vec<_>, _>>()?;

        match self.action {
            Action::Artifact { contract, kind } => {
                Ok(Token::String(artifacts::get(contract, kind)?))
            }
            Action::Query(run) => {
                let address = self.target_address(matches, rt)?;
                tracing::debug!(command = self.name, contract = %address, "running getter");
                let conn = rt.connection()?;
                let session = CallSession::new(conn, address);
                run(&session, &Args::new(&tokens))
            }
        }
    }

    /// `--address` if given, else `contracts.<key>` from config.
    fn target_address(&self, matches: &ArgMatches, rt: &Runtime<'_>) -> Result<Address, T0kenError> {
        let flag = if self.address_override {
            matches
                .get_one::<String>(ADDRESS_FLAG)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
        } else {
            None
        };
        if let Some(raw) = flag {
            return parse_address(raw);
        }
        rt.config()
            .contract_address(self.contract_key)?
            .ok_or_else(|| {
                T0kenError::ResolutionError(format!(
                    "no address for [{}]: pass --address or set contracts.{} in the config",
                    self.contract_key, self.contract_key
                ))
            })
    }
}

/// The getter commands for one contract, in display order.
#[derive(Debug, Clone)]
pub struct Registry {
    name: &'static str,
    about: &'static str,
    contract_key: &'static str,
    commands: Vec<GetterCommand>,
}

impl Registry {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn contract_key(&self) -> &'static str {
        self.contract_key
    }

    pub fn commands(&self) -> &[GetterCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&GetterCommand> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub fn command(&self) -> Command {
        Command::new(self.name)
            .about(self.about)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommands(self.commands.iter().map(GetterCommand::command))
    }

    pub fn dispatch(&self, matches: &ArgMatches, rt: &mut Runtime<'_>) -> Result<Token, T0kenError> {
        let (name, sub) = matches.subcommand().ok_or_else(|| {
            T0kenError::ArgumentError(format!("'{}' requires a subcommand", self.name))
        })?;
        let getter = self.find(name).ok_or_else(|| {
            T0kenError::ArgumentError(format!("unknown {} command '{}'", self.name, name))
        })?;
        getter.execute(sub, rt)
    }
}

/// Assembles a [`Registry`]: introspection first, then contract getters, then
/// capability sets in the order they were added.
pub struct RegistryBuilder {
    name: &'static str,
    about: &'static str,
    contract_key: &'static str,
    introspection: Vec<GetterCommand>,
    getters: Vec<GetterCommand>,
    capabilities: Vec<GetterCommand>,
}

impl RegistryBuilder {
    pub fn new(
        name: &'static str,
        about: &'static str,
        contract_key: &'static str,
        artifact: &'static str,
    ) -> Self {
        let introspection = vec![
            GetterCommand::introspection(
                contract_key,
                artifact,
                ArtifactKind::Abi,
                format!("t0ken {} abi", name),
            ),
            GetterCommand::introspection(
                contract_key,
                artifact,
                ArtifactKind::Bin,
                format!("t0ken {} bin", name),
            ),
        ];
        Self {
            name,
            about,
            contract_key,
            introspection,
            getters: Vec::new(),
            capabilities: Vec::new(),
        }
    }

    pub fn getters(mut self, getters: Vec<GetterCommand>) -> Self {
        self.getters.extend(getters);
        self
    }

    pub fn capability(mut self, capability: CapabilityFn) -> Self {
        self.capabilities.extend(capability(self.contract_key));
        self
    }

    pub fn build(self) -> Registry {
        let mut commands = self.introspection;
        commands.extend(self.getters);
        commands.extend(self.capabilities);
        Registry {
            name: self.name,
            about: self.about,
            contract_key: self.contract_key,
            commands,
        }
    }
}
