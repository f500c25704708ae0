//! t0ken: operator CLI for the T0ken security token and BrokerDealer registry.
//!
//! Every contract gets a registry of getter commands: two introspection
//! commands (`abi`, `bin`) that never touch the network, contract-specific
//! getters, and the getters of each capability the contract implements
//! (ownable, lockable). Getters target the configured contract address unless
//! `--address` is given.
//!
//! Transactions take their sequence number from a [`core::nonce::NonceAllocator`],
//! which prefers an operator-supplied `--nonce` and otherwise asks the node.
//!
//! # Examples
//!
//! ```bash
//! # Print the T0ken ABI
//! t0ken token abi
//!
//! # Balance of a holder against a non-default deployment
//! t0ken token balanceOf 0xf01ff29dcbee147e9ca151a281bfdf136f66a45b --address 0x...
//!
//! # Pending nonce of a keystore alias
//! t0ken nonce next ops
//! ```
//!
//! # Crate Structure
//!
//! - [`core`]: codecs, config, chain seam, nonce allocation, registry machinery
//! - [`plugins`]: contract registries, capability modules and nonce commands

pub mod cli;
pub mod core;
pub mod plugins;

use crate::core::chain::Connect;
use crate::core::config::Config;
use crate::core::error::T0kenError;
use crate::core::rpc::HttpConnector;
use crate::core::runtime::Runtime;
use crate::plugins::nonce::{self, NonceCommand};

use clap::{ArgMatches, FromArgMatches};
use std::ffi::OsString;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Entry point for the binary: parses `std::env::args`, sets up logging and
/// runs against the node from config.
pub fn run() -> Result<(), T0kenError> {
    let matches = cli::command().get_matches();
    let global = cli::GlobalArgs::from_arg_matches(&matches)?;
    init_tracing(global.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&matches, global, &HttpConnector, &mut out)
}

/// Parse `args` (including the binary name) and run with `connector`, writing
/// command output to `out`.
pub fn run_from<I, T>(args: I, connector: &dyn Connect, out: &mut dyn Write) -> Result<(), T0kenError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = cli::command().try_get_matches_from(args)?;
    let global = cli::GlobalArgs::from_arg_matches(&matches)?;
    execute(&matches, global, connector, out)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("t0ken={}", level)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn execute(
    matches: &ArgMatches,
    global: cli::GlobalArgs,
    connector: &dyn Connect,
    out: &mut dyn Write,
) -> Result<(), T0kenError> {
    let mut config = Config::load(global.config.as_deref())?;
    config.apply_overrides(global.rpc_url.as_deref(), global.from.as_deref());
    let mut rt = Runtime::new(config, connector);

    let (name, sub) = matches
        .subcommand()
        .ok_or_else(|| T0kenError::ArgumentError("a subcommand is required".into()))?;

    let rendered = match name {
        "nonce" => nonce::run_nonce_cli(&mut rt, NonceCommand::from_arg_matches(sub)?)?,
        _ => {
            let registry = plugins::registries()
                .into_iter()
                .find(|r| r.name() == name)
                .ok_or_else(|| T0kenError::ArgumentError(format!("unknown command '{}'", name)))?;
            registry.dispatch(sub, &mut rt)?.to_string()
        }
    };

    writeln!(out, "{}", rendered)?;
    Ok(())
}
