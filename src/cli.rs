//! Command tree for the t0ken CLI.
//!
//! Global flags and the nonce commands are clap-derived; contract getters are
//! mounted from their registries.

use crate::plugins::{self, nonce::NonceCommand};

use clap::{Args, Command, Subcommand};
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Path to the TOML config file (default ~/.t0ken/config.toml).
    #[clap(long, env = "T0KEN_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// JSON-RPC endpoint, overrides `rpc_url` from config.
    #[clap(long, env = "T0KEN_RPC_URL", global = true, value_name = "URL")]
    pub rpc_url: Option<String>,
    /// Signing account (hex or alias), overrides `signer` from config.
    #[clap(long, global = true, value_name = "ADDRESS")]
    pub from: Option<String>,
    /// Increase log verbosity (-v, -vv, -vvv).
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

pub fn command() -> Command {
    let root = Command::new("t0ken")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Query the T0ken and BrokerDealer registry contracts over JSON-RPC")
        .subcommand_required(true)
        .arg_required_else_help(true);
    let root = GlobalArgs::augment_args(root);

    let nonce = NonceCommand::augment_subcommands(
        Command::new("nonce")
            .about("Nonce utilities")
            .subcommand_required(true)
            .arg_required_else_help(true),
    );

    plugins::registries()
        .into_iter()
        .fold(root.subcommand(nonce), |root, registry| {
            root.subcommand(registry.command())
        })
}
