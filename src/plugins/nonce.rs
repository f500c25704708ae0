//! Nonce utilities and the `--nonce` flag shared by transaction commands.

use crate::core::chain::ChainConnection;
use crate::core::error::T0kenError;
use crate::core::nonce::NonceAllocator;
use crate::core::runtime::Runtime;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum NonceCommand {
    /// Gets the next nonce for an address
    #[clap(after_help = "Example:\n  t0ken nonce next 0xf01ff29dcbee147e9ca151a281bfdf136f66a45b")]
    Next {
        /// Hex address or keystore alias
        address: String,
    },
    /// Shows the nonce the next transaction from the signing account will use
    #[clap(after_help = "Example:\n  t0ken nonce allocate --from ops --nonce 42")]
    Allocate {
        #[clap(flatten)]
        nonce: NonceArgs,
    },
}

/// `--nonce` for commands that submit transactions.
#[derive(clap::Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonceArgs {
    /// manually set the nonce for the transaction
    #[clap(long, default_value_t = 0)]
    pub nonce: u64,
}

impl NonceArgs {
    /// Bind the flag to `allocator` before anything is allocated.
    pub fn apply<C: ChainConnection>(
        &self,
        allocator: &mut NonceAllocator<C>,
    ) -> Result<(), T0kenError> {
        allocator.set_override(self.nonce)
    }
}

pub fn run_nonce_cli(rt: &mut Runtime<'_>, cmd: NonceCommand) -> Result<String, T0kenError> {
    match cmd {
        NonceCommand::Next { address } => {
            let account = rt.resolve(&address)?;
            let n = rt.connection()?.pending_nonce_at(account)?;
            Ok(n.to_string())
        }
        NonceCommand::Allocate { nonce } => {
            let account = rt.signer()?;
            let mut allocator = NonceAllocator::new(rt.connection()?, account);
            nonce.apply(&mut allocator)?;
            Ok(allocator.next_nonce()?.to_string())
        }
    }
}
