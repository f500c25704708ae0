//! Transaction sequence numbers for the signing account.
//!
//! The allocator is an explicit value owned by whatever submits transactions.
//! An operator override (`--nonce`) wins over the node; without one every read
//! asks the node for the account's pending count. Nothing is cached, so two
//! reads can differ if transactions were mined in between.

use crate::core::chain::ChainConnection;
use crate::core::error::T0kenError;
use alloy_primitives::Address;

pub struct NonceAllocator<C> {
    conn: C,
    account: Address,
    forced: u64,
}

impl<C: ChainConnection> NonceAllocator<C> {
    pub fn new(conn: C, account: Address) -> Self {
        Self {
            conn,
            account,
            forced: 0,
        }
    }

    /// The operator override, if one is set.
    pub fn override_value(&self) -> Option<u64> {
        (self.forced > 0).then_some(self.forced)
    }

    /// Force `nonce` for subsequent allocations, or with `0` drop the override
    /// and re-synchronize with the node's pending count.
    ///
    /// Re-synchronizing queries the node so an unreachable node is reported here
    /// rather than at submission time.
    pub fn set_override(&mut self, nonce: u64) -> Result<(), T0kenError> {
        if nonce == 0 {
            self.forced = 0;
            let pending = self.conn.pending_nonce_at(self.account)?;
            tracing::debug!(account = %self.account, pending, "nonce override cleared");
        } else {
            self.forced = nonce;
            tracing::debug!(account = %self.account, nonce, "nonce override set");
        }
        Ok(())
    }

    /// Nonce for the next transaction. Does not reserve it.
    pub fn next_nonce(&self) -> Result<u64, T0kenError> {
        if let Some(forced) = self.override_value() {
            return Ok(forced);
        }
        self.conn.pending_nonce_at(self.account)
    }
}
