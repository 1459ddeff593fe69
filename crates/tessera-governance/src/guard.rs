//! Transfer freeze policy.
//!
//! Peer-to-peer transfers are blocked while any proposal is inside its
//! open voting window and unexecuted; this keeps balance-weighted votes
//! from being shuffled between identities mid-vote. Mints and burns
//! applied by proposal execution are not routed through this check.

use crate::error::GovernanceError;
use crate::proposal::ProposalStore;

/// Fail with `TransferBlockedDuringVoting` if any proposal is open and
/// unexecuted at `now`. Consulted by every transfer at the ledger boundary.
pub fn check_transfer_allowed(
    store: &mut ProposalStore,
    now: u64,
) -> Result<(), GovernanceError> {
    if store.any_open_unexecuted(now) {
        tracing::debug!("Transfer blocked at {}: voting in progress", now);
        return Err(GovernanceError::TransferBlockedDuringVoting);
    }
    Ok(())
}
