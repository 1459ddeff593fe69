//! Thread-safe engine handle.
//!
//! The plain [`GovernanceEngine`](crate::engine::GovernanceEngine) is
//! serialized statically by `&mut self`. Explicit-thread callers share one
//! engine through this handle instead: a single mutex acts as the global
//! sequencer, so every operation (including the check-then-mutate inside
//! duplicate-vote detection) runs as one indivisible unit.

use std::sync::Arc;

use parking_lot::Mutex;
use tessera_ledger::Ledger;
use tessera_types::{Address, Amount};

use crate::engine::GovernanceEngine;
use crate::error::GovernanceError;
use crate::proposal::{Ballot, ProposalKind};

/// Cloneable, `Send + Sync` handle to a shared [`GovernanceEngine`].
pub struct SharedEngine<L: Ledger> {
    inner: Arc<Mutex<GovernanceEngine<L>>>,
}

impl<L: Ledger> Clone for SharedEngine<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: Ledger> SharedEngine<L> {
    pub fn new(engine: GovernanceEngine<L>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn create_proposal(
        &self,
        proposer: Address,
        target: Address,
        amount: Amount,
        kind: ProposalKind,
        now: u64,
    ) -> Result<u64, GovernanceError> {
        self.inner.lock().create_proposal(proposer, target, amount, kind, now)
    }

    pub fn vote(
        &self,
        voter: Address,
        proposal_id: u64,
        ballot: Ballot,
        now: u64,
    ) -> Result<(), GovernanceError> {
        self.inner.lock().vote(voter, proposal_id, ballot, now)
    }

    pub fn execute_proposal(&self, proposal_id: u64, now: u64) -> Result<(), GovernanceError> {
        self.inner.lock().execute_proposal(proposal_id, now)
    }

    pub fn transfer(
        &self,
        from: Address,
        to: Address,
        amount: Amount,
        now: u64,
    ) -> Result<(), GovernanceError> {
        self.inner.lock().transfer(from, to, amount, now)
    }

    pub fn balance_of(&self, who: &Address) -> Amount {
        self.inner.lock().balance_of(who)
    }

    pub fn proposal_count(&self) -> u64 {
        self.inner.lock().proposal_count()
    }

    /// Run a closure against the locked engine, for reads the fixed
    /// method surface does not cover.
    pub fn with<R>(&self, f: impl FnOnce(&GovernanceEngine<L>) -> R) -> R {
        f(&self.inner.lock())
    }
}
