//! The governance engine: proposal lifecycle over a token ledger.
//!
//! Holds the proposal store, the ledger, the config, and the event log.
//! Every operation takes `now` from the caller (the engine never advances
//! time) and executes to completion against a consistent state snapshot:
//! `&mut self` gives exclusive access for the duration of the call.

use tessera_ledger::Ledger;
use tessera_types::{Address, Amount};

use crate::config::GovernanceConfig;
use crate::error::GovernanceError;
use crate::events::{EventLog, GovernanceEvent};
use crate::guard;
use crate::proposal::{Ballot, Proposal, ProposalKind, ProposalStore};

/// Share of total cast weight that `votes_for` must reach for a proposal
/// to pass. The comparison is `votes_for >= floor(total * 51 / 100)`, so a
/// proposal with zero ballots passes (threshold 0).
const APPROVAL_PERCENT: u128 = 51;

/// Governance over a token ledger.
pub struct GovernanceEngine<L: Ledger> {
    config: GovernanceConfig,
    store: ProposalStore,
    ledger: L,
    events: EventLog,
}

impl<L: Ledger> GovernanceEngine<L> {
    /// Create an engine over `ledger` with the given config.
    pub fn new(ledger: L, config: GovernanceConfig) -> Self {
        let store = ProposalStore::new(&config);
        Self {
            config,
            store,
            ledger,
            events: EventLog::new(),
        }
    }

    /// Create a mint or burn proposal.
    ///
    /// The proposer must hold at least `min_balance_to_propose` and the
    /// target must not be the zero address.
    pub fn create_proposal(
        &mut self,
        proposer: Address,
        target: Address,
        amount: Amount,
        kind: ProposalKind,
        now: u64,
    ) -> Result<u64, GovernanceError> {
        let have = self.ledger.balance_of(&proposer);
        if have < self.config.min_balance_to_propose {
            return Err(GovernanceError::InsufficientBalance {
                have,
                need: self.config.min_balance_to_propose,
            });
        }

        if target.is_zero() {
            return Err(GovernanceError::InvalidTarget);
        }

        let id = self.store.create(proposer, target, amount, kind, now);
        self.events.emit(GovernanceEvent::ProposalCreated {
            id,
            proposer,
            target,
            amount,
            kind,
        });

        tracing::info!(
            "Proposal {} created by {} ({:?} {} for {})",
            id,
            proposer,
            kind,
            amount,
            target
        );
        Ok(id)
    }

    /// Cast a ballot on a proposal.
    ///
    /// The ballot weight is the voter's balance read fresh at vote time,
    /// never a snapshot from proposal creation.
    pub fn vote(
        &mut self,
        voter: Address,
        proposal_id: u64,
        ballot: Ballot,
        now: u64,
    ) -> Result<(), GovernanceError> {
        // Existence first, so an unknown id surfaces as such even for
        // balance-less callers.
        self.store.get(proposal_id)?;

        let weight = self.ledger.balance_of(&voter);
        if weight.is_zero() {
            return Err(GovernanceError::NoVotingPower);
        }

        self.store.record_vote(proposal_id, voter, ballot, weight, now)?;
        self.events.emit(GovernanceEvent::Voted {
            id: proposal_id,
            voter,
            ballot,
        });

        tracing::debug!(
            "Vote on proposal {}: {} cast {:?} with weight {}",
            proposal_id,
            voter,
            ballot,
            weight
        );
        Ok(())
    }

    /// Execute a proposal whose delay has elapsed and whose tally meets
    /// the approval threshold.
    ///
    /// A failed threshold check leaves the proposal unexecuted and
    /// retriable; since tallies freeze when the voting window closes, a
    /// retry after window close can only succeed if the frozen tally
    /// already passes.
    pub fn execute_proposal(&mut self, proposal_id: u64, now: u64) -> Result<(), GovernanceError> {
        let proposal = self.store.get(proposal_id)?;

        if now < proposal.execution_ready_at {
            return Err(GovernanceError::ExecutionNotReady {
                ready_at: proposal.execution_ready_at,
                now,
            });
        }

        if proposal.executed {
            return Err(GovernanceError::AlreadyExecuted);
        }

        let total = proposal.total_votes();
        let threshold = total.percent_floor(APPROVAL_PERCENT);
        if proposal.votes_for < threshold {
            return Err(GovernanceError::ThresholdNotMet {
                votes_for: proposal.votes_for,
                threshold,
            });
        }

        let proposer = proposal.proposer;
        let amount = proposal.amount;
        let kind = proposal.kind;

        match kind {
            ProposalKind::Mint => {
                self.ledger.mint(&proposer, amount)?;
            }
            ProposalKind::Burn => {
                let have = self.ledger.balance_of(&proposer);
                if have < amount {
                    return Err(GovernanceError::InsufficientBalanceToBurn {
                        have,
                        need: amount,
                    });
                }
                self.ledger.burn(&proposer, amount)?;
            }
        }

        self.store.mark_executed(proposal_id)?;
        self.events
            .emit(GovernanceEvent::ProposalExecuted { id: proposal_id });

        tracing::info!(
            "Proposal {} executed: {:?} {} applied to {}",
            proposal_id,
            kind,
            amount,
            proposer
        );
        Ok(())
    }

    /// Peer-to-peer transfer, guarded by the open-voting freeze.
    ///
    /// Mints and burns applied by [`execute_proposal`](Self::execute_proposal)
    /// bypass this guard; only transfers are frozen.
    pub fn transfer(
        &mut self,
        from: Address,
        to: Address,
        amount: Amount,
        now: u64,
    ) -> Result<(), GovernanceError> {
        guard::check_transfer_allowed(&mut self.store, now)?;
        self.ledger.transfer(&from, &to, amount)?;

        tracing::debug!("Transfer: {} -> {} ({})", from, to, amount);
        Ok(())
    }

    /// Look up a proposal.
    pub fn proposal(&self, id: u64) -> Result<&Proposal, GovernanceError> {
        self.store.get(id)
    }

    /// Number of proposals ever created.
    pub fn proposal_count(&self) -> u64 {
        self.store.len() as u64
    }

    /// All proposals, in id order.
    pub fn proposals(&self) -> impl Iterator<Item = &Proposal> {
        self.store.iter()
    }

    /// Emitted events, in order.
    pub fn events(&self) -> &[GovernanceEvent] {
        self.events.as_slice()
    }

    /// Balance of an account, per the underlying ledger.
    pub fn balance_of(&self, who: &Address) -> Amount {
        self.ledger.balance_of(who)
    }

    /// The underlying ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// The engine's configuration.
    pub fn config(&self) -> &GovernanceConfig {
        &self.config
    }
}
