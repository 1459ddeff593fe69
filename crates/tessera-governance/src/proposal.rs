//! Proposal records and their store.
//!
//! Proposals are kept in an arena (`Vec`) indexed by their dense numeric
//! ids, which start at 1 and follow creation order. A proposal is never
//! deleted; its lifecycle is create -> vote -> execute.

use std::collections::{BTreeMap, HashSet};
use tessera_types::{Address, Amount};

use crate::config::GovernanceConfig;
use crate::error::GovernanceError;

/// What a proposal does to the ledger when executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalKind {
    /// Create new tokens
    Mint,
    /// Destroy existing tokens
    Burn,
}

impl ProposalKind {
    pub fn is_mint(&self) -> bool {
        matches!(self, ProposalKind::Mint)
    }
}

/// Direction of a cast ballot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ballot {
    /// Vote in favor
    For,
    /// Vote against
    Against,
}

/// A mint or burn proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    /// Unique id, dense, assigned in creation order starting at 1
    pub id: u64,
    /// Who proposed it
    pub proposer: Address,
    /// Declared beneficiary, validated non-zero at creation
    pub target: Address,
    /// Token amount to mint or burn
    pub amount: Amount,
    /// Mint or burn
    pub kind: ProposalKind,
    /// Timing unit at creation
    pub created_at: u64,
    /// First instant at which voting is closed
    pub voting_ends_at: u64,
    /// First instant at which execution is allowed; fixed at creation
    pub execution_ready_at: u64,
    /// Accumulated weight in favor
    pub votes_for: Amount,
    /// Accumulated weight against
    pub votes_against: Amount,
    /// One-way flag, set by execution
    pub executed: bool,
    /// Identities that have cast a ballot (membership only, not direction)
    voters: HashSet<Address>,
}

impl Proposal {
    /// Whether the voting window is still open at `now`.
    pub fn voting_open(&self, now: u64) -> bool {
        now < self.voting_ends_at
    }

    /// Whether `voter` has already cast a ballot.
    pub fn has_voted(&self, voter: &Address) -> bool {
        self.voters.contains(voter)
    }

    /// Number of ballots cast.
    pub fn voter_count(&self) -> usize {
        self.voters.len()
    }

    /// Total weight cast, for and against.
    pub fn total_votes(&self) -> Amount {
        self.votes_for.saturating_add(self.votes_against)
    }
}

/// Owns every proposal and its ballot records.
///
/// Also maintains the open-proposal index consulted by the transfer guard:
/// a set of ids that are unexecuted and whose voting window had not expired
/// as of the last observed `now`, plus expiry buckets ordered by window
/// end. The index replaces a full scan per query with an amortized O(1)
/// check; expired ids are drained lazily as time advances.
#[derive(Debug)]
pub struct ProposalStore {
    proposals: Vec<Proposal>,
    voting_window: u64,
    execution_delay: u64,
    /// Ids open and unexecuted as of the last drain
    open_unexecuted: HashSet<u64>,
    /// voting_ends_at -> ids whose window closes at that instant
    expirations: BTreeMap<u64, Vec<u64>>,
}

impl ProposalStore {
    /// Create an empty store with the given timing parameters.
    pub fn new(config: &GovernanceConfig) -> Self {
        Self {
            proposals: Vec::new(),
            voting_window: config.voting_window,
            execution_delay: config.execution_delay,
            open_unexecuted: HashSet::new(),
            expirations: BTreeMap::new(),
        }
    }

    /// Allocate the next id and store a fresh proposal.
    pub fn create(
        &mut self,
        proposer: Address,
        target: Address,
        amount: Amount,
        kind: ProposalKind,
        now: u64,
    ) -> u64 {
        let id = self.proposals.len() as u64 + 1;
        let voting_ends_at = now.saturating_add(self.voting_window);

        self.proposals.push(Proposal {
            id,
            proposer,
            target,
            amount,
            kind,
            created_at: now,
            voting_ends_at,
            execution_ready_at: now.saturating_add(self.execution_delay),
            votes_for: Amount::ZERO,
            votes_against: Amount::ZERO,
            executed: false,
            voters: HashSet::new(),
        });

        self.open_unexecuted.insert(id);
        self.expirations.entry(voting_ends_at).or_default().push(id);

        id
    }

    /// Look up a proposal by id.
    pub fn get(&self, id: u64) -> Result<&Proposal, GovernanceError> {
        id.checked_sub(1)
            .and_then(|idx| self.proposals.get(idx as usize))
            .ok_or(GovernanceError::ProposalNotFound(id))
    }

    fn get_mut(&mut self, id: u64) -> Result<&mut Proposal, GovernanceError> {
        id.checked_sub(1)
            .and_then(|idx| self.proposals.get_mut(idx as usize))
            .ok_or(GovernanceError::ProposalNotFound(id))
    }

    /// Record a ballot with the given weight.
    ///
    /// The duplicate check and the tally update form one atomic step: the
    /// store is only reachable behind an exclusive borrow, so no second
    /// vote by the same identity can interleave between them.
    pub fn record_vote(
        &mut self,
        id: u64,
        voter: Address,
        ballot: Ballot,
        weight: Amount,
        now: u64,
    ) -> Result<(), GovernanceError> {
        let proposal = self.get_mut(id)?;

        // Tallies freeze once executed, even inside the window.
        if proposal.executed {
            return Err(GovernanceError::AlreadyExecuted);
        }

        if !proposal.voting_open(now) {
            return Err(GovernanceError::VotingClosed);
        }

        if proposal.voters.contains(&voter) {
            return Err(GovernanceError::AlreadyVoted);
        }

        match ballot {
            Ballot::For => proposal.votes_for = proposal.votes_for.saturating_add(weight),
            Ballot::Against => {
                proposal.votes_against = proposal.votes_against.saturating_add(weight)
            }
        }
        proposal.voters.insert(voter);

        Ok(())
    }

    /// Flip the one-way `executed` flag.
    pub fn mark_executed(&mut self, id: u64) -> Result<(), GovernanceError> {
        let proposal = self.get_mut(id)?;
        if proposal.executed {
            return Err(GovernanceError::AlreadyExecuted);
        }
        proposal.executed = true;

        self.open_unexecuted.remove(&id);
        Ok(())
    }

    /// True iff some proposal is inside its voting window and unexecuted.
    ///
    /// Repeated calls with unchanged state return the same result; `now`
    /// is monotone, so draining expired ids is safe.
    pub fn any_open_unexecuted(&mut self, now: u64) -> bool {
        self.drain_expired(now);
        !self.open_unexecuted.is_empty()
    }

    fn drain_expired(&mut self, now: u64) {
        while let Some(entry) = self.expirations.first_entry() {
            if *entry.key() > now {
                break;
            }
            for id in entry.remove() {
                self.open_unexecuted.remove(&id);
            }
        }
    }

    /// Number of proposals ever created.
    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    /// All proposals, in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Proposal> {
        self.proposals.iter()
    }
}
