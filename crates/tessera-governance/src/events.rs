//! Observable governance events.
//!
//! Every state-changing operation appends to the engine's [`EventLog`] on
//! success. The log is ordered and append-only.

use tessera_types::{Address, Amount};

use crate::proposal::{Ballot, ProposalKind};

/// An event emitted by a successful governance operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GovernanceEvent {
    /// A proposal was created.
    ProposalCreated {
        id: u64,
        proposer: Address,
        target: Address,
        amount: Amount,
        kind: ProposalKind,
    },
    /// A ballot was cast on a proposal.
    Voted {
        id: u64,
        voter: Address,
        ballot: Ballot,
    },
    /// A proposal was executed and its action applied to the ledger.
    ProposalExecuted { id: u64 },
}

/// Ordered, append-only event log.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GovernanceEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn emit(&mut self, event: GovernanceEvent) {
        self.events.push(event);
    }

    /// All events, in emission order.
    pub fn as_slice(&self) -> &[GovernanceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GovernanceEvent> {
        self.events.iter()
    }
}
