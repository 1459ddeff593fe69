use tessera_ledger::LedgerError;
use tessera_types::Amount;
use thiserror::Error;

/// Errors that can occur in governance operations.
///
/// All failures are synchronous and leave state unchanged; none trigger an
/// internal retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GovernanceError {
    #[error("Proposal not found: {0}")]
    ProposalNotFound(u64),

    #[error("Insufficient balance to propose: have {have}, need {need}")]
    InsufficientBalance { have: Amount, need: Amount },

    #[error("Insufficient balance to burn: have {have}, need {need}")]
    InsufficientBalanceToBurn { have: Amount, need: Amount },

    #[error("Invalid proposal target")]
    InvalidTarget,

    #[error("No voting power")]
    NoVotingPower,

    #[error("Voting window has closed")]
    VotingClosed,

    #[error("Already voted")]
    AlreadyVoted,

    #[error("Execution not ready: ready at {ready_at}, now {now}")]
    ExecutionNotReady { ready_at: u64, now: u64 },

    #[error("Proposal already executed")]
    AlreadyExecuted,

    #[error("Approval threshold not met: {votes_for} for, {threshold} required")]
    ThresholdNotMet { votes_for: Amount, threshold: Amount },

    #[error("Transfers are blocked while voting is in progress")]
    TransferBlockedDuringVoting,

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
}
