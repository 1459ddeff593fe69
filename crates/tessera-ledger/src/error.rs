use thiserror::Error;
use tessera_types::Amount;

/// Errors that can occur in ledger operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient funds: have {have}, need {need}")]
    InsufficientFunds { have: Amount, need: Amount },

    #[error("Zero address not allowed")]
    ZeroAddress,

    #[error("Total supply overflow")]
    SupplyOverflow,
}
