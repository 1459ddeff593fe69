//! Tessera Governance - Token-holder governance over a fungible ledger.
//!
//! This crate provides:
//! - Proposal lifecycle management (create -> vote -> execute)
//! - Balance-weighted vote tallying with a 51% approval threshold
//! - Time-gated execution behind a fixed delay
//! - A transfer freeze while any proposal's voting window is open
//!
//! Voting power is the voter's balance at vote time, not a snapshot taken
//! at proposal creation.

pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod guard;
pub mod proposal;
pub mod shared;

pub use config::GovernanceConfig;
pub use engine::GovernanceEngine;
pub use error::GovernanceError;
pub use events::{EventLog, GovernanceEvent};
pub use proposal::{Ballot, Proposal, ProposalKind, ProposalStore};
pub use shared::SharedEngine;
