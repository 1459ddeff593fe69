//! Tessera Types - Core type definitions for the TESSERA governed token ledger.
//!
//! This crate provides the fundamental types used throughout TESSERA:
//! - Addresses (20-byte, Bech32m encoded)
//! - Amounts (token units with checked arithmetic)

pub mod address;
pub mod amount;
pub mod error;

#[cfg(feature = "serde")]
mod serialization;

pub use address::Address;
pub use amount::Amount;
pub use error::TypesError;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Address, Amount, TypesError};
}
