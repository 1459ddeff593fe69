use thiserror::Error;

/// Errors that can occur when constructing or parsing core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("Invalid address length: expected 20 bytes, got {0}")]
    InvalidAddressLength(usize),

    #[error("Invalid address format: {0}")]
    InvalidAddressFormat(String),

    #[error("Bech32 error: {0}")]
    Bech32Error(String),

    #[error("Hex error: {0}")]
    HexError(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl From<hex::FromHexError> for TypesError {
    fn from(err: hex::FromHexError) -> Self {
        TypesError::HexError(err.to_string())
    }
}
