//! Balance accounting for the TESSERA token.
//!
//! The governance layer only depends on the [`Ledger`] trait; [`TokenLedger`]
//! is the in-memory implementation used by nodes and tests.

use std::collections::HashMap;
use tessera_types::{Address, Amount};

use crate::error::LedgerError;

/// The balance-accounting collaborator consulted by governance.
///
/// Minting and burning carry no authorization check at this level; callers
/// (the governance engine) decide when they are permitted.
pub trait Ledger {
    /// Current balance of an account. Unknown accounts hold zero.
    fn balance_of(&self, who: &Address) -> Amount;

    /// Move `amount` from one account to another.
    fn transfer(&mut self, from: &Address, to: &Address, amount: Amount)
        -> Result<(), LedgerError>;

    /// Create `amount` new tokens and credit them to `to`.
    fn mint(&mut self, to: &Address, amount: Amount) -> Result<(), LedgerError>;

    /// Destroy `amount` tokens held by `from`.
    fn burn(&mut self, from: &Address, amount: Amount) -> Result<(), LedgerError>;

    /// Total tokens in circulation.
    fn total_supply(&self) -> Amount;
}

/// In-memory token ledger.
///
/// Zero balances are removed from the table so it only holds live accounts.
#[derive(Debug, Clone, Default)]
pub struct TokenLedger {
    balances: HashMap<Address, Amount>,
    total_supply: Amount,
}

impl TokenLedger {
    /// Create an empty ledger with zero supply.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger with `initial_supply` credited to `owner`.
    pub fn with_initial_supply(owner: Address, initial_supply: Amount) -> Self {
        let mut ledger = Self::new();
        if !initial_supply.is_zero() {
            ledger.balances.insert(owner, initial_supply);
            ledger.total_supply = initial_supply;
        }
        ledger
    }

    /// Number of accounts holding a nonzero balance.
    pub fn account_count(&self) -> usize {
        self.balances.len()
    }

    fn set_balance(&mut self, who: Address, new_balance: Amount) {
        if new_balance.is_zero() {
            self.balances.remove(&who);
        } else {
            self.balances.insert(who, new_balance);
        }
    }
}

impl Ledger for TokenLedger {
    fn balance_of(&self, who: &Address) -> Amount {
        self.balances.get(who).copied().unwrap_or(Amount::ZERO)
    }

    fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if to.is_zero() {
            return Err(LedgerError::ZeroAddress);
        }

        let from_balance = self.balance_of(from);
        if from_balance < amount {
            return Err(LedgerError::InsufficientFunds {
                have: from_balance,
                need: amount,
            });
        }

        // Debit first so a self-transfer reads its own updated balance.
        self.set_balance(*from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.set_balance(*to, to_balance.saturating_add(amount));

        Ok(())
    }

    fn mint(&mut self, to: &Address, amount: Amount) -> Result<(), LedgerError> {
        if to.is_zero() {
            return Err(LedgerError::ZeroAddress);
        }

        self.total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::SupplyOverflow)?;

        // No individual balance can exceed the (just checked) total supply.
        let to_balance = self.balance_of(to);
        self.set_balance(*to, to_balance + amount);

        tracing::debug!("Minted {} to {}", amount, to);
        Ok(())
    }

    fn burn(&mut self, from: &Address, amount: Amount) -> Result<(), LedgerError> {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            return Err(LedgerError::InsufficientFunds {
                have: from_balance,
                need: amount,
            });
        }

        self.total_supply = self.total_supply - amount;
        self.set_balance(*from, from_balance - amount);

        tracing::debug!("Burned {} from {}", amount, from);
        Ok(())
    }

    fn total_supply(&self) -> Amount {
        self.total_supply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 20])
    }

    fn seeded_ledger() -> TokenLedger {
        TokenLedger::with_initial_supply(addr(1), Amount::new(1_000_000))
    }

    #[test]
    fn test_initial_supply() {
        let ledger = seeded_ledger();
        assert_eq!(ledger.total_supply(), Amount::new(1_000_000));
        assert_eq!(ledger.balance_of(&addr(1)), Amount::new(1_000_000));
        assert_eq!(ledger.balance_of(&addr(2)), Amount::ZERO);
        assert_eq!(ledger.account_count(), 1);
    }

    #[test]
    fn test_transfer() {
        let mut ledger = seeded_ledger();
        ledger.transfer(&addr(1), &addr(2), Amount::new(1_000)).unwrap();

        assert_eq!(ledger.balance_of(&addr(1)), Amount::new(999_000));
        assert_eq!(ledger.balance_of(&addr(2)), Amount::new(1_000));
        assert_eq!(ledger.total_supply(), Amount::new(1_000_000));
    }

    #[test]
    fn test_transfer_insufficient_funds() {
        let mut ledger = seeded_ledger();
        let result = ledger.transfer(&addr(1), &addr(2), Amount::new(2_000_000));
        assert_eq!(
            result,
            Err(LedgerError::InsufficientFunds {
                have: Amount::new(1_000_000),
                need: Amount::new(2_000_000),
            })
        );
        // State unchanged
        assert_eq!(ledger.balance_of(&addr(1)), Amount::new(1_000_000));
    }

    #[test]
    fn test_transfer_to_zero_address() {
        let mut ledger = seeded_ledger();
        assert_eq!(
            ledger.transfer(&addr(1), &Address::ZERO, Amount::new(10)),
            Err(LedgerError::ZeroAddress)
        );
    }

    #[test]
    fn test_transfer_to_self() {
        let mut ledger = seeded_ledger();
        ledger.transfer(&addr(1), &addr(1), Amount::new(500)).unwrap();
        assert_eq!(ledger.balance_of(&addr(1)), Amount::new(1_000_000));
    }

    #[test]
    fn test_transfer_full_balance_prunes_account() {
        let mut ledger = seeded_ledger();
        ledger.transfer(&addr(1), &addr(2), Amount::new(1_000_000)).unwrap();

        assert_eq!(ledger.balance_of(&addr(1)), Amount::ZERO);
        assert_eq!(ledger.account_count(), 1);
    }

    #[test]
    fn test_mint() {
        let mut ledger = seeded_ledger();
        ledger.mint(&addr(2), Amount::new(500_000)).unwrap();

        assert_eq!(ledger.total_supply(), Amount::new(1_500_000));
        assert_eq!(ledger.balance_of(&addr(2)), Amount::new(500_000));
    }

    #[test]
    fn test_mint_supply_overflow() {
        let mut ledger = seeded_ledger();
        assert_eq!(
            ledger.mint(&addr(2), Amount::MAX),
            Err(LedgerError::SupplyOverflow)
        );
        assert_eq!(ledger.total_supply(), Amount::new(1_000_000));
    }

    #[test]
    fn test_burn() {
        let mut ledger = seeded_ledger();
        ledger.burn(&addr(1), Amount::new(400_000)).unwrap();

        assert_eq!(ledger.total_supply(), Amount::new(600_000));
        assert_eq!(ledger.balance_of(&addr(1)), Amount::new(600_000));
    }

    #[test]
    fn test_burn_insufficient_funds() {
        let mut ledger = seeded_ledger();
        let result = ledger.burn(&addr(2), Amount::new(1));
        assert_eq!(
            result,
            Err(LedgerError::InsufficientFunds {
                have: Amount::ZERO,
                need: Amount::new(1),
            })
        );
    }
}
