use crate::error::{FaqChatbotError, Result};

/// A single non-negative balance with two guarded operations. Single-owner,
/// no persistence, no locking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    balance: f64,
}

impl Ledger {
    /// A ledger starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(initial: f64) -> Self {
        Self { balance: initial }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Increase the balance unconditionally.
    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
    }

    /// Decrease the balance, failing without mutation if `amount` exceeds the
    /// current balance.
    pub fn withdraw(&mut self, amount: f64) -> Result<()> {
        if amount > self.balance {
            return Err(FaqChatbotError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_balance_is_zero() {
        assert_eq!(Ledger::new().balance(), 0.0);
    }

    #[test]
    fn test_initial_balance() {
        assert_eq!(Ledger::with_balance(20.0).balance(), 20.0);
    }

    #[test]
    fn test_deposit() {
        let mut ledger = Ledger::with_balance(20.0);
        ledger.deposit(90.0);
        assert_eq!(ledger.balance(), 110.0);
    }

    #[test]
    fn test_withdraw() {
        let mut ledger = Ledger::with_balance(20.0);
        ledger.withdraw(10.0).unwrap();
        assert_eq!(ledger.balance(), 10.0);
    }

    #[test]
    fn test_withdraw_more_than_balance_fails() {
        let mut ledger = Ledger::with_balance(20.0);
        let err = ledger.withdraw(25.0).unwrap_err();
        assert!(matches!(
            err,
            FaqChatbotError::InsufficientFunds {
                requested,
                available,
            } if requested == 25.0 && available == 20.0
        ));
        assert_eq!(ledger.balance(), 20.0);
    }

    #[test]
    fn test_withdraw_exact_balance() {
        let mut ledger = Ledger::with_balance(20.0);
        ledger.withdraw(20.0).unwrap();
        assert_eq!(ledger.balance(), 0.0);
    }
}
