// 💳 Account Entity - Checking and Savings over any currency type
//
// "Two names, one behavior"
//
// Problem solved:
// - Checking and Savings are distinct types that never get mixed up
// - deposit / withdraw / balance are written exactly once
// - The holder is a PersonId handle, so an account never keeps its Person alive
// - Withdrawals may overdraw: there is no sufficiency check

use log::debug;
use std::fmt;
use std::marker::PhantomData;

use super::person::PersonId;
use crate::currency::Currency;

// ============================================================================
// ACCOUNT TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    /// Checking account (daily spending)
    Checking,

    /// Savings account
    Savings,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "Checking",
            AccountType::Savings => "Savings",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ACCOUNT CAPABILITY
// ============================================================================

/// Account capability: deposit, withdraw, balance
///
/// Implementors only expose their balance slot; the operations themselves
/// are provided here so every variant behaves identically.
pub trait Account {
    type Currency: Currency;

    /// Mutable access to the stored balance
    fn balance_mut(&mut self) -> &mut Self::Currency;

    /// Read-only access to the stored balance
    fn balance_ref(&self) -> &Self::Currency;

    /// Person this account belongs to
    fn holder(&self) -> PersonId;

    /// Which variant this is
    fn account_type(&self) -> AccountType;

    /// Add `amount` to the balance (no sign check)
    fn deposit(&mut self, amount: Self::Currency) {
        *self.balance_mut() += amount;
        debug!(
            "{} deposit {:?} for holder {} → {:?}",
            self.account_type(),
            amount,
            self.holder(),
            self.balance_ref()
        );
    }

    /// Subtract `amount` from the balance (may go negative)
    fn withdraw(&mut self, amount: Self::Currency) {
        *self.balance_mut() -= amount;
        debug!(
            "{} withdraw {:?} for holder {} → {:?}",
            self.account_type(),
            amount,
            self.holder(),
            self.balance_ref()
        );
    }

    /// Current balance
    fn balance(&self) -> Self::Currency {
        *self.balance_ref()
    }

    /// Check if account is overdrawn (negative balance)
    fn is_overdrawn(&self) -> bool {
        self.balance() < <Self::Currency as Currency>::zero()
    }
}

// ============================================================================
// ACCOUNT KINDS
// ============================================================================

/// Compile-time tag that gives a `BankAccount` its identity
pub trait AccountKind {
    const ACCOUNT_TYPE: AccountType;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavingsKind;

impl AccountKind for CheckingKind {
    const ACCOUNT_TYPE: AccountType = AccountType::Checking;
}

impl AccountKind for SavingsKind {
    const ACCOUNT_TYPE: AccountType = AccountType::Savings;
}

// ============================================================================
// BANK ACCOUNT
// ============================================================================

/// Shared implementation behind both account variants
#[derive(Debug, Clone, PartialEq)]
pub struct BankAccount<C: Currency, K: AccountKind> {
    balance: C,
    holder: PersonId,
    kind: PhantomData<K>,
}

/// Checking account over currency `C`
pub type Checking<C = f64> = BankAccount<C, CheckingKind>;

/// Savings account over currency `C`
pub type Savings<C = f64> = BankAccount<C, SavingsKind>;

impl<C: Currency, K: AccountKind> BankAccount<C, K> {
    /// Open an account for `holder` with a zero balance
    pub fn new(holder: PersonId) -> Self {
        BankAccount {
            balance: C::zero(),
            holder,
            kind: PhantomData,
        }
    }
}

impl<C: Currency, K: AccountKind> Account for BankAccount<C, K> {
    type Currency = C;

    fn balance_mut(&mut self) -> &mut C {
        &mut self.balance
    }

    fn balance_ref(&self) -> &C {
        &self.balance
    }

    fn holder(&self) -> PersonId {
        self.holder
    }

    fn account_type(&self) -> AccountType {
        K::ACCOUNT_TYPE
    }
}

// ============================================================================
// TESTS
// ============================================================================
