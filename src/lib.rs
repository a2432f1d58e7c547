// Person Accounts - Core Library
// Exposes the account model for the demo binary and tests

pub mod currency;
pub mod entities;
pub mod report;
pub mod demo;

// Re-export commonly used types
pub use currency::{zero, Currency};
pub use entities::{
    Account, AccountKind, AccountType, BankAccount,
    Checking, CheckingKind, Savings, SavingsKind,
    Person, PersonId,
    Possession,
};
pub use report::{balance_line, possession_line};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
