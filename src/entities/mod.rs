// Entity Models
//
// Ownership flows one way:
// - Person owns its Checking and Savings accounts and its possessions
// - Accounts point back at their holder through a PersonId, never a reference

pub mod account;
pub mod person;
pub mod possession;

pub use account::{
    Account, AccountKind, AccountType, BankAccount,
    Checking, CheckingKind, Savings, SavingsKind,
};
pub use person::{Person, PersonId};
pub use possession::Possession;
