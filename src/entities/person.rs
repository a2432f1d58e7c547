// 👤 Person Entity - owns one Checking, one Savings and a list of possessions
//
// Identity is a UUID handle. Accounts store that handle instead of a
// reference to the Person, so there is no cycle and no shared ownership.
//
// Both accounts are built inside `Person::new`, so they exist for the
// whole life of the Person and there is nothing to unwrap on access.

use log::debug;
use std::fmt;
use uuid::Uuid;

use super::account::{Account, Checking, Savings};
use super::possession::Possession;
use crate::currency::Currency;

// ============================================================================
// PERSON ID
// ============================================================================

/// Stable identity of a Person (UUID v4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(Uuid);

impl PersonId {
    /// Generate a fresh identity
    pub fn new() -> Self {
        PersonId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// PERSON ENTITY
// ============================================================================

/// A person with two accounts in currency `C` (dollars as `f64` by default)
#[derive(Debug)]
pub struct Person<C: Currency = f64> {
    id: PersonId,

    /// Display name (e.g., "John Doe")
    pub name: String,

    /// Possessions in insertion order
    possessions: Vec<Possession>,

    checking: Checking<C>,
    savings: Savings<C>,
}

impl<C: Currency> Person<C> {
    /// Create a person and open both accounts at zero
    pub fn new(name: impl Into<String>) -> Self {
        let id = PersonId::new();
        let person = Person {
            id,
            name: name.into(),
            possessions: Vec::new(),
            checking: Checking::new(id),
            savings: Savings::new(id),
        };
        debug!("opened checking and savings for {} ({})", person.name, person.id);
        person
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn checking(&self) -> &Checking<C> {
        &self.checking
    }

    pub fn checking_mut(&mut self) -> &mut Checking<C> {
        &mut self.checking
    }

    pub fn savings(&self) -> &Savings<C> {
        &self.savings
    }

    pub fn savings_mut(&mut self) -> &mut Savings<C> {
        &mut self.savings
    }

    /// Possessions in the order they were added
    pub fn possessions(&self) -> &[Possession] {
        &self.possessions
    }

    /// Direct access to the possession list
    pub fn possessions_mut(&mut self) -> &mut Vec<Possession> {
        &mut self.possessions
    }

    /// Append a possession to the end of the list
    pub fn add_possession(&mut self, possession: Possession) {
        debug!("{} acquired {}", self.name, possession);
        self.possessions.push(possession);
    }

    /// Checking + savings
    pub fn total_balance(&self) -> C {
        self.checking.balance() + self.savings.balance()
    }

    /// Sum of all possession costs
    pub fn total_possession_cost(&self) -> f64 {
        self.possessions.iter().map(|p| p.cost).sum()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::AccountType;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_person_creation() {
        let john: Person = Person::new("John Doe");

        assert_eq!(john.name, "John Doe");
        assert_eq!(john.checking().balance(), 0.0);
        assert_eq!(john.savings().balance(), 0.0);
        assert!(john.possessions().is_empty());
    }

    #[test]
    fn test_accounts_point_back_to_holder() {
        let john: Person = Person::new("John Doe");

        assert_eq!(john.checking().holder(), john.id());
        assert_eq!(john.savings().holder(), john.id());
        assert_eq!(john.checking().account_type(), AccountType::Checking);
        assert_eq!(john.savings().account_type(), AccountType::Savings);
    }

    #[test]
    fn test_person_ids_are_unique() {
        let john: Person = Person::new("John Doe");
        let jane: Person = Person::new("Jane Smith");
        assert_ne!(john.id(), jane.id());
        assert_ne!(john.checking().holder(), jane.checking().holder());
    }

    #[test]
    fn test_possessions_keep_insertion_order() {
        let mut john: Person = Person::new("John Doe");
        john.add_possession(Possession::new("Laptop", 200.0));
        john.add_possession(Possession::new("Headphones", 50.0));

        let names: Vec<&str> = john.possessions().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Laptop", "Headphones"]);
        assert_eq!(john.possessions()[0].cost, 200.0);
        assert_eq!(john.possessions()[1].cost, 50.0);
    }

    #[test]
    fn test_possessions_mut_appends() {
        let mut jane: Person = Person::new("Jane Smith");
        jane.possessions_mut().push(Possession::new("Bike", 350.0));
        jane.add_possession(Possession::new("Helmet", 40.0));

        assert_eq!(jane.possessions().len(), 2);
        assert_eq!(jane.possessions()[1].name, "Helmet");
    }

    #[test]
    fn test_people_are_independent() {
        let mut john: Person = Person::new("John Doe");
        let mut jane: Person = Person::new("Jane Smith");

        john.checking_mut().deposit(1000.0);
        john.add_possession(Possession::new("Laptop", 200.0));
        jane.savings_mut().deposit(8000.0);

        assert_eq!(john.checking().balance(), 1000.0);
        assert_eq!(john.savings().balance(), 0.0);
        assert_eq!(jane.checking().balance(), 0.0);
        assert_eq!(jane.savings().balance(), 8000.0);
        assert_eq!(john.possessions().len(), 1);
        assert!(jane.possessions().is_empty());
    }

    #[test]
    fn test_totals() {
        let mut john: Person = Person::new("John Doe");
        john.checking_mut().deposit(1000.0);
        john.savings_mut().deposit(5000.0);
        john.checking_mut().withdraw(1300.0);
        john.add_possession(Possession::new("Laptop", 200.0));
        john.add_possession(Possession::new("Headphones", 50.0));

        assert_eq!(john.total_balance(), 4700.0);
        assert_eq!(john.total_possession_cost(), 250.0);
    }

    #[test]
    fn test_person_with_integer_currency() {
        let mut cents: Person<i64> = Person::new("Penny");
        cents.checking_mut().deposit(1999);
        cents.checking_mut().withdraw(2500);

        assert_eq!(cents.checking().balance(), -501);
        assert!(cents.checking().is_overdrawn());
        assert_eq!(cents.savings().balance(), 0);
    }

    #[test]
    fn test_person_with_decimal_currency() {
        let mut jane: Person<Decimal> = Person::new("Jane Smith");
        jane.checking_mut().deposit(dec!(2500.00));
        jane.savings_mut().deposit(dec!(8000.00));

        assert_eq!(jane.total_balance(), dec!(10500.00));
    }
}
