// 🎬 Demo script - John and Jane
//
// Replays the reference scenario and returns the transcript line by line,
// so `main` can print it and tests can compare it.

use log::info;

use crate::entities::{Account, Person, Possession};
use crate::report::{balance_line, possession_line};

/// Run the full John/Jane scenario
pub fn run() -> Vec<String> {
    let mut lines = Vec::new();

    let mut john: Person = Person::new("John Doe");
    info!("running account script for {}", john.name);

    lines.push(balance_line("Initial Checking Balance", john.checking().balance()));
    lines.push(balance_line("Initial Savings Balance", john.savings().balance()));

    // Deposits
    john.checking_mut().deposit(1000.0);
    john.savings_mut().deposit(5000.0);
    lines.push(balance_line("After Deposit - Checking Balance", john.checking().balance()));
    lines.push(balance_line("After Deposit - Savings Balance", john.savings().balance()));

    // Withdrawals
    john.checking_mut().withdraw(300.0);
    john.savings_mut().withdraw(1200.0);
    lines.push(balance_line("After Withdraw - Checking Balance", john.checking().balance()));
    lines.push(balance_line("After Withdraw - Savings Balance", john.savings().balance()));

    // Overdraft is allowed
    john.checking_mut().withdraw(1000.0);
    lines.push(balance_line("Overdrawn Checking Balance", john.checking().balance()));

    john.savings_mut().withdraw(3800.0);
    lines.push(balance_line("After Full Withdrawal - Savings Balance", john.savings().balance()));

    lines.extend(possessions_section(&mut john));

    let mut jane: Person = Person::new("Jane Smith");
    info!("running account script for {}", jane.name);
    jane.checking_mut().deposit(2500.0);
    jane.savings_mut().deposit(8000.0);
    lines.push(balance_line("Jane's Checking Balance", jane.checking().balance()));
    lines.push(balance_line("Jane's Savings Balance", jane.savings().balance()));

    lines
}

/// Only the possession part of the script
pub fn run_possessions() -> Vec<String> {
    let mut john: Person = Person::new("John Doe");
    possessions_section(&mut john)
}

fn possessions_section(john: &mut Person) -> Vec<String> {
    john.add_possession(Possession::new("Laptop", 200.0));
    john.add_possession(Possession::new("Headphones", 50.0));

    let mut lines = vec!["John's Possessions:".to_string()];
    lines.extend(john.possessions().iter().map(possession_line));
    lines
}
