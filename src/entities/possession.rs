// 🎒 Possession - a named, priced item owned by a Person

use std::fmt;

/// Plain value record: what it is and what it cost
#[derive(Debug, Clone, PartialEq)]
pub struct Possession {
    /// Cost in dollars
    pub cost: f64,

    /// Item name (e.g., "Laptop")
    pub name: String,
}

impl Possession {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Possession {
            cost,
            name: name.into(),
        }
    }
}

impl fmt::Display for Possession {
    /// Renders `Laptop: $200.0`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${:?}", self.name, self.cost)
    }
}
