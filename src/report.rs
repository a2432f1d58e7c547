// 🖨️ Console report lines
//
//   <Label>: <value>
//   - <name>: $<cost>
//
// Values use `{:?}` so whole floats keep their trailing `.0` (1000.0, -300.0).

use std::fmt::Debug;

use crate::entities::Possession;

/// Format a labelled balance: `Initial Checking Balance: 0.0`
pub fn balance_line<C: Debug>(label: &str, amount: C) -> String {
    format!("{}: {:?}", label, amount)
}

/// Format one possession entry: `- Laptop: $200.0`
pub fn possession_line(possession: &Possession) -> String {
    format!("- {}", possession)
}
